use chrono::{DateTime, Utc};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// The three animations the toolkit knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    Pendulum,
    Escapement,
    EscapementSurface,
}

impl Scene {
    pub fn label(&self) -> &'static str {
        match self {
            Scene::Pendulum => "pendulum",
            Scene::Escapement => "escapement",
            Scene::EscapementSurface => "escapement_surface",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Animated GIF in a single file
    Gif,
    /// Numbered PNG frames in a directory
    Png,
}

/// One sample of the oscillator state: angle from vertical and its rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub sigma: f64,
    pub dsigma: f64,
}

impl State {
    pub fn new(sigma: f64, dsigma: f64) -> Self {
        Self { sigma, dsigma }
    }

    /// Total energy for the unit-frequency oscillator, `(σ² + σ̇²) / 2`.
    pub fn energy(&self) -> f64 {
        0.5 * (self.sigma * self.sigma + self.dsigma * self.dsigma)
    }

    pub fn is_finite(&self) -> bool {
        self.sigma.is_finite() && self.dsigma.is_finite()
    }
}

impl From<[f64; 2]> for State {
    fn from(y: [f64; 2]) -> Self {
        Self::new(y[0], y[1])
    }
}

impl From<State> for [f64; 2] {
    fn from(s: State) -> Self {
        [s.sigma, s.dsigma]
    }
}

/// A solved IVP sampled on a uniform time grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub t: Vec<f64>,
    pub states: Vec<State>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Spacing of the sample grid (0.0 when there are fewer than two samples).
    pub fn step(&self) -> f64 {
        if self.t.len() < 2 {
            0.0
        } else {
            self.t[1] - self.t[0]
        }
    }
}

/// What `--dump-solution` writes next to the animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionDump {
    pub scene: String,
    pub drag: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kick: Option<f64>,
    pub generated_at: DateTime<Utc>,
    pub solution: Solution,
}

/// Rendered animation frames plus their playback rate.
pub struct FrameSet {
    pub frames: Vec<RgbaImage>,
    pub fps: u32,
}

impl FrameSet {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_energy() {
        assert_eq!(State::new(0.0, 1.0).energy(), 0.5);
        assert_eq!(State::new(1.0, 1.0).energy(), 1.0);
    }

    #[test]
    fn test_state_finiteness() {
        assert!(State::new(0.1, -0.2).is_finite());
        assert!(!State::new(f64::NAN, 0.0).is_finite());
        assert!(!State::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_scene_labels_roundtrip_through_serde() {
        let kind: Scene = serde_json::from_str("\"escapement_surface\"").unwrap();
        assert_eq!(kind, Scene::EscapementSurface);
        assert_eq!(
            serde_json::to_string(&Scene::Pendulum).unwrap(),
            "\"pendulum\""
        );
    }

    #[test]
    fn test_solution_step() {
        let solution = Solution {
            t: vec![0.0, 0.02, 0.04],
            states: vec![State::new(0.0, 1.0); 3],
        };
        assert_eq!(solution.len(), 3);
        assert!((solution.step() - 0.02).abs() < 1e-12);
    }
}
