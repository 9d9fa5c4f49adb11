use crate::core::SceneConfig;
use crate::domain::model::{OutputFormat, Scene};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_FREQ: f64 = 50.0;
const DEFAULT_FPS: u32 = 25;
const DEFAULT_SIZE: u32 = 480;
const DEFAULT_DRAG: f64 = 0.1;
const DEFAULT_KICK: f64 = 1.0;
const DEFAULT_COLOR: &str = crate::render::color::PENDULUM_PINK;

/// A scene preset loaded from a TOML file, for the `scene` binary.
///
/// ```toml
/// [scene]
/// name = "clock"
/// kind = "escapement"
///
/// [simulation]
/// duration = 30.0
/// drag = 0.1
/// kick = 1.0
///
/// [render]
/// fps = 25
/// size = 480
///
/// [output]
/// path = "./output"
/// file = "clock.gif"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub scene: SceneSection,
    pub simulation: SimulationSection,
    pub render: Option<RenderSection>,
    pub output: OutputSection,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSection {
    pub name: String,
    pub kind: Scene,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSection {
    pub duration: f64,
    pub freq: Option<f64>,
    pub drag: Option<f64>,
    pub kick: Option<f64>,
    pub init: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSection {
    pub fps: Option<u32>,
    pub size: Option<u32>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
    pub file: String,
    pub format: Option<OutputFormat>,
    pub dump_solution: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_str(&text)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(text)?;
        Ok(config)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl SceneConfig for TomlConfig {
    fn output_file(&self) -> &str {
        &self.output.file
    }

    fn duration(&self) -> f64 {
        self.simulation.duration
    }

    fn sample_freq(&self) -> f64 {
        self.simulation.freq.unwrap_or(DEFAULT_FREQ)
    }

    fn fps(&self) -> u32 {
        self.render.as_ref().and_then(|r| r.fps).unwrap_or(DEFAULT_FPS)
    }

    fn canvas_size(&self) -> u32 {
        self.render
            .as_ref()
            .and_then(|r| r.size)
            .unwrap_or(DEFAULT_SIZE)
    }

    fn drag(&self) -> f64 {
        self.simulation.drag.unwrap_or(DEFAULT_DRAG)
    }

    fn kick(&self) -> f64 {
        self.simulation.kick.unwrap_or(DEFAULT_KICK)
    }

    fn initial_state(&self) -> [f64; 2] {
        self.simulation.init.unwrap_or([0.0, 1.0])
    }

    fn format(&self) -> OutputFormat {
        self.output.format.unwrap_or(OutputFormat::Gif)
    }

    fn color_hex(&self) -> &str {
        self.render
            .as_ref()
            .and_then(|r| r.color.as_deref())
            .unwrap_or(DEFAULT_COLOR)
    }

    fn dump_solution(&self) -> bool {
        self.output.dump_solution.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("scene.name", &self.scene.name)?;
        validation::validate_positive_f64("simulation.duration", self.duration())?;
        validation::validate_positive_f64("simulation.freq", self.sample_freq())?;
        validation::validate_non_negative_f64("simulation.drag", self.drag())?;
        validation::validate_finite_values("simulation.kick", &[self.kick()])?;
        validation::validate_finite_values("simulation.init", &self.initial_state())?;
        validation::validate_positive_number("render.fps", self.fps() as usize, 1)?;
        validation::validate_frame_stride("simulation.freq", self.sample_freq(), self.fps())?;
        validation::validate_range("render.size", self.canvas_size(), 64, 4096)?;
        validation::validate_hex_color("render.color", self.color_hex())?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_path("output.file", &self.output.file)?;
        let allowed: &[&str] = match self.format() {
            OutputFormat::Gif => &["gif"],
            OutputFormat::Png => &["png"],
        };
        validation::validate_file_extension("output.file", &self.output.file, allowed)?;
        Ok(())
    }
}
