pub mod canvas;
pub mod color;
pub mod pendulum;
pub mod surface;
pub mod trajectory;
pub mod viewport;

use crate::core::oscillator::Escapement;
use crate::domain::model::{FrameSet, Scene, Solution};
use crate::domain::ports::SceneConfig;
use crate::render::canvas::Canvas;
use crate::render::color::BACKGROUND;
use crate::render::pendulum::PendulumView;
use crate::render::surface::SurfaceView;
use crate::render::trajectory::TrajectoryView;
use crate::render::viewport::{Viewport, WORLD_HALF};
use crate::utils::error::{Result, SimError};
use image::{imageops, Rgba, RgbaImage};

/// Turns a sampled solution into animation frames for one scene.
///
/// The swing scenes are two square panels side by side (pendulum left,
/// phase trajectory right); the surface scene is a single square panel.
pub struct SceneRenderer {
    scene: Scene,
    size: u32,
    fps: u32,
    stride: usize,
    color: Rgba<u8>,
    escapement: Escapement,
}

impl SceneRenderer {
    pub fn new(scene: Scene, config: &dyn SceneConfig) -> Result<Self> {
        let color = color::parse_hex(config.color_hex())?;
        let ratio = config.sample_freq() / config.fps() as f64;
        if !ratio.is_finite() || ratio < 1.0 - 1e-9 {
            return Err(SimError::RenderError {
                message: format!(
                    "fps ({}) cannot exceed the sampling frequency ({})",
                    config.fps(),
                    config.sample_freq()
                ),
            });
        }

        Ok(Self {
            scene,
            size: config.canvas_size(),
            fps: config.fps(),
            stride: (ratio.round() as usize).max(1),
            color,
            escapement: Escapement::new(config.drag(), config.kick()),
        })
    }

    pub fn render(&self, solution: &Solution) -> Result<FrameSet> {
        if solution.is_empty() {
            return Err(SimError::RenderError {
                message: "cannot render an empty solution".to_string(),
            });
        }

        tracing::debug!(
            "Rendering {} frames ({} samples, stride {})",
            (solution.len() - 1) / self.stride + 1,
            solution.len(),
            self.stride
        );

        match self.scene {
            Scene::Pendulum | Scene::Escapement => self.render_swing(solution),
            Scene::EscapementSurface => self.render_surface(solution),
        }
    }

    fn frame_indices(&self, len: usize) -> impl Iterator<Item = usize> + '_ {
        (0..len).step_by(self.stride)
    }

    fn render_swing(&self, solution: &Solution) -> Result<FrameSet> {
        let viewport = Viewport::square(WORLD_HALF, self.size);
        let pendulum = PendulumView::new(viewport, self.color);
        let trajectory = TrajectoryView::new(viewport, self.color);
        let background = trajectory.background(solution);

        let mut frames = Vec::new();
        for idx in self.frame_indices(solution.len()) {
            let state = solution.states[idx];

            let mut left = Canvas::new(self.size, self.size, BACKGROUND);
            pendulum.draw(&mut left, state.sigma);

            let mut right = Canvas::from_image(background.clone());
            trajectory.draw_marker(&mut right, state);

            let mut combined = RgbaImage::from_pixel(self.size * 2, self.size, BACKGROUND);
            imageops::replace(&mut combined, &left.into_image(), 0, 0);
            imageops::replace(&mut combined, &right.into_image(), self.size as i64, 0);
            frames.push(combined);
        }

        Ok(FrameSet {
            frames,
            fps: self.fps,
        })
    }

    fn render_surface(&self, solution: &Solution) -> Result<FrameSet> {
        let viewport = Viewport::square(WORLD_HALF, self.size);
        let surface = SurfaceView::new(viewport, self.escapement);
        let trajectory = TrajectoryView::new(viewport, self.color);

        let mut base = Canvas::from_image(surface.field_image());
        trajectory.draw_path(&mut base, solution);
        let base = base.into_image();

        let mut frames = Vec::new();
        for idx in self.frame_indices(solution.len()) {
            let mut canvas = Canvas::from_image(base.clone());
            trajectory.draw_marker(&mut canvas, solution.states[idx]);
            frames.push(canvas.into_image());
        }

        Ok(FrameSet {
            frames,
            fps: self.fps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::oscillator::Pendulum;
    use crate::core::solver::solve;
    use crate::domain::model::OutputFormat;

    struct TestConfig {
        fps: u32,
        freq: f64,
    }

    impl SceneConfig for TestConfig {
        fn output_file(&self) -> &str {
            "test.gif"
        }
        fn duration(&self) -> f64 {
            1.0
        }
        fn sample_freq(&self) -> f64 {
            self.freq
        }
        fn fps(&self) -> u32 {
            self.fps
        }
        fn canvas_size(&self) -> u32 {
            64
        }
        fn drag(&self) -> f64 {
            0.1
        }
        fn kick(&self) -> f64 {
            1.0
        }
        fn initial_state(&self) -> [f64; 2] {
            [0.0, 1.0]
        }
        fn format(&self) -> OutputFormat {
            OutputFormat::Gif
        }
        fn color_hex(&self) -> &str {
            "#f086dc"
        }
        fn dump_solution(&self) -> bool {
            false
        }
    }

    fn short_solution() -> Solution {
        solve(&Pendulum::new(0.1), [0.0, 1.0], 1.0, 50.0).unwrap()
    }

    #[test]
    fn test_swing_frames_are_two_panels_wide() {
        let config = TestConfig { fps: 25, freq: 50.0 };
        let renderer = SceneRenderer::new(Scene::Pendulum, &config).unwrap();
        let frames = renderer.render(&short_solution()).unwrap();

        // 51 samples, stride 2 -> 26 frames
        assert_eq!(frames.frame_count(), 26);
        assert_eq!(frames.fps, 25);
        assert_eq!(frames.frames[0].width(), 128);
        assert_eq!(frames.frames[0].height(), 64);
    }

    #[test]
    fn test_surface_frames_are_single_panel() {
        let config = TestConfig { fps: 25, freq: 50.0 };
        let renderer = SceneRenderer::new(Scene::EscapementSurface, &config).unwrap();
        let frames = renderer.render(&short_solution()).unwrap();

        assert_eq!(frames.frames[0].width(), 64);
        assert_eq!(frames.frames[0].height(), 64);
    }

    #[test]
    fn test_fps_above_sampling_rate_is_rejected() {
        let config = TestConfig { fps: 60, freq: 50.0 };
        assert!(SceneRenderer::new(Scene::Pendulum, &config).is_err());
    }

    #[test]
    fn test_empty_solution_is_rejected() {
        let config = TestConfig { fps: 25, freq: 50.0 };
        let renderer = SceneRenderer::new(Scene::Pendulum, &config).unwrap();
        let empty = Solution {
            t: vec![],
            states: vec![],
        };
        assert!(renderer.render(&empty).is_err());
    }
}
