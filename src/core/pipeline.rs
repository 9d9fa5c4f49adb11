use crate::core::oscillator::{Escapement, Oscillator, Pendulum};
use crate::core::solver;
use crate::domain::model::{FrameSet, OutputFormat, Scene, Solution, SolutionDump};
use crate::domain::ports::{Pipeline, SceneConfig, Storage};
use crate::encode::{gif, png};
use crate::render::SceneRenderer;
use crate::utils::error::Result;
use chrono::Utc;

pub struct ScenePipeline<S: Storage, C: SceneConfig> {
    scene: Scene,
    storage: S,
    config: C,
}

impl<S: Storage, C: SceneConfig> ScenePipeline<S, C> {
    pub fn new(scene: Scene, storage: S, config: C) -> Self {
        Self {
            scene,
            storage,
            config,
        }
    }

    fn model(&self) -> Box<dyn Oscillator> {
        match self.scene {
            Scene::Pendulum => Box::new(Pendulum::new(self.config.drag())),
            Scene::Escapement | Scene::EscapementSurface => {
                Box::new(Escapement::new(self.config.drag(), self.config.kick()))
            }
        }
    }

    fn kick(&self) -> Option<f64> {
        match self.scene {
            Scene::Pendulum => None,
            Scene::Escapement | Scene::EscapementSurface => Some(self.config.kick()),
        }
    }
}

/// Replace the extension suffix of `path` (or append when there is none).
fn with_suffix(path: &str, suffix: &str) -> String {
    match path.rsplit_once('.') {
        Some((stem, _ext)) => format!("{stem}{suffix}"),
        None => format!("{path}{suffix}"),
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: SceneConfig> Pipeline for ScenePipeline<S, C> {
    async fn simulate(&self) -> Result<Solution> {
        let model = self.model();
        tracing::debug!(
            "Solving {} IVP: init {:?}, {}s at {}Hz",
            self.scene.label(),
            self.config.initial_state(),
            self.config.duration(),
            self.config.sample_freq()
        );

        let solution = solver::solve(
            model.as_ref(),
            self.config.initial_state(),
            self.config.duration(),
            self.config.sample_freq(),
        )?;

        if self.config.dump_solution() {
            let dump = SolutionDump {
                scene: self.scene.label().to_string(),
                drag: self.config.drag(),
                kick: self.kick(),
                generated_at: Utc::now(),
                solution: solution.clone(),
            };
            let path = with_suffix(self.config.output_file(), ".solution.json");
            let json = serde_json::to_vec_pretty(&dump)?;
            self.storage.write_file(&path, &json).await?;
            tracing::debug!("Solution dump written to {}", path);
        }

        Ok(solution)
    }

    async fn render(&self, solution: &Solution) -> Result<FrameSet> {
        let renderer = SceneRenderer::new(self.scene, &self.config)?;
        renderer.render(solution)
    }

    async fn encode(&self, frames: FrameSet) -> Result<String> {
        let output = self.config.output_file().to_string();

        match self.config.format() {
            OutputFormat::Gif => {
                let frame_count = frames.frame_count();
                let bytes = gif::encode_gif(frames)?;
                tracing::debug!(
                    "Writing GIF ({} frames, {} bytes) to storage",
                    frame_count,
                    bytes.len()
                );
                self.storage.write_file(&output, &bytes).await?;
                Ok(output)
            }
            OutputFormat::Png => {
                let dir = with_suffix(&output, "");
                for (index, frame) in frames.frames.iter().enumerate() {
                    let bytes = png::encode_png(frame)?;
                    let path = format!("{}/{}", dir, png::frame_name(index));
                    self.storage.write_file(&path, &bytes).await?;
                }
                tracing::debug!("PNG sequence written under {}", dir);
                Ok(dir)
            }
        }
    }
}
