use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives a pipeline through its simulate/render/encode stages.
pub struct AnimationEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AnimationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Simulating...");
        let solution = self.pipeline.simulate().await?;
        tracing::info!("Simulated {} samples", solution.len());
        self.monitor.log_stats("Simulate");

        tracing::info!("Rendering...");
        let frames = self.pipeline.render(&solution).await?;
        tracing::info!("Rendered {} frames", frames.frame_count());
        self.monitor.log_stats("Render");

        tracing::info!("Encoding...");
        let output_path = self.pipeline.encode(frames).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Encode");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FrameSet, Solution, State};
    use crate::utils::error::SimError;
    use async_trait::async_trait;
    use image::RgbaImage;

    struct OkPipeline;

    #[async_trait]
    impl Pipeline for OkPipeline {
        async fn simulate(&self) -> Result<Solution> {
            Ok(Solution {
                t: vec![0.0, 0.5, 1.0],
                states: vec![State::new(0.0, 1.0); 3],
            })
        }

        async fn render(&self, solution: &Solution) -> Result<FrameSet> {
            Ok(FrameSet {
                frames: vec![RgbaImage::new(4, 4); solution.len()],
                fps: 2,
            })
        }

        async fn encode(&self, _frames: FrameSet) -> Result<String> {
            Ok("out.gif".to_string())
        }
    }

    struct FailingPipeline;

    #[async_trait]
    impl Pipeline for FailingPipeline {
        async fn simulate(&self) -> Result<Solution> {
            Err(SimError::SimulationError {
                message: "boom".to_string(),
            })
        }

        async fn render(&self, _solution: &Solution) -> Result<FrameSet> {
            unreachable!()
        }

        async fn encode(&self, _frames: FrameSet) -> Result<String> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_engine_runs_all_stages() {
        let engine = AnimationEngine::new(OkPipeline);
        let output = engine.run().await.unwrap();
        assert_eq!(output, "out.gif");
    }

    #[tokio::test]
    async fn test_engine_propagates_stage_failures() {
        let engine = AnimationEngine::new_with_monitoring(FailingPipeline, false);
        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, SimError::SimulationError { .. }));
    }
}
