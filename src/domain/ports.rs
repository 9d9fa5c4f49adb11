use crate::domain::model::{FrameSet, OutputFormat, Solution};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Everything a scene needs to know, whichever config source provided it.
pub trait SceneConfig: Send + Sync {
    fn output_file(&self) -> &str;
    fn duration(&self) -> f64;
    fn sample_freq(&self) -> f64;
    fn fps(&self) -> u32;
    fn canvas_size(&self) -> u32;
    fn drag(&self) -> f64;
    fn kick(&self) -> f64;
    fn initial_state(&self) -> [f64; 2];
    fn format(&self) -> OutputFormat;
    fn color_hex(&self) -> &str;
    fn dump_solution(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn simulate(&self) -> Result<Solution>;
    async fn render(&self, solution: &Solution) -> Result<FrameSet>;
    async fn encode(&self, frames: FrameSet) -> Result<String>;
}
