pub mod engine;
pub mod oscillator;
pub mod pipeline;
pub mod solver;

pub use crate::domain::model::{FrameSet, OutputFormat, Scene, Solution, State};
pub use crate::domain::ports::{Pipeline, SceneConfig, Storage};
pub use crate::utils::error::Result;
