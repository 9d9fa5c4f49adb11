pub mod config;
pub mod core;
pub mod domain;
pub mod encode;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub mod app;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::LocalStorage;
pub use crate::core::{engine::AnimationEngine, pipeline::ScenePipeline};
pub use crate::domain::model::{OutputFormat, Scene, Solution, State};
pub use crate::utils::error::{Result, SimError};
