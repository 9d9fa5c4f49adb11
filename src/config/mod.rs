pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::SceneConfig;
#[cfg(feature = "cli")]
use crate::domain::model::{OutputFormat, Scene};
#[cfg(feature = "cli")]
use crate::utils::error::{Result, SimError};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(about = "Simulate an oscillator and write an animation file")]
pub struct CliConfig {
    /// Output animation file (defaults to <scene>.gif)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Simulated seconds
    #[arg(long, default_value_t = 10.0)]
    pub duration: f64,

    /// Solution sampling frequency in Hz
    #[arg(long, default_value_t = 50.0)]
    pub freq: f64,

    /// Animation frame rate
    #[arg(long, default_value_t = 25)]
    pub fps: u32,

    /// Panel size in pixels
    #[arg(long, default_value_t = 480)]
    pub size: u32,

    /// Drag coefficient k
    #[arg(long, default_value_t = 0.1)]
    pub drag: f64,

    /// Escapement strength q (ignored by the plain pendulum)
    #[arg(long, default_value_t = 1.0)]
    pub kick: f64,

    /// Initial state as "sigma,dsigma"
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1,
        allow_hyphen_values = true,
        default_value = "0.0,1.0"
    )]
    pub init: Vec<f64>,

    /// Pendulum color as a hex string
    #[arg(long, default_value = "#f086dc")]
    pub color: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Gif)]
    pub format: OutputFormat,

    /// Write the sampled solution as JSON next to the animation
    #[arg(long)]
    pub dump_solution: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable system monitoring
    #[arg(long)]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fill in the scene's own default output file when `-o` was not given,
    /// so `escapement` without flags writes `escapement.gif`.
    pub fn resolve_output(&mut self, scene: Scene) {
        if self.output.is_none() {
            self.output = Some(format!("{}.gif", scene.label()));
        }
    }
}

#[cfg(feature = "cli")]
impl SceneConfig for CliConfig {
    fn output_file(&self) -> &str {
        self.output.as_deref().unwrap_or_default()
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn sample_freq(&self) -> f64 {
        self.freq
    }

    fn fps(&self) -> u32 {
        self.fps
    }

    fn canvas_size(&self) -> u32 {
        self.size
    }

    fn drag(&self) -> f64 {
        self.drag
    }

    fn kick(&self) -> f64 {
        self.kick
    }

    fn initial_state(&self) -> [f64; 2] {
        // Validation enforces exactly two components.
        [
            self.init.first().copied().unwrap_or(0.0),
            self.init.get(1).copied().unwrap_or(1.0),
        ]
    }

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn color_hex(&self) -> &str {
        &self.color
    }

    fn dump_solution(&self) -> bool {
        self.dump_solution
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let output = self.output_file();
        validation::validate_path("output", output)?;
        let allowed: &[&str] = match self.format {
            OutputFormat::Gif => &["gif"],
            OutputFormat::Png => &["png"],
        };
        validation::validate_file_extension("output", output, allowed)?;
        validation::validate_positive_f64("duration", self.duration)?;
        validation::validate_positive_f64("freq", self.freq)?;
        validation::validate_positive_number("fps", self.fps as usize, 1)?;
        validation::validate_frame_stride("freq", self.freq, self.fps)?;
        validation::validate_range("size", self.size, 64, 4096)?;
        validation::validate_non_negative_f64("drag", self.drag)?;
        validation::validate_finite_values("kick", &[self.kick])?;
        if self.init.len() != 2 {
            return Err(SimError::InvalidConfigValueError {
                field: "init".to_string(),
                value: format!("{:?}", self.init),
                reason: "Expected exactly two values: sigma,dsigma".to_string(),
            });
        }
        validation::validate_finite_values("init", &self.init)?;
        validation::validate_hex_color("color", &self.color)?;
        Ok(())
    }
}
