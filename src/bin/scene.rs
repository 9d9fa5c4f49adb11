use anyhow::Context;
use clap::Parser;
use clocksim::config::toml_config::TomlConfig;
use clocksim::core::SceneConfig;
use clocksim::utils::{logger, validation::Validate};
use clocksim::{AnimationEngine, LocalStorage, ScenePipeline};

#[derive(Parser)]
#[command(name = "scene")]
#[command(about = "Render an oscillator animation described by a TOML preset")]
struct Args {
    /// Path to the TOML scene file
    #[arg(short, long, default_value = "scene.toml")]
    config: String,

    /// Override the output file name from the preset
    #[arg(short, long)]
    output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the monitoring setting from the preset
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be rendered without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting scene renderer");
    tracing::info!("📁 Loading scene from: {}", args.config);

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load scene file '{}'", args.config))?;

    if let Some(output) = args.output {
        tracing::info!("🔧 Output overridden to: {}", output);
        config.output.file = output;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Scene validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let scene = config.scene.kind;
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if args.dry_run {
        println!("Scene:    {} ({})", config.scene.name, scene.label());
        if let Some(description) = &config.scene.description {
            println!("About:    {}", description);
        }
        println!(
            "Simulate: {}s at {}Hz, drag {}, kick {}",
            config.duration(),
            config.sample_freq(),
            config.drag(),
            config.kick()
        );
        println!(
            "Render:   {}px panels at {}fps",
            config.canvas_size(),
            config.fps()
        );
        println!("Output:   {}/{}", config.output.path, config.output.file);
        println!("(dry run - nothing was rendered)");
        return Ok(());
    }

    let storage = LocalStorage::new(config.output.path.clone());
    let pipeline = ScenePipeline::new(scene, storage, config);
    let engine = AnimationEngine::new_with_monitoring(pipeline, monitor_enabled);

    let output_path = engine.run().await.context("scene rendering failed")?;

    println!("✅ Scene rendered successfully!");
    println!("📁 Output saved to: {}", output_path);
    Ok(())
}
