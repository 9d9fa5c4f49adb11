use crate::utils::error::ErrorSeverity;
use crate::utils::{logger, validation::Validate};
use crate::{AnimationEngine, CliConfig, LocalStorage, Scene, ScenePipeline};
use clap::Parser;

/// Shared entry point for the scene binaries: parse flags, validate,
/// run the pipeline, and map failures to exit codes.
pub async fn run_scene(scene: Scene) {
    let mut config = CliConfig::parse();
    config.resolve_output(scene);

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting {} animation", scene.label());
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(".");
    let pipeline = ScenePipeline::new(scene, storage, config);
    let engine = AnimationEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ {} animation completed successfully!", scene.label());
            println!("✅ Animation completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ {} animation failed: {} (Category: {:?}, Severity: {:?})",
                scene.label(),
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
