use clocksim::{
    AnimationEngine, CliConfig, LocalStorage, OutputFormat, Scene, ScenePipeline,
};
use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use std::io::Cursor;
use tempfile::TempDir;

fn small_config(output: &str) -> CliConfig {
    CliConfig {
        output: Some(output.to_string()),
        duration: 1.0,
        freq: 50.0,
        fps: 25,
        size: 64,
        drag: 0.1,
        kick: 1.0,
        init: vec![0.0, 1.0],
        color: "#f086dc".to_string(),
        format: OutputFormat::Gif,
        dump_solution: false,
        verbose: false,
        monitor: false,
    }
}

fn decode_gif(bytes: Vec<u8>) -> Vec<image::Frame> {
    let decoder = GifDecoder::new(Cursor::new(bytes)).unwrap();
    decoder.into_frames().collect_frames().unwrap()
}

#[tokio::test]
async fn test_end_to_end_pendulum_gif() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = ScenePipeline::new(Scene::Pendulum, storage, small_config("anim.gif"));
    let engine = AnimationEngine::new(pipeline);

    let output = engine.run().await.unwrap();
    assert_eq!(output, "anim.gif");

    let bytes = std::fs::read(temp_dir.path().join("anim.gif")).unwrap();
    assert!(!bytes.is_empty());

    // 1s at 50Hz is 51 samples; stride 2 gives 26 frames of two 64px panels
    let frames = decode_gif(bytes);
    assert_eq!(frames.len(), 26);
    assert_eq!(frames[0].buffer().width(), 128);
    assert_eq!(frames[0].buffer().height(), 64);
}

#[tokio::test]
async fn test_end_to_end_escapement_surface_gif() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let pipeline =
        ScenePipeline::new(Scene::EscapementSurface, storage, small_config("surface.gif"));
    let engine = AnimationEngine::new(pipeline);

    engine.run().await.unwrap();

    let bytes = std::fs::read(temp_dir.path().join("surface.gif")).unwrap();
    let frames = decode_gif(bytes);
    assert_eq!(frames.len(), 26);
    // Single square panel for the surface scene
    assert_eq!(frames[0].buffer().width(), 64);
    assert_eq!(frames[0].buffer().height(), 64);
}

#[tokio::test]
async fn test_end_to_end_png_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let mut config = small_config("anim.png");
    config.format = OutputFormat::Png;
    let pipeline = ScenePipeline::new(Scene::Escapement, storage, config);
    let engine = AnimationEngine::new(pipeline);

    let output = engine.run().await.unwrap();
    assert_eq!(output, "anim");

    let frame_dir = temp_dir.path().join("anim");
    let mut names: Vec<String> = std::fs::read_dir(&frame_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names.len(), 26);
    assert_eq!(names[0], "frame_0000.png");
    assert_eq!(names[25], "frame_0025.png");

    let first = image::open(frame_dir.join("frame_0000.png")).unwrap();
    assert_eq!(first.width(), 128);
}

#[tokio::test]
async fn test_solution_dump_is_written_and_parses() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    let mut config = small_config("anim.gif");
    config.dump_solution = true;
    let pipeline = ScenePipeline::new(Scene::Escapement, storage, config);
    let engine = AnimationEngine::new(pipeline);

    engine.run().await.unwrap();

    let bytes = std::fs::read(temp_dir.path().join("anim.solution.json")).unwrap();
    let dump: clocksim::domain::model::SolutionDump = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(dump.scene, "escapement");
    assert_eq!(dump.drag, 0.1);
    assert_eq!(dump.kick, Some(1.0));
    assert_eq!(dump.solution.len(), 51);
    assert_eq!(dump.solution.states[0], clocksim::State::new(0.0, 1.0));
}

#[tokio::test]
async fn test_pendulum_and_escapement_diverge_over_time() {
    // Same config, different scene: the escapement keeps feeding energy in,
    // so the rendered animations must differ.
    let temp_dir = TempDir::new().unwrap();

    let mut config = small_config("pendulum.gif");
    config.duration = 20.0;
    let storage = LocalStorage::new(temp_dir.path());
    AnimationEngine::new(ScenePipeline::new(Scene::Pendulum, storage, config))
        .run()
        .await
        .unwrap();

    let mut config = small_config("escapement.gif");
    config.duration = 20.0;
    let storage = LocalStorage::new(temp_dir.path());
    AnimationEngine::new(ScenePipeline::new(Scene::Escapement, storage, config))
        .run()
        .await
        .unwrap();

    let pendulum = std::fs::read(temp_dir.path().join("pendulum.gif")).unwrap();
    let escapement = std::fs::read(temp_dir.path().join("escapement.gif")).unwrap();
    assert_ne!(pendulum, escapement);
}
