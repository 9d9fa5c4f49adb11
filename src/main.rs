use clocksim::app;
use clocksim::Scene;

#[tokio::main]
async fn main() {
    app::run_scene(Scene::Pendulum).await;
}
