use std::sync::Arc;

use tower_http::cors::CorsLayer;

use texbot_backend::config::AppConfig;
use texbot_backend::routes;
use texbot_backend::state::AppState;
use texbot_backend::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Credentials are checked before anything binds.
    let config = AppConfig::from_env()?;

    telemetry::init("info");

    let state: Arc<AppState> = Arc::new(AppState::new(&config));

    // change this to your frontend domain in production
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;

    tracing::info!(model = %config.model, "listening on http://localhost:3000");
    println!("🚀 TexBot backend running at http://localhost:3000");
    axum::serve(listener, app).await?;

    Ok(())
}
