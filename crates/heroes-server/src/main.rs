//! Binary entrypoint for the heroes HTTP server.
//!
//! Reads configuration from environment variables:
//! - `HEROES_DB_PATH`: SQLite database file path (default: "heroes.db")
//! - `HEROES_PORT`: Server listen port (default: "3000")
//!
//! The database path is read once here and stays fixed for the process
//! lifetime. A store that cannot be opened aborts startup.

use heroes_server::router::build_router;
use heroes_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let db_path = std::env::var("HEROES_DB_PATH").unwrap_or_else(|_| "heroes.db".to_string());
    let port = std::env::var("HEROES_PORT").unwrap_or_else(|_| "3000".to_string());

    let state = AppState::new(&db_path).expect("Failed to initialize application state");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("heroes server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
