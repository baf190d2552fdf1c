//! Server binary: reads settings, opens the pool, applies the schema, serves `/todos`.

use todo_api::{app, apply_migrations, store, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = store::connect(&settings.database_url, settings.max_connections).await?;
    apply_migrations(&pool).await?;

    let state = AppState::new(pool);
    let router = app(state, settings.body_limit_bytes);

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
