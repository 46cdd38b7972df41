use atmasakshi_api::{config::Config, connect_to_db, diagnostics::API_NAME, service};
use envconfig::Envconfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,atmasakshi_api=debug,tower_http=info")),
        )
        .init();

    let config = Config::init_from_env()?;

    let db = match connect_to_db(&config).await {
        Ok(Some(db)) => {
            tracing::info!(database = db.name(), "using database");
            Some(db)
        }
        Ok(None) => {
            tracing::warn!("DATABASE_URL or DATABASE_NAME not set, serving sample content");
            None
        }
        Err(e) => {
            tracing::warn!("database unavailable, serving sample content: {e:#}");
            None
        }
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("{API_NAME} listening on {}", listener.local_addr()?);

    axum::serve(listener, service(db, config)).await?;
    Ok(())
}
