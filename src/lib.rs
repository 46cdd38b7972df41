use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod db;
pub mod diagnostics;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod models;
pub mod schema;

use config::Config;
use db::{DbHandle, MongoStore};

/// Opens the configured database, or returns `None` when no database is
/// configured.
pub async fn connect_to_db(config: &Config) -> anyhow::Result<DbHandle> {
    let Some((url, name)) = config.database() else {
        return Ok(None);
    };
    let store = MongoStore::connect(url, name).await?;
    Ok(Some(Arc::new(store)))
}

pub fn app() -> Router {
    Router::new()
        .merge(diagnostics::app())
        .route("/schema", get(schema::get_schema))
        .nest("/api", api::app())
}

/// The full service: routes plus the store, configuration, CORS and request
/// tracing layers.
pub fn service(db: DbHandle, config: Config) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any);

    app()
        .layer(Extension(db))
        .layer(Extension(Arc::new(config)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
