use std::sync::Arc;

use axum::{routing::get, Extension, Json, Router};
use serde::Serialize;

use crate::{config::Config, db::DbHandle};

pub const API_NAME: &str = "Atmasakshi Foundation API";

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_LEN: usize = 80;

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    status: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: API_NAME,
        status: "ok",
    })
}

#[derive(Serialize, Debug)]
pub struct DatabaseReport {
    pub backend: &'static str,
    pub database: &'static str,
    pub database_url: &'static str,
    pub database_name: Option<String>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
    pub error: Option<String>,
}

fn set_or_not(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "set"
    } else {
        "not set"
    }
}

/// Probes the database. Failures end up in the report, never in the response
/// status.
pub async fn probe(db: &DbHandle, config: &Config) -> DatabaseReport {
    let mut report = DatabaseReport {
        backend: "running",
        database: "not available",
        database_url: set_or_not(&config.database_url),
        database_name: Some(set_or_not(&config.database_name).to_string()),
        connection_status: "not connected",
        collections: Vec::new(),
        error: None,
    };

    let Some(store) = db else {
        return report;
    };

    report.database_name = Some(store.name().to_string());
    report.connection_status = "connected";

    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            report.collections = names;
            report.database = "connected and working";
        }
        Err(err) => {
            tracing::warn!(error = %err, "database probe failed");
            report.database = "connected but failing";
            report.error = Some(err.to_string().chars().take(MAX_ERROR_LEN).collect());
        }
    }

    report
}

async fn test_database(
    Extension(db): Extension<DbHandle>,
    Extension(config): Extension<Arc<Config>>,
) -> Json<DatabaseReport> {
    Json(probe(&db, &config).await)
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
}
