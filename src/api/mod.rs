use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::{DbHandle, Record};

pub mod blogs;
pub mod events;
pub mod forms;

#[derive(Deserialize)]
struct ListParams {
    limit: Option<i64>,
}

#[derive(Serialize)]
struct Items {
    items: Vec<Record>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    time: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}

/// Moves the database `_id` of a record into a string `id` field.
///
/// Records inserted out-of-band without an `_id` are returned without `id`.
fn normalize_id(mut record: Record) -> Record {
    if let Some(id) = record.remove("_id") {
        let id = match id {
            Value::String(s) => s,
            other => other.to_string(),
        };
        record.insert("id".to_string(), Value::String(id));
    }
    record
}

/// Loads up to `limit` records from `collection`, or nothing when there is no
/// database.
async fn load_records(
    db: &DbHandle,
    collection: &str,
    filter: Record,
    limit: i64,
) -> anyhow::Result<Vec<Record>> {
    let Some(store) = db else {
        tracing::debug!(collection, "no database configured");
        return Ok(Vec::new());
    };

    Ok(store
        .get_documents(collection, filter, limit)
        .await?
        .into_iter()
        .map(normalize_id)
        .collect())
}

pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/events", events::app())
        .nest("/blogs", blogs::app())
        .merge(forms::app())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn normalize_id_renames_string_ids() {
        let normalized = normalize_id(record(json!({
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "title": "Guided Meditation Camp",
        })));

        assert!(normalized.get("_id").is_none());
        assert_eq!(normalized["id"], json!("65a1f0c2e4b0a1b2c3d4e5f6"));
        assert_eq!(normalized["title"], json!("Guided Meditation Camp"));
    }

    #[test]
    fn normalize_id_stringifies_other_ids() {
        let normalized = normalize_id(record(json!({ "_id": 42 })));
        assert_eq!(normalized["id"], json!("42"));
    }

    #[test]
    fn normalize_id_leaves_records_without_id() {
        let normalized = normalize_id(record(json!({ "title": "t" })));
        assert!(normalized.get("id").is_none());
    }
}
