use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use serde_json::Value;

use super::{load_records, Items, ListParams};
use crate::{
    db::{DbHandle, Record},
    error::{AppError, AppResult},
    fallback,
    models::{Blogpost, Collection},
};

const DEFAULT_LIMIT: i64 = 3;
// how many sample posts a slug lookup searches
const FALLBACK_SEARCH_LIMIT: i64 = 10;

async fn list(
    Extension(db): Extension<DbHandle>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Items>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let mut items = load_records(&db, Blogpost::COLLECTION_NAME, Record::new(), limit).await?;
    if items.is_empty() {
        items = fallback::blogposts(limit)?;
    }

    Ok(Json(Items { items }))
}

async fn info(
    Extension(db): Extension<DbHandle>,
    Path(slug): Path<String>,
) -> AppResult<Json<Record>> {
    let mut filter = Record::new();
    filter.insert("slug".to_string(), Value::String(slug.clone()));

    if let Some(post) = load_records(&db, Blogpost::COLLECTION_NAME, filter, 1)
        .await?
        .pop()
    {
        return Ok(Json(post));
    }

    // the sample posts are searched even when the database holds other posts
    fallback::blogposts(FALLBACK_SEARCH_LIMIT)?
        .into_iter()
        .find(|post| post.get("slug").and_then(Value::as_str) == Some(slug.as_str()))
        .map(Json)
        .ok_or_else(|| AppError::from(StatusCode::NOT_FOUND, "Blog not found"))
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(list))
        .route("/{slug}", get(info))
}
