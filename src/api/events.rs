use axum::{extract::Query, routing::get, Extension, Json, Router};

use super::{load_records, Items, ListParams};
use crate::{
    db::{DbHandle, Record},
    error::AppResult,
    fallback,
    models::{Collection, Event},
};

const DEFAULT_LIMIT: i64 = 6;

async fn list(
    Extension(db): Extension<DbHandle>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Items>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let mut items = load_records(&db, Event::COLLECTION_NAME, Record::new(), limit).await?;
    if items.is_empty() {
        items = fallback::events(limit)?;
    }

    Ok(Json(Items { items }))
}

pub fn app() -> Router {
    Router::new().route("/", get(list))
}
