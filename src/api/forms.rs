use axum::{routing::post, Extension, Json, Router};
use serde::Serialize;

use crate::{
    db::{to_record, DbHandle},
    error::AppResult,
    extract::ValidatedJson,
    models::{Collection, Contact, Volunteer},
};

#[derive(Serialize)]
struct SubmissionResponse {
    status: &'static str,
    id: Option<String>,
}

/// Stores a validated submission. Without a database the submission is still
/// acknowledged, just without an id.
async fn persist<T: Collection + Serialize>(
    db: &DbHandle,
    payload: &T,
) -> AppResult<Json<SubmissionResponse>> {
    let id = match db {
        Some(store) => Some(
            store
                .create_document(T::COLLECTION_NAME, to_record(payload)?)
                .await?,
        ),
        None => None,
    };

    tracing::info!(
        collection = T::COLLECTION_NAME,
        id = id.as_deref().unwrap_or("-"),
        "received submission"
    );

    Ok(Json(SubmissionResponse {
        status: "received",
        id,
    }))
}

async fn submit_contact(
    Extension(db): Extension<DbHandle>,
    ValidatedJson(contact): ValidatedJson<Contact>,
) -> AppResult<Json<SubmissionResponse>> {
    persist(&db, &contact).await
}

async fn submit_volunteer(
    Extension(db): Extension<DbHandle>,
    ValidatedJson(volunteer): ValidatedJson<Volunteer>,
) -> AppResult<Json<SubmissionResponse>> {
    persist(&db, &volunteer).await
}

pub fn app() -> Router {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/volunteer", post(submit_volunteer))
}
