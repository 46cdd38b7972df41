use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that must deserialize into `T` and pass its field validation.
///
/// Schema violations are rejected with `422 Unprocessable Entity` before the
/// handler runs.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::from(rejection.status(), rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::from(StatusCode::UNPROCESSABLE_ENTITY, errors.to_string()))?;

        Ok(ValidatedJson(value))
    }
}
