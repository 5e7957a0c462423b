/// JSON request bodies with service-style rejections
use crate::error::MediaError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// Like `axum::Json`, but a missing, malformed, or mistyped body becomes a
/// `MediaError::Validation` instead of axum's plain-text rejection.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = MediaError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

impl From<JsonRejection> for MediaError {
    fn from(rejection: JsonRejection) -> Self {
        MediaError::Validation(rejection.body_text())
    }
}
