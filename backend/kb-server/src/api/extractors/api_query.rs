//! Query string extractor with the API's error shape

use crate::ApiError;
use crate::api::error::INVALID_REQUEST_DATA;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Like [`axum::extract::Query`], but an unparseable query string becomes a
/// 400 `"Invalid request data"`.
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => {
                log::debug!("Rejected query string: {}", rejection.body_text());
                Err(ApiError::bad_request(INVALID_REQUEST_DATA))
            }
        }
    }
}
