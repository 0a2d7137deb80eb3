//! Axum extractor for the acting user

use crate::{ApiError, AppState};

use kb_core::UserSummary;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

pub const USER_ID_HEADER: &str = "X-User-Id";

/// The user performing the request
///
/// Checks for the `X-User-Id` header first. If it is missing or names an
/// unknown user, falls back to the configured default user.
pub struct CurrentUser(pub UserSummary);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(USER_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty());

            if let Some(user_id) = header {
                match state.services.users.get(user_id).await {
                    Ok(user) => {
                        log::debug!("Using user from {} header: {}", USER_ID_HEADER, user.id);
                        return Ok(CurrentUser(UserSummary::from(&user)));
                    }
                    Err(_) => log::warn!("Unknown user in {} header: {}", USER_ID_HEADER, user_id),
                }
            }

            let config = &state.api_config;
            let user = match state.services.users.get(&config.default_user_id).await {
                Ok(user) => UserSummary::from(&user),
                Err(_) => UserSummary::new(
                    config.default_user_name.clone(),
                    config.default_user_initials.clone(),
                )
                .with_id(config.default_user_id.clone()),
            };
            log::debug!("Using default user: {}", config.default_user_id);

            Ok(CurrentUser(user))
        }
    }
}
