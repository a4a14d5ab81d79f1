//! Session guard for pages that need a logged-in visitor.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use buildmart_core::User;

use crate::error::AppError;
use crate::routes::Page;
use crate::state::AppState;

/// Extractor that requires a persisted session.
///
/// Without one the visitor is redirected to the entry page. A session
/// record that cannot be decoded is a server error.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(RequireSession(user): RequireSession) -> impl IntoResponse {
///     format!("Hello, {}!", user.username)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireSession(pub User);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = Response;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.session().current_user() {
            Ok(Some(user)) => Ok(Self(user)),
            Ok(None) => Err(Redirect::to(Page::Entry.path()).into_response()),
            Err(e) => Err(AppError::from(e).into_response()),
        }
    }
}
