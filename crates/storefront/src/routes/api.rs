//! JSON API for external collaborators.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::instrument;

use crate::state::AppState;

/// Announce that the product listing changed.
///
/// Every subscriber (the catalog watcher among them) re-fetches.
#[instrument(skip(state))]
pub async fn products_updated(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let subscribers = state.events().publish();
    (StatusCode::ACCEPTED, Json(json!({ "subscribers": subscribers })))
}
