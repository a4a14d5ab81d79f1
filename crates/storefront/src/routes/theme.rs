//! Theme preference handler.

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::routes::Page;
use crate::state::AppState;

/// Theme toggle form data.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeForm {
    pub return_to: Option<String>,
}

/// Flip dark mode and go back where the visitor came from.
///
/// Only same-site paths are honoured as return targets.
#[instrument(skip(state))]
pub async fn toggle(State(state): State<AppState>, Form(form): Form<ThemeForm>) -> Result<Redirect> {
    state.theme().toggle()?;

    let target = form
        .return_to
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or_else(|| Page::Dashboard.path().to_string());
    Ok(Redirect::to(&target))
}
