//! Entry page, login and logout.
//!
//! Login fabricates a session from whatever was typed. There are no
//! passwords and nothing is checked.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::routes::{Layout, Page};
use crate::state::AppState;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
}

/// Entry page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub layout: Layout,
}

/// Show the login form, or go straight to the dashboard with a session.
#[instrument(skip(state))]
pub async fn entry(State(state): State<AppState>) -> Result<Response> {
    if state.session().is_logged_in()? {
        return Ok(Redirect::to(Page::Dashboard.path()).into_response());
    }

    let dark_mode = state.theme().is_dark_mode()?;
    Ok(LoginTemplate {
        layout: Layout::anonymous(dark_mode, Page::Entry.path().to_string()),
    }
    .into_response())
}

/// Create a session and go to the dashboard.
#[instrument(skip(state, form))]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Result<Redirect> {
    let user = state
        .session()
        .create_session(form.email.trim(), form.username.trim())?;
    set_sentry_user(&user.id, Some(&user.email));
    Ok(Redirect::to(Page::Dashboard.path()))
}

/// Clear the session and go back to the entry page.
///
/// The cart is kept.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Result<Redirect> {
    state.session().logout()?;
    clear_sentry_user();
    Ok(Redirect::to(Page::Entry.path()))
}
