//! Profile route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use tracing::instrument;

use crate::error::{Result, set_sentry_user};
use crate::middleware::RequireSession;
use crate::routes::{Layout, Page};
use crate::state::AppState;
use crate::stores::IdentityPolicy;
use crate::views::ProfileForm;

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub layout: Layout,
    pub form: ProfileForm,
}

/// Display the profile form.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn show(
    State(state): State<AppState>,
    RequireSession(user): RequireSession,
) -> Result<ProfileTemplate> {
    let cart = state.load_cart()?;
    let dark_mode = state.theme().is_dark_mode()?;

    Ok(ProfileTemplate {
        layout: Layout::for_user(
            &user,
            cart.count(),
            dark_mode,
            Page::Profile.path().to_string(),
        ),
        form: ProfileForm::from_user(&user),
    })
}

/// Save the profile and return to the dashboard.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn update(
    State(state): State<AppState>,
    RequireSession(user): RequireSession,
    Form(form): Form<ProfileForm>,
) -> Result<Redirect> {
    let updated = form.submit(&state.session(), IdentityPolicy::default())?;
    set_sentry_user(&updated.id, Some(&updated.email));
    Ok(Redirect::to(Page::Dashboard.path()))
}
