//! Dashboard page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireSession;
use crate::routes::Layout;
use crate::state::AppState;
use crate::views::{DashboardQuery, DashboardState, DashboardView};

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub layout: Layout,
    pub view: DashboardView,
}

/// Render the dashboard.
///
/// Every render re-fetches the catalog; a failed fetch falls back to the
/// last catalog fetched.
#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn show(
    State(state): State<AppState>,
    RequireSession(user): RequireSession,
    Query(query): Query<DashboardQuery>,
) -> Result<DashboardTemplate> {
    let catalog = state.catalog().refresh().await;
    let cart = state.load_cart()?;
    let dark_mode = state.theme().is_dark_mode()?;

    let view = DashboardView::compose(&catalog, &cart, &DashboardState::from(query));
    let layout = Layout::for_user(&user, cart.count(), dark_mode, view.href());

    Ok(DashboardTemplate { layout, view })
}
