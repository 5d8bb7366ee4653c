//! Shared route helpers for page rendering.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::Datelike;

use crate::error::{AppError, AppResult};
use crate::routing::RouteName;
use crate::state::AppState;

/// Site display name.
pub const SITE_NAME: &str = "SafeLoop";

/// Site tagline, shown in the header and page footer.
const SITE_TAGLINE: &str = "Peace of mind for you, freedom for them";

/// Compose a page title ("Blog — SafeLoop").
pub fn page_title(title: &str) -> String {
    format!("{title} — {SITE_NAME}")
}

/// Inject site-wide context variables into a Tera context.
///
/// Adds: `site_name`, `site_tagline`, `site_url`, `nav` (derived fresh from
/// the registry), `current_route` for active-link marking, and `year`.
pub fn inject_site_context(state: &AppState, context: &mut tera::Context, current: &str) {
    context.insert("site_name", SITE_NAME);
    context.insert("site_tagline", SITE_TAGLINE);
    context.insert("site_url", state.site_url());
    context.insert("nav", &state.routes().navigation_entries());
    context.insert("current_route", current);
    context.insert("year", &chrono::Utc::now().year());
}

/// Render a page template with common context.
pub fn render_page(
    state: &AppState,
    route: RouteName,
    title: &str,
    mut context: tera::Context,
) -> AppResult<Html<String>> {
    inject_site_context(state, &mut context, route.as_str());

    let html = state
        .theme()
        .render_page(route.as_str(), title, &mut context)?;
    Ok(Html(html))
}

/// Render the styled not-found page with a 404 status.
///
/// Falls back to a bare 404 if the not-found template itself is broken.
pub fn render_not_found(state: &AppState) -> Response {
    let mut context = tera::Context::new();
    inject_site_context(state, &mut context, "not-found");

    match state
        .theme()
        .render_page("not-found", &page_title("Page Not Found"), &mut context)
    {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render not-found page");
            AppError::NotFound.into_response()
        }
    }
}
