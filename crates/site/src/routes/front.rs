//! Front page route handler.
//!
//! Renders the hero, brand logos, product feature tabs, why-us cards,
//! secure-access checklist, and testimonials, all from content fixtures.

use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::routing::RouteName;
use crate::state::AppState;

use super::helpers::{SITE_NAME, render_page};

pub(super) async fn front_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let content = state.content();

    let mut context = tera::Context::new();
    context.insert("features", content.features());
    context.insert("testimonials", content.testimonials());

    let title = format!("{SITE_NAME} — Smart safety wearables for families");
    render_page(&state, RouteName::Home, &title, context)
}
