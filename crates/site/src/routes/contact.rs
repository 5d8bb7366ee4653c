//! Contact page route handler.

use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::routing::RouteName;
use crate::state::AppState;

use super::helpers::{page_title, render_page};

pub(super) async fn contact_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let context = tera::Context::new();
    render_page(&state, RouteName::Contact, &page_title("Contact"), context)
}
