//! Login and register page route handlers.
//!
//! Presentational only: the forms have no submit endpoints, so these
//! routes accept GET and nothing else.

use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::routing::RouteName;
use crate::state::AppState;

use super::helpers::{page_title, render_page};

pub(super) async fn login_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let mut context = tera::Context::new();
    context.insert("auth", &state.content().auth().login);

    render_page(&state, RouteName::Login, &page_title("Login"), context)
}

pub(super) async fn register_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let mut context = tera::Context::new();
    context.insert("auth", &state.content().auth().register);

    render_page(&state, RouteName::Register, &page_title("Register"), context)
}
