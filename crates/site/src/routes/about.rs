//! About page route handler.

use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::routing::RouteName;
use crate::state::AppState;

use super::helpers::{page_title, render_page};

pub(super) async fn about_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let about = state.content().about();

    let mut context = tera::Context::new();
    context.insert("team", &about.team);
    context.insert("jobs", &about.jobs);
    context.insert("job_categories", &about.job_categories);

    render_page(&state, RouteName::About, &page_title("About"), context)
}
