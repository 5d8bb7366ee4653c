//! Pricing page route handler.
//!
//! Both monthly and annual prices go into the template; the billing toggle
//! is purely presentational.

use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::routing::RouteName;
use crate::state::AppState;

use super::helpers::{page_title, render_page};

pub(super) async fn pricing_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let pricing = state.content().pricing();

    let mut context = tera::Context::new();
    context.insert("plans", &pricing.plans);
    context.insert("faqs", &pricing.faqs);

    render_page(&state, RouteName::Pricing, &page_title("Pricing"), context)
}
