//! HTTP route handlers for every page.
//!
//! The axum router is derived from the route registry: each descriptor's
//! view capability selects the handler, and its pattern (translated to
//! axum's placeholder syntax) selects the path. Pages never hard-code
//! their own URLs.

mod about;
mod auth;
mod blog;
mod contact;
mod front;
mod health;
pub mod helpers;
mod pricing;
mod static_files;

use axum::Router;
use axum::extract::State;
use axum::response::Response;
use axum::routing::{MethodRouter, get};

use crate::routing::{RouteDescriptor, RouteName, RouteRegistry};
use crate::state::AppState;

/// View capability attached to each route descriptor.
///
/// The registry stores these opaquely; only [`router`] interprets them
/// when wiring handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    About,
    Pricing,
    BlogIndex,
    BlogSingle,
    Contact,
    Login,
    Register,
}

/// The production route table.
///
/// Order matters: navigation entries render in this order.
pub fn site_routes() -> RouteRegistry<PageKind> {
    RouteRegistry::new(vec![
        RouteDescriptor::new("/", RouteName::Home, PageKind::Home).in_nav("Home"),
        RouteDescriptor::new("/about", RouteName::About, PageKind::About).in_nav("About"),
        RouteDescriptor::new("/pricing", RouteName::Pricing, PageKind::Pricing).in_nav("Pricing"),
        RouteDescriptor::new("/blog", RouteName::Blog, PageKind::BlogIndex).in_nav("Blog"),
        RouteDescriptor::new("/blog/:slug", RouteName::BlogSingle, PageKind::BlogSingle),
        RouteDescriptor::new("/contact", RouteName::Contact, PageKind::Contact).in_nav("Contact"),
        RouteDescriptor::new("/login", RouteName::Login, PageKind::Login).labeled("Login"),
        RouteDescriptor::new("/register", RouteName::Register, PageKind::Register)
            .labeled("Register"),
    ])
}

/// Build the axum router from the registry, plus the non-page endpoints.
pub fn router(registry: &RouteRegistry<PageKind>) -> Router<AppState> {
    let mut router = Router::new();

    for route in registry.iter() {
        let handler: MethodRouter<AppState> = match route.view {
            PageKind::Home => get(front::front_page),
            PageKind::About => get(about::about_page),
            PageKind::Pricing => get(pricing::pricing_page),
            PageKind::BlogIndex => get(blog::blog_index),
            PageKind::BlogSingle => get(blog::blog_single),
            PageKind::Contact => get(contact::contact_page),
            PageKind::Login => get(auth::login_page),
            PageKind::Register => get(auth::register_page),
        };
        router = router.route(&route.axum_path(), handler);
    }

    router
        .merge(health::router())
        .merge(static_files::router())
        .fallback(not_found_page)
}

/// Catch-all for paths outside the route table.
async fn not_found_page(State(state): State<AppState>) -> Response {
    helpers::render_not_found(&state)
}
