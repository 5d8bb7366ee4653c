//! Route registry for path resolution and navigation derivation.
//!
//! The registry is the single source of truth for site URLs:
//! - Route definitions for the HTTP router
//! - Deep-link generation (`/blog/:slug` → `/blog/hello-world`)
//! - The navigation menu rendered by the page header and footer

mod registry;

pub use registry::{NavEntry, RouteDescriptor, RouteName, RouteRegistry};
