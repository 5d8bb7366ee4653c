//! Application state shared across all handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::content::ContentStore;
use crate::routes::{self, PageKind};
use crate::routing::RouteRegistry;
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Everything inside is immutable after construction, so concurrent reads
/// from handlers need no locking. Wrapped in Arc internally so Clone is
/// cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The route registry, also shared with the theme engine.
    routes: Arc<RouteRegistry<PageKind>>,

    /// Page content loaded from JSON fixtures.
    content: ContentStore,

    /// Tera-backed template renderer.
    theme: ThemeEngine,

    /// Public site URL for absolute links.
    site_url: String,

    /// Directory static assets are served from.
    static_dir: PathBuf,
}

impl AppState {
    /// Build the state: route table, content fixtures, templates.
    pub fn new(config: &Config) -> Result<Self> {
        let routes = Arc::new(routes::site_routes());
        info!(routes = routes.len(), "route registry initialized");

        let content = ContentStore::load(&config.content_dir)
            .context("failed to load content fixtures")?;

        let theme = ThemeEngine::new(&config.templates_dir, Arc::clone(&routes))
            .context("failed to initialize theme engine")?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                routes,
                content,
                theme,
                site_url: config.site_url.clone(),
                static_dir: config.static_dir.clone(),
            }),
        })
    }

    pub fn routes(&self) -> &RouteRegistry<PageKind> {
        &self.inner.routes
    }

    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }

    pub fn site_url(&self) -> &str {
        &self.inner.site_url
    }

    pub fn static_dir(&self) -> &Path {
        &self.inner.static_dir
    }
}
