//! Theme engine with Tera templates and suggestion resolution.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use dashmap::DashMap;
use tera::Tera;
use tracing::debug;

use crate::routing::RouteRegistry;

/// Theme engine for rendering page templates.
///
/// Templates deep-link through the registered `route_path` function rather
/// than hard-coded URLs, so every link in the rendered site flows through
/// the route registry.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
    /// Cache mapping suggestion lists to resolved template names.
    suggestion_cache: DashMap<String, String>,
}

impl ThemeEngine {
    /// Create a theme engine loading templates from the given directory.
    ///
    /// The registry backs the `route_path` template function and is shared,
    /// not copied; templates always see the same table the router was built
    /// from.
    pub fn new<V: Send + Sync + 'static>(
        template_dir: &Path,
        registry: Arc<RouteRegistry<V>>,
    ) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let mut tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;

        Self::register_filters(&mut tera);
        Self::register_functions(&mut tera, registry);

        let template_count = tera.get_template_names().count();
        debug!(count = template_count, "loaded templates");

        Ok(Self {
            tera,
            suggestion_cache: DashMap::new(),
        })
    }

    /// Create a theme engine with no templates (for testing).
    pub fn empty<V: Send + Sync + 'static>(registry: Arc<RouteRegistry<V>>) -> Self {
        let mut tera = Tera::default();
        Self::register_filters(&mut tera);
        Self::register_functions(&mut tera, registry);
        Self {
            tera,
            suggestion_cache: DashMap::new(),
        }
    }

    /// Register custom Tera filters.
    fn register_filters(tera: &mut Tera) {
        // Filter for rendering Markdown fixture bodies to HTML
        tera.register_filter(
            "markdown",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let text = tera::try_get_value!("markdown", "value", String, value);
                let parser = pulldown_cmark::Parser::new(&text);
                let mut html = String::new();
                pulldown_cmark::html::push_html(&mut html, parser);
                Ok(tera::Value::String(html))
            },
        );

        // Filter for formatting fixture dates ("2025-05-28" -> "May 28, 2025").
        // Strings that are not ISO dates pass through unchanged.
        tera.register_filter(
            "format_date",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let text = tera::try_get_value!("format_date", "value", String, value);
                let formatted = match chrono::NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
                    Ok(date) => date.format("%B %-d, %Y").to_string(),
                    Err(_) => text,
                };
                Ok(tera::Value::String(formatted))
            },
        );
    }

    /// Register custom Tera functions.
    fn register_functions<V: Send + Sync + 'static>(
        tera: &mut Tera,
        registry: Arc<RouteRegistry<V>>,
    ) {
        // route_path(name="blog-single", slug="hello-world") -> "/blog/hello-world"
        //
        // Template-supplied names are dynamic input, so this goes through
        // the string-keyed lookup with its fall-back-to-home behavior.
        tera.register_function(
            "route_path",
            move |args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
                let name = args
                    .get("name")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| tera::Error::msg("route_path requires a `name` argument"))?;

                let params: Vec<(String, String)> = args
                    .iter()
                    .filter(|(key, _)| key.as_str() != "name")
                    .filter_map(|(key, value)| {
                        value.as_str().map(|v| (key.clone(), v.to_string()))
                    })
                    .collect();
                let param_refs: Vec<(&str, &str)> = params
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect();

                Ok(tera::Value::String(
                    registry.generate_path(name, &param_refs),
                ))
            },
        );
    }

    /// Get the underlying Tera instance for custom operations.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Get page template suggestions for a route name.
    ///
    /// `blog-single` resolves to `page--blog-single` with `page` as the
    /// generic fallback.
    pub fn page_suggestions(route_name: &str) -> Vec<String> {
        let mut suggestions = Vec::new();
        if !route_name.is_empty() {
            suggestions.push(format!("page--{route_name}"));
        }
        suggestions.push("page".to_string());
        suggestions
    }

    /// Resolve the best template from a list of suggestions.
    ///
    /// Templates are tried in order; the first one that exists is returned.
    /// Results are cached.
    pub fn resolve_template(&self, suggestions: &[&str]) -> Option<String> {
        if suggestions.is_empty() {
            return None;
        }

        let cache_key = suggestions.join("|");
        if let Some(cached) = self.suggestion_cache.get(&cache_key) {
            return Some(cached.clone());
        }

        for suggestion in suggestions {
            let template_name = format!("{suggestion}.html");
            if self.tera.get_template(&template_name).is_ok() {
                self.suggestion_cache
                    .insert(cache_key, template_name.clone());
                return Some(template_name);
            }
        }

        // Cache miss - no template found
        None
    }

    /// Render a full page for a route.
    ///
    /// Picks the template by suggestion, then renders with `title`,
    /// `route_name`, and whatever the handler put in `context`.
    pub fn render_page(
        &self,
        route_name: &str,
        title: &str,
        context: &mut tera::Context,
    ) -> Result<String> {
        let suggestions = Self::page_suggestions(route_name);
        let suggestion_refs: Vec<&str> = suggestions.iter().map(|s| s.as_str()).collect();

        let template = self
            .resolve_template(&suggestion_refs)
            .unwrap_or_else(|| "page.html".to_string());

        context.insert("title", title);
        context.insert("route_name", route_name);

        self.tera
            .render(&template, context)
            .context("failed to render page template")
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .field("cache_size", &self.suggestion_cache.len())
            .finish()
    }
}
