//! Route registry - the ordered, immutable table of site routes.
//!
//! Built once at startup and shared read-only across all handlers and the
//! template layer, so lookups need no locking.

use std::fmt;

use serde::Serialize;

/// Path returned when a dynamic lookup misses.
///
/// Unknown route names resolve to the front page rather than an error. A
/// caller cannot distinguish "resolved to `/` because it is the home route"
/// from "name was not found"; statically known links should go through
/// [`RouteRegistry::path_of`] instead, which the compiler checks.
const FALLBACK_PATH: &str = "/";

/// The closed set of route names.
///
/// Every internal link is written against this enum; the string-keyed
/// lookups exist only for names that arrive at runtime (e.g. from
/// templates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    About,
    Pricing,
    Blog,
    BlogSingle,
    Contact,
    Login,
    Register,
}

impl RouteName {
    /// All route names, in registry order.
    pub const ALL: [RouteName; 8] = [
        RouteName::Home,
        RouteName::About,
        RouteName::Pricing,
        RouteName::Blog,
        RouteName::BlogSingle,
        RouteName::Contact,
        RouteName::Login,
        RouteName::Register,
    ];

    /// The wire-format name ("blog-single", "home", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            RouteName::Home => "home",
            RouteName::About => "about",
            RouteName::Pricing => "pricing",
            RouteName::Blog => "blog",
            RouteName::BlogSingle => "blog-single",
            RouteName::Contact => "contact",
            RouteName::Login => "login",
            RouteName::Register => "register",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single route: URL pattern, identity, navigation metadata, and the
/// view capability the page layer associates with it.
///
/// The path pattern is `/`-delimited; any segment prefixed with `:` is a
/// named placeholder (e.g. `/blog/:slug`). Placeholder names must be unique
/// within a pattern. The registry stores the `view` opaquely and never
/// interprets it; dispatch belongs to the page layer.
#[derive(Debug, Clone)]
pub struct RouteDescriptor<V> {
    /// URL path pattern (e.g. "/", "/blog/:slug").
    pub path: &'static str,
    /// Unique route name.
    pub name: RouteName,
    /// Display text for navigation. May be set even when `show_in_nav` is
    /// false (login/register carry labels but stay out of the menu).
    pub label: Option<&'static str>,
    /// Whether this route appears in the derived navigation menu.
    pub show_in_nav: bool,
    /// Opaque page-layer view reference.
    pub view: V,
}

impl<V> RouteDescriptor<V> {
    /// Create a descriptor with no label, hidden from navigation.
    pub fn new(path: &'static str, name: RouteName, view: V) -> Self {
        Self {
            path,
            name,
            label: None,
            show_in_nav: false,
            view,
        }
    }

    /// Attach a label without showing the route in navigation.
    pub fn labeled(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Attach a label and show the route in navigation.
    pub fn in_nav(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self.show_in_nav = true;
        self
    }

    /// The pattern in axum's placeholder syntax (`:slug` → `{slug}`).
    ///
    /// The stored pattern keeps the `:` convention; only this boundary
    /// adapter speaks the host router's dialect.
    pub fn axum_path(&self) -> String {
        self.path
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(param) => format!("{{{param}}}"),
                None => segment.to_string(),
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// A derived navigation menu entry.
///
/// Projected fresh from the registry on every request; callers may rely on
/// value equality across calls, never identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Link target (the raw route path).
    pub target: String,
    /// Display text.
    pub label: Option<String>,
    /// Route name, for marking the active menu item.
    pub name: String,
}

/// Ordered, immutable registry of route descriptors.
#[derive(Debug)]
pub struct RouteRegistry<V> {
    routes: Vec<RouteDescriptor<V>>,
}

impl<V> RouteRegistry<V> {
    /// Build a registry from an ordered descriptor list.
    pub fn new(routes: Vec<RouteDescriptor<V>>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<_> = routes.iter().map(|r| r.name).collect();
                names.sort_by_key(|n| n.as_str());
                names.windows(2).all(|w| w[0] != w[1])
            },
            "route names must be pairwise distinct"
        );
        Self { routes }
    }

    /// Iterate descriptors in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor<V>> {
        self.routes.iter()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a descriptor by its compile-time-checked name.
    pub fn descriptor(&self, name: RouteName) -> Option<&RouteDescriptor<V>> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Resolve a statically known route name to its raw path pattern.
    ///
    /// Falls back to `/` if the name is absent from the table; the
    /// production table is total over [`RouteName`], so that branch is only
    /// reachable from partial test registries.
    pub fn path_of(&self, name: RouteName) -> &str {
        self.descriptor(name).map_or(FALLBACK_PATH, |r| r.path)
    }

    /// Resolve a dynamic route name to its raw path pattern.
    ///
    /// Scans in registry order for the first matching name. Unknown names
    /// resolve to `/` silently rather than failing.
    pub fn path_for(&self, name: &str) -> &str {
        self.routes
            .iter()
            .find(|r| r.name.as_str() == name)
            .map_or(FALLBACK_PATH, |r| r.path)
    }

    /// Generate a concrete path by substituting named placeholders.
    ///
    /// For each `(key, value)` pair in caller order, the first occurrence of
    /// `:key` in the pattern is replaced with `value`. Placeholders without
    /// a matching key stay literal; keys without a matching placeholder are
    /// ignored.
    pub fn generate_path(&self, name: &str, params: &[(&str, &str)]) -> String {
        let mut path = self.path_for(name).to_string();
        for (key, value) in params {
            let token = format!(":{key}");
            path = path.replacen(&token, value, 1);
        }
        path
    }

    /// Derive the navigation menu: nav-visible routes, registry order.
    ///
    /// Returns a freshly built list on every call.
    pub fn navigation_entries(&self) -> Vec<NavEntry> {
        self.routes
            .iter()
            .filter(|r| r.show_in_nav)
            .map(|r| NavEntry {
                target: r.path.to_string(),
                label: r.label.map(str::to_string),
                name: r.name.as_str().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn test_registry() -> RouteRegistry<()> {
        RouteRegistry::new(vec![
            RouteDescriptor::new("/", RouteName::Home, ()).in_nav("Home"),
            RouteDescriptor::new("/blog", RouteName::Blog, ()).in_nav("Blog"),
            RouteDescriptor::new("/blog/:slug", RouteName::BlogSingle, ()),
            RouteDescriptor::new("/login", RouteName::Login, ()).labeled("Login"),
        ])
    }

    #[test]
    fn path_for_registered_names() {
        let registry = test_registry();
        assert_eq!(registry.path_for("home"), "/");
        assert_eq!(registry.path_for("blog"), "/blog");
        assert_eq!(registry.path_for("blog-single"), "/blog/:slug");
        assert_eq!(registry.path_for("login"), "/login");
    }

    #[test]
    fn path_for_unknown_name_falls_back_to_root() {
        let registry = test_registry();
        assert_eq!(registry.path_for("does-not-exist"), "/");
        assert_eq!(registry.path_for(""), "/");
    }

    #[test]
    fn path_of_enum_lookup() {
        let registry = test_registry();
        assert_eq!(registry.path_of(RouteName::Blog), "/blog");
        // Absent from this partial table, so the fallback applies.
        assert_eq!(registry.path_of(RouteName::Pricing), "/");
    }

    #[test]
    fn generate_path_substitutes_placeholder() {
        let registry = test_registry();
        assert_eq!(
            registry.generate_path("blog-single", &[("slug", "hello-world")]),
            "/blog/hello-world"
        );
    }

    #[test]
    fn generate_path_ignores_extra_params() {
        let registry = test_registry();
        assert_eq!(registry.generate_path("home", &[]), "/");
        assert_eq!(registry.generate_path("home", &[("foo", "bar")]), "/");
    }

    #[test]
    fn generate_path_leaves_unmatched_placeholders() {
        let registry = test_registry();
        assert_eq!(registry.generate_path("blog-single", &[]), "/blog/:slug");
        assert_eq!(
            registry.generate_path("blog-single", &[("id", "7")]),
            "/blog/:slug"
        );
    }

    #[test]
    fn generate_path_unknown_name_falls_back() {
        let registry = test_registry();
        assert_eq!(registry.generate_path("nope", &[("slug", "x")]), "/");
    }

    #[test]
    fn navigation_entries_filter_and_order() {
        let registry = test_registry();
        let entries = registry.navigation_entries();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "home");
        assert_eq!(entries[0].target, "/");
        assert_eq!(entries[0].label.as_deref(), Some("Home"));
        assert_eq!(entries[1].name, "blog");
        // Labeled but not nav-visible stays out of the menu.
        assert!(entries.iter().all(|e| e.name != "login"));
    }

    #[test]
    fn navigation_entries_fresh_but_value_equal() {
        let registry = test_registry();
        assert_eq!(registry.navigation_entries(), registry.navigation_entries());
    }

    #[test]
    fn operations_are_idempotent() {
        let registry = test_registry();
        for _ in 0..3 {
            assert_eq!(registry.path_for("blog"), "/blog");
            assert_eq!(
                registry.generate_path("blog-single", &[("slug", "a")]),
                "/blog/a"
            );
            assert_eq!(registry.navigation_entries().len(), 2);
        }
    }

    #[test]
    fn axum_path_translates_placeholders() {
        let registry = test_registry();
        let single = registry.descriptor(RouteName::BlogSingle).unwrap();
        assert_eq!(single.axum_path(), "/blog/{slug}");

        let home = registry.descriptor(RouteName::Home).unwrap();
        assert_eq!(home.axum_path(), "/");
    }

    #[test]
    fn placeholder_names_unique_within_pattern() {
        let registry = test_registry();
        for route in registry.iter() {
            let mut params: Vec<_> = route
                .path
                .split('/')
                .filter_map(|s| s.strip_prefix(':'))
                .collect();
            params.sort_unstable();
            let before = params.len();
            params.dedup();
            assert_eq!(params.len(), before, "duplicate placeholder in {}", route.path);
        }
    }
}
