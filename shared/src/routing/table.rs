use std::fmt;

use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};

/// Title used when the matched route has none, or nothing matched.
pub const FALLBACK_TITLE: &str = "GA Router Demo";

pub const HOME_TITLE: &str = "首頁 | GA Router Demo";
pub const ABOUT_TITLE: &str = "關於我們 | GA Router Demo";
pub const CONTACT_TITLE: &str = "聯絡我們 | GA Router Demo";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMeta {
    pub title: Option<String>,
}

impl RouteMeta {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
        }
    }

    pub fn title_or_fallback(&self) -> &str {
        self.title.as_deref().unwrap_or(FALLBACK_TITLE)
    }
}

/// A view resolved on first access and memoized afterwards.
pub struct LazyView<V> {
    loader: fn() -> V,
    cell: OnceCell<V>,
}

impl<V> LazyView<V> {
    pub fn new(loader: fn() -> V) -> Self {
        Self {
            loader,
            cell: OnceCell::new(),
        }
    }

    pub fn get(&self) -> &V {
        self.cell.get_or_init(self.loader)
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<V> fmt::Debug for LazyView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[derive(Debug)]
pub struct RouteDefinition<V> {
    pub path: &'static str,
    pub name: &'static str,
    pub view: LazyView<V>,
    pub meta: RouteMeta,
}

impl<V> RouteDefinition<V> {
    pub fn new(path: &'static str, name: &'static str, loader: fn() -> V, meta: RouteMeta) -> Self {
        Self {
            path,
            name,
            view: LazyView::new(loader),
            meta,
        }
    }

    fn matches(&self, path: &str) -> bool {
        trim_trailing_slash(self.path).eq_ignore_ascii_case(trim_trailing_slash(path))
    }
}

/// Static path table. Matching ignores case and a trailing slash.
#[derive(Debug)]
pub struct RouteTable<V> {
    routes: Vec<RouteDefinition<V>>,
}

impl<V> RouteTable<V> {
    pub fn new(routes: Vec<RouteDefinition<V>>) -> Self {
        debug_assert!(
            routes
                .iter()
                .enumerate()
                .all(|(i, a)| routes[i + 1..].iter().all(|b| !a.matches(b.path))),
            "route paths must be unique"
        );
        Self { routes }
    }

    /// Finds the route for a bare path (no query or fragment).
    pub fn resolve(&self, path: &str) -> Option<&RouteDefinition<V>> {
        self.routes.iter().find(|route| route.matches(path))
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDefinition<V>> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn routes(&self) -> &[RouteDefinition<V>] {
        &self.routes
    }
}

/// The application's routes, with one view loader per page.
pub fn app_routes<V>(home: fn() -> V, about: fn() -> V, contact: fn() -> V) -> RouteTable<V> {
    RouteTable::new(vec![
        RouteDefinition::new("/", "home", home, RouteMeta::titled(HOME_TITLE)),
        RouteDefinition::new("/about", "about", about, RouteMeta::titled(ABOUT_TITLE)),
        RouteDefinition::new("/contact", "contact", contact, RouteMeta::titled(CONTACT_TITLE)),
    ])
}

fn trim_trailing_slash(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
