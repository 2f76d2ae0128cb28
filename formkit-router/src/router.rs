// Route table and path resolution

use std::collections::HashMap;

use crate::{Route, RouterError, Result, View};

/// A route selected for a path, with any `:name` segments captured.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: HashMap<String, String>,
}

impl RouteMatch<'_> {
    /// Resolve the matched view, loading it first if it is lazy.
    pub fn view(&self) -> &View {
        self.route.view.resolve()
    }
}

/// Ordered route table mounted under a base path.
///
/// Routes are tried in registration order and the first match wins.
#[derive(Debug, Default)]
pub struct Router {
    base: String,
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty router. `base` is the history base the application
    /// is served from, such as `/` or `/app/`.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/').to_string();
        Self {
            base,
            routes: Vec::new(),
        }
    }

    pub fn route(mut self, route: Route) -> Self {
        self.add_route(route);
        self
    }

    pub fn add_route(&mut self, route: Route) {
        formkit_log::trace!(target: "formkit::router", "registered route {} -> {}", route.name, route.path);
        self.routes.push(route);
    }

    pub fn base(&self) -> &str {
        if self.base.is_empty() { "/" } else { &self.base }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the route for a location. The base prefix, query string and
    /// fragment are ignored.
    pub fn resolve(&self, location: &str) -> Option<RouteMatch<'_>> {
        let path = self.strip_base(strip_suffixes(location))?;

        self.routes.iter().find_map(|route| {
            match_path(&route.path, path).map(|params| RouteMatch { route, params })
        })
    }

    /// Look up a route by name.
    pub fn by_name(&self, name: &str) -> Result<&Route> {
        self.routes
            .iter()
            .find(|route| route.name == name)
            .ok_or_else(|| RouterError::UnknownName(name.to_string()))
    }

    /// Resolve a location and its view, loading lazy views on first use.
    pub fn navigate(&self, location: &str) -> Result<RouteMatch<'_>> {
        let matched = self
            .resolve(location)
            .ok_or_else(|| RouterError::NotFound(location.to_string()))?;

        let view = matched.view();
        formkit_log::debug!(
            target: "formkit::router",
            "navigate {} -> {} ({})",
            location,
            matched.route.name,
            view.component
        );

        Ok(matched)
    }

    /// Full browser path for a named route, including the base.
    pub fn href(&self, name: &str) -> Result<String> {
        let route = self.by_name(name)?;
        Ok(format!("{}{}", self.base, route.path))
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(path);
        }
        match path.strip_prefix(self.base.as_str())? {
            "" => Some("/"),
            rest if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }
}

fn strip_suffixes(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

/// Match a route pattern against a path, capturing `:name` segments.
/// Empty segments are ignored, so trailing slashes do not matter.
fn match_path(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (expected, actual) in pattern_parts.iter().zip(&path_parts) {
        match expected.strip_prefix(':') {
            Some(name) => {
                params.insert(name.to_string(), actual.to_string());
            }
            None if expected != actual => return None,
            None => {}
        }
    }

    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(base: &str) -> Router {
        Router::new(base)
            .route(Route::eager("/", "home", View::new("HomeView")))
            .route(Route::eager("/posts/:id", "post", View::new("PostView")))
            .route(Route::eager("/form", "form", View::new("TestForm")))
    }

    #[test]
    fn test_match_path() {
        assert!(match_path("/", "/").is_some());
        assert!(match_path("/form", "/form/").is_some());
        assert!(match_path("/form", "/forms").is_none());
        assert!(match_path("/form", "/form/extra").is_none());

        let params = match_path("/posts/:id", "/posts/42").unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_resolve_ignores_query_and_fragment() {
        let router = router("/");
        let matched = router.resolve("/form?step=2#top").unwrap();
        assert_eq!(matched.route.name, "form");
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_resolve_under_base() {
        let router = router("/app/");
        assert_eq!(router.base(), "/app");
        assert_eq!(router.resolve("/app").unwrap().route.name, "home");
        assert_eq!(router.resolve("/app/form").unwrap().route.name, "form");
        assert!(router.resolve("/form").is_none());
        assert!(router.resolve("/application/form").is_none());
    }

    #[test]
    fn test_navigate_not_found() {
        let router = router("/");
        assert_eq!(
            router.navigate("/missing").unwrap_err(),
            RouterError::NotFound("/missing".to_string())
        );
    }

    #[test]
    fn test_named_routes() {
        let router = router("/app");
        assert_eq!(router.by_name("form").unwrap().path, "/form");
        assert_eq!(router.href("form").unwrap(), "/app/form");
        assert_eq!(
            router.href("nope").unwrap_err(),
            RouterError::UnknownName("nope".to_string())
        );
    }

    #[test]
    fn test_first_match_wins() {
        let router = Router::new("/")
            .route(Route::eager("/posts/:id", "param", View::new("A")))
            .route(Route::eager("/posts/new", "literal", View::new("B")));
        assert_eq!(router.navigate("/posts/new").unwrap().route.name, "param");
    }
}
