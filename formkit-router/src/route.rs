// Route definitions

use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// A page-level view a route renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub component: String,
}

impl View {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }
}

type Loader = Arc<dyn Fn() -> View + Send + Sync>;

/// A view that is produced by its loader on first navigation and cached.
pub struct LazyView {
    loader: Loader,
    loaded: OnceCell<View>,
}

impl LazyView {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> View + Send + Sync + 'static,
    {
        Self {
            loader: Arc::new(loader),
            loaded: OnceCell::new(),
        }
    }

    /// Run the loader if it has not run yet.
    pub fn resolve(&self) -> &View {
        self.loaded.get_or_init(|| {
            let view = (self.loader)();
            formkit_log::trace!(target: "formkit::router", "loaded view {}", view.component);
            view
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.loaded.get())
            .finish_non_exhaustive()
    }
}

/// How a route obtains its view.
#[derive(Debug)]
pub enum RouteView {
    Eager(View),
    Lazy(LazyView),
}

impl RouteView {
    pub fn resolve(&self) -> &View {
        match self {
            RouteView::Eager(view) => view,
            RouteView::Lazy(lazy) => lazy.resolve(),
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, RouteView::Lazy(_))
    }
}

/// One entry of the route table.
#[derive(Debug)]
pub struct Route {
    pub path: String,
    pub name: String,
    pub view: RouteView,
}

impl Route {
    /// A route whose view is available up front.
    pub fn eager(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: RouteView::Eager(view),
        }
    }

    /// A route whose view is loaded on first navigation.
    pub fn lazy<F>(path: impl Into<String>, name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> View + Send + Sync + 'static,
    {
        Self {
            path: path.into(),
            name: name.into(),
            view: RouteView::Lazy(LazyView::new(loader)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lazy_view_loads_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let lazy = LazyView::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            View::new("PostsPage")
        });

        assert!(!lazy.is_loaded());
        assert_eq!(lazy.resolve().component, "PostsPage");
        assert_eq!(lazy.resolve().component, "PostsPage");
        assert!(lazy.is_loaded());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_eager_view() {
        let route = Route::eager("/", "home", View::new("HomeView"));
        assert!(!route.view.is_lazy());
        assert_eq!(route.view.resolve(), &View::new("HomeView"));
    }
}
