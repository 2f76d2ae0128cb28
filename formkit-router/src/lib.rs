//! Client-side routing for formkit
//!
//! A [`Router`] maps browser paths to named views. Views are either
//! available up front or produced by a loader the first time their route is
//! visited; a loaded view is cached for the life of the router.
//!
//! ```
//! use formkit_router::app_routes;
//!
//! let router = app_routes("/");
//! let posts = router.navigate("/posts").unwrap();
//! assert_eq!(posts.route.name, "posts");
//! assert_eq!(posts.view().component, "PostsPage");
//! ```

mod error;
mod route;
mod router;

pub use error::*;
pub use route::*;
pub use router::*;

/// The application's route table: home, the test form and the lazily
/// loaded posts page.
pub fn app_routes(base: &str) -> Router {
    Router::new(base)
        .route(Route::eager("/", "home", View::new("HomeView")))
        .route(Route::eager("/form", "form", View::new("TestForm")))
        .route(Route::lazy("/posts", "posts", || View::new("PostsPage")))
}
