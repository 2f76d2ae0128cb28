// formkit - form validation and client plumbing for single-page applications
//
// The validation engine and logging are always available. The HTTP client,
// configuration loading and the route table are enabled by features.

pub use formkit_validation::*;

pub use formkit_log;
pub use formkit_validation;

#[cfg(feature = "config")]
pub use formkit_config;

#[cfg(feature = "http-client")]
pub use formkit_http_client;

#[cfg(feature = "router")]
pub use formkit_router;

/// Commonly used items.
pub mod prelude {
    pub use formkit_validation::{
        FormField, FormFields, FormValidation, ValidationError, ValidationErrors, ValidationRule,
        is_valid, validate_field,
    };

    #[cfg(feature = "config")]
    pub use formkit_config::ConfigManager;

    #[cfg(feature = "http-client")]
    pub use formkit_http_client::{HttpClient, HttpClientConfig, HttpResponse, RequestConfig};

    #[cfg(feature = "router")]
    pub use formkit_router::{Route, Router, View, app_routes};
}
