//! # formkit HTTP client
//!
//! A thin JSON client over `reqwest`. Requests never return an error:
//! every outcome, including bad URLs, network failures, non-2xx statuses and
//! unparseable bodies, is recorded in an [`HttpResponse`] that callers
//! inspect through its `is_success` / `is_error` flags.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formkit_http_client::{HttpClient, HttpClientConfig, HttpResponse, RequestConfig};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Post {
//!     id: u64,
//!     title: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(
//!         HttpClientConfig::builder()
//!             .base_url("https://jsonplaceholder.typicode.com")
//!             .default_header("Accept", "application/json")
//!             .build(),
//!     )?;
//!
//!     let posts: HttpResponse<Vec<Post>> = client
//!         .get("/posts", RequestConfig::new().param("userId", "1"))
//!         .await;
//!
//!     if posts.is_success {
//!         for post in posts.data.unwrap_or_default() {
//!             println!("{} {}", post.id, post.title);
//!         }
//!     } else if let Some(error) = posts.error {
//!         eprintln!("request failed: {error}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Sending a body
//!
//! ```rust,no_run
//! use formkit_http_client::{HttpClient, HttpClientConfig, RequestConfig};
//! use serde_json::{Value, json};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new(HttpClientConfig::builder().base_url("https://api.example.com").build())?;
//!
//! let created = client
//!     .post::<Value, _>("/posts", &json!({ "title": "hello" }), RequestConfig::new())
//!     .await
//!     .into_result()?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{HttpClientConfig, HttpClientConfigBuilder};
pub use error::{HttpClientError, Result};
pub use request::RequestConfig;
pub use response::HttpResponse;

// Re-export common types
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use url::Url;

/// Prelude for common imports.
///
/// ```
/// use formkit_http_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::HttpClient;
    pub use crate::config::{HttpClientConfig, HttpClientConfigBuilder};
    pub use crate::error::{HttpClientError, Result};
    pub use crate::request::RequestConfig;
    pub use crate::response::HttpResponse;
    pub use http::Method;
}
