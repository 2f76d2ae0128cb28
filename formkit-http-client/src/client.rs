//! HTTP client implementation.

use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::{HttpClientConfig, HttpClientError, HttpResponse, RequestConfig, Result};

/// JSON HTTP client.
///
/// Cloning is cheap; clones share the connection pool and configuration.
/// Every call produces its own [`HttpResponse`] record.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<HttpClientConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, config))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(inner: reqwest::Client, config: HttpClientConfig) -> Self {
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Resolve `endpoint` against the base URL and append query parameters.
    pub fn build_url(&self, endpoint: &str, params: &[(String, String)]) -> Result<Url> {
        let mut url = match &self.config.base_url {
            Some(base) => Url::parse(base).and_then(|base| base.join(endpoint)),
            None => Url::parse(endpoint),
        }
        .map_err(|e| HttpClientError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Merge header layers: JSON content type, configured defaults, then the
    /// request's own headers. Later layers replace earlier values.
    fn build_headers(&self, request: &RequestConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let layers = self.config.default_headers.iter().chain(&request.headers);
        for (name, value) in layers {
            let invalid = |message: String| HttpClientError::InvalidHeader {
                name: name.clone(),
                message,
            };
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|e| invalid(e.to_string()))?;
            let header_value =
                HeaderValue::try_from(value.as_str()).map_err(|e| invalid(e.to_string()))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }

    /// Send a request and record its outcome.
    ///
    /// Never fails: URL, transport, status and body errors all end up in the
    /// returned record with `is_error` set.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: RequestConfig,
    ) -> HttpResponse<T> {
        let mut response = HttpResponse::pending();
        let outcome = self.execute(endpoint, &config, &mut response.status).await;

        if let Err(e) = &outcome {
            debug!(endpoint, error = %e, "Request failed");
        }

        response.settle(outcome);
        response
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: &RequestConfig,
        status: &mut Option<u16>,
    ) -> Result<T> {
        let url = self.build_url(endpoint, &config.params)?;
        let method = config.effective_method();
        let headers = self.build_headers(config)?;

        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.inner.request(method, url).headers(headers);
        if let Some(payload) = config.payload() {
            request = request.body(payload);
        }
        if let Some(timeout) = config.timeout {
            request = request.timeout(timeout);
        }

        let reply = request.send().await?;
        let code = reply.status();
        *status = Some(code.as_u16());

        if !code.is_success() {
            return Err(HttpClientError::Status {
                status: code.as_u16(),
            });
        }

        let body = reply.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| HttpClientError::Json(e.to_string()))
    }

    /// Send a request whose body is `data`, serialized as JSON.
    async fn send_with<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        data: &B,
        config: RequestConfig,
    ) -> HttpResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        match serde_json::to_value(data) {
            Ok(body) => {
                let config = RequestConfig {
                    method: Some(method),
                    body: Some(body),
                    ..config
                };
                self.request(endpoint, config).await
            }
            Err(e) => HttpResponse::failed(HttpClientError::Serialize(e.to_string())),
        }
    }

    /// `GET` request.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: RequestConfig,
    ) -> HttpResponse<T> {
        self.request(endpoint, config.method(Method::GET)).await
    }

    /// `POST` request with a JSON body.
    pub async fn post<T, B>(&self, endpoint: &str, data: &B, config: RequestConfig) -> HttpResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_with(Method::POST, endpoint, data, config).await
    }

    /// `PUT` request with a JSON body.
    pub async fn put<T, B>(&self, endpoint: &str, data: &B, config: RequestConfig) -> HttpResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_with(Method::PUT, endpoint, data, config).await
    }

    /// `PATCH` request with a JSON body.
    pub async fn patch<T, B>(
        &self,
        endpoint: &str,
        data: &B,
        config: RequestConfig,
    ) -> HttpResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_with(Method::PATCH, endpoint, data, config).await
    }

    /// `DELETE` request.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: RequestConfig,
    ) -> HttpResponse<T> {
        self.request(endpoint, config.method(Method::DELETE)).await
    }
}
