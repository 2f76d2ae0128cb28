//! Per-request options.

use http::Method;
use serde_json::Value;
use std::time::Duration;

/// Options for a single request.
///
/// Everything is optional: the default is a `GET` with no extra headers,
/// no query parameters and no body.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// HTTP method, `GET` when unset.
    pub method: Option<Method>,
    /// Headers layered over the client's defaults.
    pub headers: Vec<(String, String)>,
    /// Query parameters, appended in order.
    pub params: Vec<(String, String)>,
    /// JSON body. `None` and `null` send no body.
    pub body: Option<Value>,
    /// Timeout for this request only.
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add several query parameters.
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn effective_method(&self) -> Method {
        self.method.clone().unwrap_or(Method::GET)
    }

    /// The serialized body, if one should be sent. Falsy bodies (`null`,
    /// `false`, zero and `""`) are omitted.
    pub(crate) fn payload(&self) -> Option<String> {
        self.body
            .as_ref()
            .filter(|body| is_truthy(body))
            .map(Value::to_string)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
