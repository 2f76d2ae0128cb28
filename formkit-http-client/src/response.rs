//! The uniform result record.

use crate::{HttpClientError, Result};

/// Outcome of a request.
///
/// Failures are recorded here instead of being returned as errors: exactly
/// one of `is_success` and `is_error` is set once the request has settled,
/// and `is_loading` is cleared on every path.
#[derive(Debug)]
pub struct HttpResponse<T> {
    /// Parsed response body, present only on success.
    pub data: Option<T>,
    /// HTTP status, present whenever a response was received.
    pub status: Option<u16>,
    pub is_loading: bool,
    pub is_error: bool,
    pub is_success: bool,
    /// Why the request failed.
    pub error: Option<HttpClientError>,
}

impl<T> HttpResponse<T> {
    /// A record for a request that is still in flight.
    pub fn pending() -> Self {
        Self {
            data: None,
            status: None,
            is_loading: true,
            is_error: false,
            is_success: false,
            error: None,
        }
    }

    /// A settled record for a request that failed before being sent.
    pub fn failed(error: HttpClientError) -> Self {
        let mut response = Self::pending();
        response.settle(Err(error));
        response
    }

    /// Record the outcome and leave the loading state.
    pub(crate) fn settle(&mut self, outcome: Result<T>) {
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.is_success = true;
            }
            Err(error) => {
                self.data = None;
                self.is_error = true;
                self.error = Some(error);
            }
        }
        self.is_loading = false;
    }

    /// Convert into a `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<T> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            (None, None) => Err(HttpClientError::Incomplete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending() {
        let response: HttpResponse<u8> = HttpResponse::pending();
        assert!(response.is_loading);
        assert!(!response.is_error && !response.is_success);
        assert!(matches!(
            response.into_result(),
            Err(HttpClientError::Incomplete)
        ));
    }

    #[test]
    fn test_settle_success() {
        let mut response = HttpResponse::pending();
        response.status = Some(200);
        response.settle(Ok(7));

        assert!(!response.is_loading);
        assert!(response.is_success);
        assert!(!response.is_error);
        assert_eq!(response.into_result().unwrap(), 7);
    }

    #[test]
    fn test_failed() {
        let response: HttpResponse<u8> =
            HttpResponse::failed(HttpClientError::Status { status: 500 });
        assert!(!response.is_loading);
        assert!(response.is_error);
        assert!(response.data.is_none());
        assert_eq!(response.into_result().unwrap_err().status_code(), Some(500));
    }
}
