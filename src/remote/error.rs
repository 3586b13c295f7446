//! Failure detail for catalog API calls.
//!
//! A remote call fails on a transport error, a non-success status or a body
//! that does not decode. The error keeps whatever the server sent back so the
//! degraded paths can log it.

use std::fmt;

use crate::error::CatalogError;

/// Longest response body excerpt kept for logging
const MAX_BODY_EXCERPT: usize = 512;

#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code, if a response arrived
    pub status: Option<reqwest::StatusCode>,
    /// Response body excerpt, if any
    pub body: Option<String>,
    /// Human-readable error message
    pub message: String,
    /// The `action` of the failed request
    pub action: &'static str,
}

impl ApiError {
    pub fn new(message: impl Into<String>, action: &'static str) -> Self {
        Self {
            status: None,
            body: None,
            message: message.into(),
            action,
        }
    }

    pub fn with_status(
        message: impl Into<String>,
        action: &'static str,
        status: reqwest::StatusCode,
    ) -> Self {
        Self {
            status: Some(status),
            body: None,
            message: message.into(),
            action,
        }
    }

    /// Attach the response body, truncated on a char boundary
    pub fn with_body(mut self, body: &str) -> Self {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return self;
        }
        let excerpt = match trimmed.char_indices().nth(MAX_BODY_EXCERPT) {
            Some((end, _)) => format!("{}...", &trimmed[..end]),
            None => trimmed.to_string(),
        };
        self.body = Some(excerpt);
        self
    }

    pub fn from_reqwest(error: reqwest::Error, action: &'static str) -> Self {
        Self {
            status: error.status(),
            body: None,
            message: error.to_string(),
            action,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.action, self.message)?;
        if let Some(body) = &self.body {
            write!(f, " ({})", body)?;
        }
        Ok(())
    }
}

impl From<ApiError> for CatalogError {
    fn from(error: ApiError) -> Self {
        CatalogError::Api(error.to_string())
    }
}
