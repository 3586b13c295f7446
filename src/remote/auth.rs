//! Daily-rotating `X-Auth` token.
//!
//! The token is the lowercase hex MD5 digest of `"<secret>_<YYYYMMDD>"`, with
//! the date taken in UTC. It gates request freshness, it is not a credential
//! in the cryptographic sense. The value is still kept out of logs.

use std::fmt;

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use reqwest::header::HeaderValue;

use crate::error::{CatalogError, Result};

/// Name of the header carrying the token
pub const AUTH_HEADER: &str = "X-Auth";

/// Compute the token for `secret` on `date`
pub fn compute_auth_token(secret: &str, date: Date) -> String {
    let input = format!("{}_{}", secret, date.strftime("%Y%m%d"));
    format!("{:x}", md5::compute(input.as_bytes()))
}

/// Current civil date in UTC
pub fn today_utc() -> Date {
    Timestamp::now().to_zoned(TimeZone::UTC).date()
}

/// Parse a `YYYY-MM-DD` or `YYYYMMDD` date
pub fn parse_date(s: &str) -> Result<Date> {
    let trimmed = s.trim();
    let parsed = if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Date::strptime("%Y%m%d", trimmed)
    } else {
        trimmed.parse::<Date>()
    };
    parsed.map_err(|e| CatalogError::InvalidDate(s.to_string(), e.to_string()))
}

/// A computed token whose value is redacted when formatted.
///
/// This prevents the header from being leaked in logs when reqwest's
/// logging is enabled (e.g., via CATALOG_LOG=reqwest=debug).
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    value: String,
}

impl AuthToken {
    pub fn new(secret: &str, date: Date) -> Self {
        Self {
            value: compute_auth_token(secret, date),
        }
    }

    /// Token for the current UTC date
    pub fn today(secret: &str) -> Self {
        Self::new(secret, today_utc())
    }

    pub fn as_header_value(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.value)
            .map_err(|e| CatalogError::Other(format!("invalid auth header value: {}", e)))
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("value", &"[REDACTED]")
            .finish()
    }
}
