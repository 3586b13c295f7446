use jiff::civil::Date;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::Result;
use crate::remote::auth::{AUTH_HEADER, compute_auth_token, today_utc};

/// Print the auth token for `date` (default: today, UTC)
pub fn cmd_token(date: Option<Date>, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let secret = config.require_secret()?;

    let date = date.unwrap_or_else(today_utc);
    let token = compute_auth_token(&secret, date);

    CommandOutput::new(json!({
        "header": AUTH_HEADER,
        "date": date.to_string(),
        "token": token.clone(),
    }))
    .with_text(token)
    .print(output_json)
}
