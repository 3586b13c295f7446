//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one stored value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{API_URL_ENV, Config, SECRET_ENV};
use crate::error::Result;

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

fn env_is_set(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| !v.is_empty())
}

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;

    let api_url = config.api_url();
    let secret_configured = config.secret().is_some();
    let timeout_secs = config.request_timeout().map(|t| t.as_secs());

    let json_output = json!({
        "api_url": api_url,
        "api_url_from_env": env_is_set(API_URL_ENV),
        "secret_configured": secret_configured,
        "secret_from_env": env_is_set(SECRET_ENV),
        "filter_debounce_ms": config.filter_debounce_ms,
        "request_timeout_secs": timeout_secs,
        "config_file": Config::config_path().to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));

    let url_display = match api_url.as_deref() {
        Some(url) => url.to_string(),
        None => "not configured".dimmed().to_string(),
    };
    text_output.push_str(&format!("{}: {}\n", "api_url".cyan(), url_display));

    let secret_display = match config.secret() {
        Some(secret) => mask_sensitive_value(&secret).green().to_string(),
        None => "not configured".dimmed().to_string(),
    };
    text_output.push_str(&format!("{}: {}\n", "secret".cyan(), secret_display));

    text_output.push_str(&format!(
        "{}: {}\n",
        "filter_debounce_ms".cyan(),
        config.filter_debounce_ms
    ));
    let timeout_display = match timeout_secs {
        Some(secs) => format!("{secs}s"),
        None => "none".dimmed().to_string(),
    };
    text_output.push_str(&format!(
        "{}: {}\n",
        "request_timeout_secs".cyan(),
        timeout_display
    ));

    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", Config::config_path().display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output_json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set_value(key, value)?;
    config.save()?;

    let shown = if key == "secret" {
        mask_sensitive_value(value)
    } else {
        value.to_string()
    };

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": shown,
        "config_file": Config::config_path().to_string_lossy(),
    }))
    .with_text(format!("Set {} = {}", key.cyan(), shown))
    .print(output_json)
}

/// Print a stored configuration value.
///
/// The secret is masked unless `reveal` is given.
pub fn cmd_config_get(key: &str, reveal: bool, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let value = config.get_value(key)?.map(|v| {
        if key == "secret" && !reveal {
            mask_sensitive_value(&v)
        } else {
            v
        }
    });

    let text = value.clone().unwrap_or_else(|| "not set".dimmed().to_string());
    CommandOutput::new(json!({
        "key": key,
        "value": value,
    }))
    .with_text(text)
    .print(output_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_sensitive_value() {
        assert_eq!(mask_sensitive_value("Valantis"), "Va...is");
        assert_eq!(mask_sensitive_value("abcd"), "****");
        assert_eq!(mask_sensitive_value(""), "****");
    }
}
