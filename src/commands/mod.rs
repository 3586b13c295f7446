//! Command handlers behind the CLI.
//!
//! Headless commands print either human-readable text or JSON (`--json`),
//! built together through [`CommandOutput`].

mod browse;
mod config;
mod page;
mod token;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use page::{PageOptions, cmd_page};
pub use token::cmd_token;

use serde_json::Value;

use crate::error::Result;

/// Output of a command in both renderings
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    /// Text printed instead of the JSON when `--json` is not given
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as JSON if requested or if no text rendering was provided
    pub fn print(self, json: bool) -> Result<()> {
        match self.text {
            Some(text) if !json => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
