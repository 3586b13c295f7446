use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use jiff::civil::Date;
use std::io;

use crate::remote::auth::parse_date;
use crate::tui::catalog::filter::Filters;
use crate::types::{MAX_PAGE, Page};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse a remote product catalog")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The parsed subcommand; no subcommand opens the browser
    pub fn command_or_default(self) -> Commands {
        self.command.unwrap_or(Commands::Browse { page: None })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive catalog browser (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Page to open on (1-3)
        #[arg(short, long, value_parser = parse_page)]
        page: Option<Page>,
    },

    /// Fetch one page, apply filters and print it
    #[command(visible_alias = "p")]
    Page {
        /// Page number (1-3)
        #[arg(default_value = "1", value_parser = parse_page)]
        page: Page,

        /// Case-insensitive substring of the product name
        #[arg(short, long, default_value = "")]
        search: String,

        /// Case-insensitive exact brand
        #[arg(short, long, default_value = "")]
        brand: String,

        /// Inclusive price ceiling
        #[arg(short = 'm', long, default_value = "")]
        max_price: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the X-Auth token for a date
    Token {
        /// Date as YYYY-MM-DD or YYYYMMDD (default: today, UTC)
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<Date>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Key: api_url, secret, filter_debounce_ms, request_timeout_secs
        key: String,
        /// Value to store
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stored configuration value
    Get {
        /// Key: api_url, secret, filter_debounce_ms, request_timeout_secs
        key: String,
        /// Print the secret unmasked
        #[arg(long)]
        reveal: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Browse { .. })
    }

    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            PageOptions, cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_page,
            cmd_token,
        };

        match self {
            Commands::Browse { page } => cmd_browse(page).await,

            Commands::Page {
                page,
                search,
                brand,
                max_price,
                json,
            } => {
                cmd_page(PageOptions {
                    page,
                    filters: Filters {
                        search,
                        brand,
                        max_price,
                    },
                    json,
                })
                .await
            }

            Commands::Token { date, json } => cmd_token(date, json),

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, reveal, json } => cmd_config_get(&key, reveal, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn parse_page(s: &str) -> Result<Page, String> {
    s.parse::<Page>()
        .map_err(|_| format!("invalid page '{s}'. Must be a number from 1 to {MAX_PAGE}"))
}

fn parse_date_arg(s: &str) -> Result<Date, String> {
    parse_date(s).map_err(|e| e.to_string())
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "catalog", &mut io::stdout());
}
