use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::remote::CatalogClient;
use crate::tui::catalog::{CatalogBrowser, CatalogController, ControllerOptions};
use crate::types::Page;

/// Interactive catalog browser
pub async fn cmd_browse(page: Option<Page>) -> Result<()> {
    let config = Config::load()?;
    let client = CatalogClient::from_config(&config)?;
    let endpoint = client.url().host_str().map(str::to_string);

    tracing::info!(url = %client.url(), "starting catalog browser");

    let controller = CatalogController::new(
        client,
        ControllerOptions {
            filter_debounce: config.filter_debounce(),
            initial_page: page.unwrap_or_default(),
        },
    );

    element!(CatalogBrowser(
        controller: Some(controller),
        endpoint: endpoint,
    ))
    .fullscreen()
    .await
    .map_err(|e| CatalogError::Other(format!("TUI error: {e}")))
}
