pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
pub mod remote;
pub mod tui;
pub mod types;

pub use config::{Config, Endpoint};
pub use error::{CatalogError, Result};
pub use remote::{AUTH_HEADER, ApiError, CatalogClient, CatalogProvider, compute_auth_token};
pub use tui::catalog::{CatalogController, CatalogSnapshot, ControllerOptions, Filters};
pub use types::{MAX_PAGE, PAGE_SIZE, Page, PageDirection, Product, ProductId};
