//! TUI module for the interactive catalog browser
//!
//! - `catalog` - controller, filters and the `CatalogBrowser` component
//! - `components` - shared widgets (header, inputs, cards, footer)

pub mod catalog;
pub mod components;
pub mod hooks;
pub mod theme;

pub use catalog::{CatalogBrowser, CatalogBrowserProps, CatalogController};
pub use theme::Theme;
