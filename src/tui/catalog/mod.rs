//! Catalog browser (`catalog browse`)
//!
//! - `controller` - page, filters and fetched products, published as snapshots
//! - `filter` - client-side predicates over the current page
//! - `debounce` - per-field trailing debounce
//! - `model` - pure browser state, key mapping and view model
//! - `view` - the iocraft component

pub mod controller;
pub mod debounce;
pub mod filter;
pub mod model;
pub mod view;

pub use controller::{CatalogController, CatalogSnapshot, ControllerOptions};
pub use filter::{FilterField, Filters, parse_price_ceiling, visible_products};
pub use view::{CatalogBrowser, CatalogBrowserProps};
