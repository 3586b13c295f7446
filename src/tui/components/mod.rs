//! Shared TUI components
//!
//! Reusable pieces of the catalog browser screen.

pub mod empty_state;
pub mod filter_input;
pub mod footer;
pub mod header;
pub mod pager;
pub mod product_card;
pub mod shortcuts;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use filter_input::{FilterInput, FilterInputProps};
pub use footer::{Footer, FooterProps, Shortcut, input_shortcuts, list_shortcuts};
pub use header::{Header, HeaderProps};
pub use pager::{Pager, PagerProps};
pub use product_card::{ProductCard, ProductCardProps};
