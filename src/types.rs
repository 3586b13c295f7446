use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Number of identifiers requested per page
pub const PAGE_SIZE: usize = 50;

/// Highest page the browser will navigate to
pub const MAX_PAGE: u32 = 3;

/// Opaque product identifier as it appears on the wire.
///
/// The catalog API may hand out string keys or integer keys; both are kept
/// verbatim and compared by exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        ProductId::Number(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        ProductId::Text(s.to_string())
    }
}

/// A catalog entry as returned by `get_items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Display name
    pub product: String,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, product: &str, price: f64, brand: Option<&str>) -> Self {
        Self {
            id: id.into(),
            product: product.to_string(),
            price,
            brand: brand.map(|b| b.to_string()),
        }
    }

    /// Price with two decimals
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Brand, or a dash when the catalog has none
    pub fn brand_label(&self) -> &str {
        match self.brand.as_deref() {
            Some(brand) if !brand.is_empty() => brand,
            _ => "-",
        }
    }
}

/// Direction of a pagination command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Prev,
    Next,
}

/// A 1-based page number bounded to `1..=MAX_PAGE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Page(u32);

impl Page {
    pub const FIRST: Page = Page(1);
    pub const LAST: Page = Page(MAX_PAGE);

    pub fn new(n: u32) -> Result<Self, CatalogError> {
        if (1..=MAX_PAGE).contains(&n) {
            Ok(Page(n))
        } else {
            Err(CatalogError::InvalidPage(n, MAX_PAGE))
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// Offset of the first identifier on this page
    pub fn offset(self) -> usize {
        (self.0 as usize - 1) * PAGE_SIZE
    }

    pub fn limit(self) -> usize {
        PAGE_SIZE
    }

    pub fn is_first(self) -> bool {
        self == Page::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Page::LAST
    }

    /// The neighbouring page in `direction`, or `None` at a bound
    pub fn step(self, direction: PageDirection) -> Option<Page> {
        match direction {
            PageDirection::Prev if !self.is_first() => Some(Page(self.0 - 1)),
            PageDirection::Next if !self.is_last() => Some(Page(self.0 + 1)),
            _ => None,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Page {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| CatalogError::Other(format!("invalid page number: {}", s)))?;
        Page::new(n)
    }
}

impl TryFrom<u32> for Page {
    type Error = CatalogError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Page::new(n)
    }
}

impl From<Page> for u32 {
    fn from(page: Page) -> Self {
        page.0
    }
}
