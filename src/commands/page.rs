use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::CommandOutput;
use crate::config::Config;
use crate::error::Result;
use crate::remote::{CatalogClient, CatalogProvider};
use crate::tui::catalog::filter::{Filters, visible_products};
use crate::types::{MAX_PAGE, Page, Product};

/// Options for `catalog page`
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    pub page: Page,
    pub filters: Filters,
    pub json: bool,
}

/// A row in the product table
#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Brand")]
    brand: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            product: product.product.clone(),
            price: product.price_label(),
            brand: product.brand_label().to_string(),
        }
    }
}

/// Render products as a table
pub fn render_table(products: &[Product]) -> String {
    let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Fetch one page through the same two-step flow as the browser and print it
pub async fn cmd_page(options: PageOptions) -> Result<()> {
    let config = Config::load()?;
    let client = CatalogClient::from_config(&config)?;

    let products = client.fetch_page(options.page).await;
    let visible = visible_products(&products, &options.filters);

    let json_output = json!({
        "page": options.page.number(),
        "max_page": MAX_PAGE,
        "filters": options.filters,
        "total": products.len(),
        "products": visible,
    });

    let summary = format!(
        "Page {}/{}: showing {} of {} products",
        options.page.number(),
        MAX_PAGE,
        visible.len(),
        products.len()
    );
    let text_output = if products.is_empty() {
        format!(
            "{}",
            format!("No products on page {} (see warnings above)", options.page).dimmed()
        )
    } else if visible.is_empty() {
        format!("{}\n{}", "No products match the filters.".yellow(), summary.dimmed())
    } else {
        format!("{}\n{}", render_table(&visible), summary.dimmed())
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(options.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_columns() {
        let products = vec![
            Product::new(1, "Widget", 9.99, Some("Acme")),
            Product::new("a-2", "Gadget", 19.5, None),
        ];
        let table = render_table(&products);

        assert!(table.contains("ID"));
        assert!(table.contains("Brand"));
        assert!(table.contains("Widget"));
        assert!(table.contains("9.99"));
        assert!(table.contains("19.50"));
        assert!(table.contains("a-2"));
        // Missing brand renders as a dash
        assert!(table.lines().any(|line| line.contains("Gadget") && line.contains(" - ")));
    }
}
