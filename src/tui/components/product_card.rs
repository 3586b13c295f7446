//! Product card component
//!
//! One line per product: id, name, price and brand in fixed columns.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::Product;

/// Width of the id column
const ID_WIDTH: u32 = 38;
/// Width of the price column
const PRICE_WIDTH: u32 = 12;
/// Width of the brand column
const BRAND_WIDTH: u32 = 20;

/// Props for the ProductCard component
#[derive(Default, Props)]
pub struct ProductCardProps {
    /// The product to display
    pub product: Option<Product>,
    /// Whether this card is selected
    pub is_selected: bool,
}

/// Single-line product card
///
/// Layout:
/// ```text
/// > 1789ecf3-f81c-4f49-ada2-83804dcc74b0  Golden ring        18000.00  Piaget
/// ```
#[component]
pub fn ProductCard(props: &ProductCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(product) = props.product.as_ref() else {
        return element! { View(height: 1) };
    };

    let bg_color = props.is_selected.then_some(theme.highlight);
    let (id_color, name_color, price_color, brand_color) = if props.is_selected {
        let c = theme.highlight_text;
        (c, c, c, c)
    } else if product.brand.is_some() {
        (theme.id_color, theme.text, theme.price, theme.brand)
    } else {
        (theme.id_color, theme.text, theme.price, theme.brand_missing)
    };
    let indicator = if props.is_selected { ">" } else { " " };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            background_color: bg_color,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
        ) {
            Text(content: indicator, color: name_color, weight: Weight::Bold)
            View(width: ID_WIDTH, height: 1, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(content: product.id.to_string(), color: id_color)
            }
            View(flex_grow: 1.0, height: 1, overflow: Overflow::Hidden) {
                Text(
                    content: product.product.clone(),
                    color: name_color,
                    weight: Weight::Bold,
                )
            }
            View(
                width: PRICE_WIDTH,
                flex_shrink: 0.0,
                justify_content: JustifyContent::End,
            ) {
                Text(content: product.price_label(), color: price_color)
            }
            View(width: BRAND_WIDTH, height: 1, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(
                    content: product.brand_label().to_string(),
                    color: brand_color,
                )
            }
        }
    }
}
