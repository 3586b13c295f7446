//! App header bar component
//!
//! Displays the application title, the endpoint host and the page position.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Title (defaults to "Catalog")
    pub title: Option<String>,

    /// Subtitle, usually the endpoint host
    pub subtitle: Option<String>,

    /// Right-aligned page position, e.g. "Page 1/3"
    pub page_label: Option<String>,

    /// Right-aligned product count
    pub count_label: Option<String>,

    /// Whether a fetch is in flight
    pub loading: bool,
}

/// App header bar
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let title = props.title.clone().unwrap_or_else(|| "Catalog".to_string());
    let left_text = match props.subtitle.as_deref() {
        Some(sub) => format!("{} - {}", title, sub),
        None => title,
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.highlight,
        ) {
            Text(
                content: left_text,
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(props.loading.then(|| element! {
                    Text(content: "fetching...", color: theme.pending)
                }))
                #(props.count_label.clone().map(|count| element! {
                    Text(content: count, color: theme.text)
                }))
                #(props.page_label.clone().map(|page| element! {
                    Text(content: page, color: theme.text, weight: Weight::Bold)
                }))
            }
        }
    }
}
