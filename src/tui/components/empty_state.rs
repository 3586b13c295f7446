//! Empty state component
//!
//! Shown in place of the product list when there is nothing to list.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Type of empty state to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// No products stored for the page (fetch pending or failed)
    #[default]
    Loading,
    /// Products exist but the filters exclude all of them
    NoMatches,
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    /// The kind of empty state to display
    pub kind: EmptyStateKind,
    /// Summary of the active filters (for NoMatches)
    pub filter_summary: Option<String>,
}

/// Empty state display with helpful message
#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let (icon, title, message, hint) = match props.kind {
        EmptyStateKind::Loading => ("~", "Loading", "Loading products...", "Press 'r' to retry."),
        EmptyStateKind::NoMatches => (
            "?",
            "No Matches",
            "No products on this page match your filters.",
            "Edit a filter, or try another page with h/l.",
        ),
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(
                    content: icon,
                    color: theme.text_dimmed,
                    weight: Weight::Bold,
                )
            }

            Text(
                content: title,
                color: theme.text,
                weight: Weight::Bold,
            )

            View(margin_top: 1, max_width: 60) {
                Text(
                    content: message,
                    color: theme.text_dimmed,
                )
            }

            #(match (props.kind, props.filter_summary.clone()) {
                (EmptyStateKind::NoMatches, Some(summary)) => Some(element! {
                    View(margin_top: 1) {
                        Text(
                            content: summary,
                            color: theme.search_match,
                        )
                    }
                }),
                _ => None,
            })

            View(margin_top: 2) {
                Text(
                    content: hint,
                    color: theme.text_dimmed,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_kind_default() {
        assert_eq!(EmptyStateKind::default(), EmptyStateKind::Loading);
    }
}
