//! Prev/next page indicators

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Pager component
#[derive(Default, Props)]
pub struct PagerProps {
    /// e.g. "Page 2/3"
    pub label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Rows scrolled out above the list window
    pub hidden_above: usize,
    /// Rows scrolled out below the list window
    pub hidden_below: usize,
}

/// Pager row; an arrow is dimmed when its page does not exist
#[component]
pub fn Pager(props: &PagerProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let scroll_hint = match (props.hidden_above, props.hidden_below) {
        (0, 0) => String::new(),
        (above, below) => format!("{} above, {} below", above, below),
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_shrink: 0.0,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: "< prev [h]",
                    color: theme.pager_color(props.prev_enabled),
                    weight: if props.prev_enabled { Weight::Bold } else { Weight::Normal },
                )
                Text(content: props.label.clone(), color: theme.text)
                Text(
                    content: "[l] next >",
                    color: theme.pager_color(props.next_enabled),
                    weight: if props.next_enabled { Weight::Bold } else { Weight::Normal },
                )
            }
            Text(content: scroll_hint, color: theme.text_dimmed)
        }
    }
}
