//! Labelled filter input
//!
//! A bordered text input that echoes every keystroke into its `State` and
//! forwards the new value to `on_change`.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the FilterInput component
#[derive(Default, Props)]
pub struct FilterInputProps {
    /// Label shown before the value
    pub label: String,
    /// State for the typed value
    pub value: Option<State<String>>,
    /// Called with the new value after every edit
    pub on_change: Option<Handler<String>>,
    /// Whether the input has focus
    pub has_focus: bool,
    /// Typed value is waiting to be applied
    pub pending: bool,
}

/// Filter text input with a label prefix
#[component]
pub fn FilterInput(props: &FilterInputProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };
    let label_color = if props.pending {
        theme.pending
    } else {
        theme.text_dimmed
    };

    let Some(mut value) = props.value else {
        return element! {
            View(
                border_style: BorderStyle::Round,
                border_color: border_color,
                height: 3,
            ) {
                Text(content: "No value state provided", color: theme.text_dimmed)
            }
        };
    };
    let on_change = props.on_change.clone();

    element! {
        View(
            flex_grow: 1.0,
            flex_direction: FlexDirection::Row,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
            height: 3,
        ) {
            View(margin_right: 1) {
                Text(
                    content: format!("{}:", props.label),
                    color: label_color,
                )
            }
            View(flex_grow: 1.0) {
                TextInput(
                    value: value.to_string(),
                    has_focus: props.has_focus,
                    on_change: move |new_value: String| {
                        value.set(new_value.clone());
                        if let Some(handler) = &on_change {
                            handler(new_value);
                        }
                    },
                    color: theme.text,
                )
            }
        }
    }
}
