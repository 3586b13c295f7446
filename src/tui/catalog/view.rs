//! Catalog browser view (`catalog browse`)
//!
//! Renders the controller's snapshots and routes keys and input edits back to
//! the controller.

use iocraft::prelude::*;

use crate::remote::CatalogClient;
use crate::tui::components::{EmptyState, FilterInput, Footer, Header, Pager, ProductCard};
use crate::tui::hooks::{use_filter_change, use_snapshot_listener};
use crate::tui::theme::theme;

use super::controller::{CatalogController, CatalogSnapshot};
use super::filter::{FilterField, Filters};
use super::model::{
    BrowserAction, BrowserState, compute_catalog_view_model, key_to_action, reduce_browser_state,
};

/// Rows taken by everything but the product list:
/// header, filter bar (3), pager, footer
const CHROME_HEIGHT: u16 = 6;

/// Props for the CatalogBrowser component
#[derive(Default, Props)]
pub struct CatalogBrowserProps {
    pub controller: Option<CatalogController<CatalogClient>>,
    /// Endpoint host shown in the header
    pub endpoint: Option<String>,
}

/// Main catalog browser component
///
/// Layout:
/// ```text
/// +------------------------------------------------+
/// | Catalog - api.example.com   12 of 50  Page 1/3 |
/// +------------------------------------------------+
/// | Search: ...  | Brand: ...    | Max price: ...  |
/// +------------------------------------------------+
/// | > id  name                    price  brand     |
/// |   id  name                    price  brand     |
/// +------------------------------------------------+
/// | < prev [h]  Page 1/3  [l] next >               |
/// | Footer with shortcuts                          |
/// +------------------------------------------------+
/// ```
#[component]
pub fn CatalogBrowser<'a>(props: &CatalogBrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let theme = theme();

    let Some(controller) = props.controller.clone() else {
        return element! {
            View(padding: 1) {
                Text(content: "No catalog controller provided", color: theme.text_dimmed)
            }
        };
    };

    let (_width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let list_height = height.saturating_sub(CHROME_HEIGHT).max(1) as usize;

    let snapshot: State<CatalogSnapshot> = hooks.use_state(|| controller.snapshot());
    let mut browser: State<BrowserState> = hooks.use_state(BrowserState::default);
    let mut should_exit = hooks.use_state(|| false);

    // Typed values, echoed immediately; brand and price apply after the quiet period
    let search_input = hooks.use_state(|| snapshot.read().filters.search.clone());
    let brand_input = hooks.use_state(|| snapshot.read().filters.brand.clone());
    let price_input = hooks.use_state(|| snapshot.read().filters.max_price.clone());

    let snapshot_listener: Handler<()> =
        hooks.use_async_handler(use_snapshot_listener(controller.clone(), snapshot));
    let on_search: Handler<String> =
        hooks.use_async_handler(use_filter_change(controller.clone(), FilterField::Search));
    let on_brand: Handler<String> =
        hooks.use_async_handler(use_filter_change(controller.clone(), FilterField::Brand));
    let on_price: Handler<String> =
        hooks.use_async_handler(use_filter_change(controller.clone(), FilterField::MaxPrice));

    // Subscribe and fetch the first page on mount
    let mut started = hooks.use_state(|| false);
    if !started.get() {
        started.set(true);
        snapshot_listener.clone()(());
        controller.start();
    }

    hooks.use_terminal_events({
        let controller = controller.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let current = browser.read().clone();
                let Some(action) = key_to_action(code, modifiers, current.focus) else {
                    return;
                };

                match action {
                    BrowserAction::Quit => {
                        should_exit.set(true);
                        return;
                    }
                    BrowserAction::Paginate(direction) => {
                        controller.on_paginate(direction);
                    }
                    BrowserAction::Refresh => {
                        controller.refresh();
                    }
                    _ => {}
                }

                // Reduce against the snapshot the key was pressed on
                let next = reduce_browser_state(current, action, &snapshot.read(), list_height);
                browser.set(next);
            }
            _ => {}
        }
    });

    if should_exit.get() {
        system.exit();
    }

    let typed = Filters {
        search: search_input.to_string(),
        brand: brand_input.to_string(),
        max_price: price_input.to_string(),
    };
    let current = snapshot.read().clone();
    let vm = compute_catalog_view_model(&browser.read(), &current, &typed, list_height);

    let endpoint = props.endpoint.clone();
    let inputs = vm.inputs.iter().map(|input| {
        let (value, on_change) = match input.field {
            FilterField::Search => (search_input, on_search.clone()),
            FilterField::Brand => (brand_input, on_brand.clone()),
            FilterField::MaxPrice => (price_input, on_price.clone()),
        };
        element! {
            FilterInput(
                label: input.label.to_string(),
                value: Some(value),
                on_change: Some(on_change),
                has_focus: input.focused,
                pending: input.pending,
            )
        }
    });

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                subtitle: endpoint,
                page_label: Some(vm.page_label.clone()),
                count_label: Some(vm.count_label.clone()),
                loading: vm.loading,
            )

            View(width: 100pct, flex_direction: FlexDirection::Row, flex_shrink: 0.0) {
                #(inputs)
            }

            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
            ) {
                #(vm.empty_state.map(|kind| element! {
                    EmptyState(kind: kind, filter_summary: vm.filter_summary.clone())
                }))
                #(vm.rows.iter().map(|row| element! {
                    ProductCard(product: Some(row.product.clone()), is_selected: row.is_selected)
                }))
            }

            Pager(
                label: vm.page_label.clone(),
                prev_enabled: vm.prev_enabled,
                next_enabled: vm.next_enabled,
                hidden_above: vm.hidden_above,
                hidden_below: vm.hidden_below,
            )

            Footer(shortcuts: vm.shortcuts.clone())
        }
    }
}
