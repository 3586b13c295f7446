//! CatalogBrowser model types for testable state management
//!
//! Separates the browser's local UI state (focus, selection) from the
//! controller snapshot it renders, so key mapping, reduction and view model
//! computation can be tested without the iocraft framework.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::tui::components::empty_state::EmptyStateKind;
use crate::tui::components::footer::{Shortcut, input_shortcuts, list_shortcuts};
use crate::types::{MAX_PAGE, PageDirection, Product};

use super::controller::CatalogSnapshot;
use super::filter::{FilterField, Filters};

/// Filter inputs in Tab order
pub const INPUT_ORDER: [FilterField; 3] =
    [FilterField::Search, FilterField::Brand, FilterField::MaxPrice];

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Input(FilterField),
}

impl Focus {
    /// Tab order: list, search, brand, max price, back to list
    pub fn next(self) -> Focus {
        match self {
            Focus::List => Focus::Input(FilterField::Search),
            Focus::Input(FilterField::Search) => Focus::Input(FilterField::Brand),
            Focus::Input(FilterField::Brand) => Focus::Input(FilterField::MaxPrice),
            Focus::Input(FilterField::MaxPrice) => Focus::List,
        }
    }

    pub fn input(self) -> Option<FilterField> {
        match self {
            Focus::List => None,
            Focus::Input(field) => Some(field),
        }
    }
}

/// Local UI state of the browser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserState {
    pub focus: Focus,
    /// Index into the visible products
    pub selected_index: usize,
    /// Index of the first visible row
    pub scroll_offset: usize,
}

/// All possible actions in the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,

    // Pages
    Paginate(PageDirection),
    /// Re-fetch the current page
    Refresh,

    // Focus
    FocusInput(FilterField),
    CycleFocus,
    FocusList,

    Quit,
}

/// Computed view model for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogViewModel {
    /// e.g. "Page 2/3"
    pub page_label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub loading: bool,
    /// e.g. "12 of 50 products"
    pub count_label: String,
    pub inputs: Vec<FilterInputViewModel>,
    /// Rows inside the scroll window
    pub rows: Vec<ProductRowViewModel>,
    pub hidden_above: usize,
    pub hidden_below: usize,
    pub empty_state: Option<EmptyStateKind>,
    /// Applied filters, for the "no matches" state
    pub filter_summary: Option<String>,
    pub shortcuts: Vec<Shortcut>,
}

/// View model for one filter input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInputViewModel {
    pub field: FilterField,
    pub label: &'static str,
    pub focused: bool,
    /// Typed value not yet applied (brand and price wait for the quiet period)
    pub pending: bool,
}

/// View model for one product row
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRowViewModel {
    pub product: Product,
    pub is_selected: bool,
}

/// Convert a key event to a BrowserAction (pure function)
///
/// Returns `None` for keys with no action. While an input has focus, printable
/// keys are left to the text input.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, focus: Focus) -> Option<BrowserAction> {
    if code == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(BrowserAction::Quit);
    }

    match focus {
        Focus::Input(_) => input_key_to_action(code),
        Focus::List => list_key_to_action(code, modifiers),
    }
}

fn input_key_to_action(code: KeyCode) -> Option<BrowserAction> {
    match code {
        KeyCode::Esc | KeyCode::Enter => Some(BrowserAction::FocusList),
        KeyCode::Tab => Some(BrowserAction::CycleFocus),
        _ => None,
    }
}

fn list_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<BrowserAction> {
    if modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match code {
        KeyCode::Char('h') | KeyCode::Left => Some(BrowserAction::Paginate(PageDirection::Prev)),
        KeyCode::Char('l') | KeyCode::Right => Some(BrowserAction::Paginate(PageDirection::Next)),
        KeyCode::Char('j') | KeyCode::Down => Some(BrowserAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(BrowserAction::MoveUp),
        KeyCode::Char('g') | KeyCode::Home => Some(BrowserAction::GoToTop),
        KeyCode::Char('G') | KeyCode::End => Some(BrowserAction::GoToBottom),
        KeyCode::Char('/') => Some(BrowserAction::FocusInput(FilterField::Search)),
        KeyCode::Char('b') => Some(BrowserAction::FocusInput(FilterField::Brand)),
        KeyCode::Char('$') => Some(BrowserAction::FocusInput(FilterField::MaxPrice)),
        KeyCode::Tab => Some(BrowserAction::CycleFocus),
        KeyCode::Char('r') => Some(BrowserAction::Refresh),
        KeyCode::Char('q') => Some(BrowserAction::Quit),
        _ => None,
    }
}

/// Adjust scroll offset to keep the selected row visible
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }
    if selected_index < scroll_offset {
        return selected_index;
    }
    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }
    scroll_offset
}

/// Apply an action to the UI state.
///
/// Side effects (fetching, quitting) are the caller's job; this only moves
/// focus and selection. A page change that the snapshot's bounds rule out
/// leaves the selection alone.
pub fn reduce_browser_state(
    mut state: BrowserState,
    action: BrowserAction,
    snapshot: &CatalogSnapshot,
    list_height: usize,
) -> BrowserState {
    let count = snapshot.visible.len();
    let last = count.saturating_sub(1);

    match action {
        BrowserAction::MoveDown => {
            state.selected_index = (state.selected_index + 1).min(last);
        }
        BrowserAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1).min(last);
        }
        BrowserAction::GoToTop => {
            state.selected_index = 0;
        }
        BrowserAction::GoToBottom => {
            state.selected_index = last;
        }
        BrowserAction::Paginate(direction) => {
            if snapshot.page.step(direction).is_some() {
                state.selected_index = 0;
                state.scroll_offset = 0;
            }
        }
        BrowserAction::FocusInput(field) => state.focus = Focus::Input(field),
        BrowserAction::CycleFocus => state.focus = state.focus.next(),
        BrowserAction::FocusList => state.focus = Focus::List,
        BrowserAction::Refresh | BrowserAction::Quit => {}
    }

    state.scroll_offset = adjust_scroll(state.scroll_offset, state.selected_index, list_height);
    state
}

/// Short description of the applied filters, `None` when all are empty
pub fn describe_filters(filters: &Filters) -> Option<String> {
    let parts: Vec<String> = INPUT_ORDER
        .iter()
        .filter(|field| !filters.get(**field).is_empty())
        .map(|field| {
            format!(
                "{}: \"{}\"",
                field.label().to_lowercase(),
                filters.get(*field)
            )
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Compute the view model from UI state, the controller snapshot and the
/// values currently typed into the inputs.
pub fn compute_catalog_view_model(
    state: &BrowserState,
    snapshot: &CatalogSnapshot,
    typed: &Filters,
    list_height: usize,
) -> CatalogViewModel {
    let visible = &snapshot.visible;
    let selected = state.selected_index.min(visible.len().saturating_sub(1));
    let scroll = adjust_scroll(
        state
            .scroll_offset
            .min(visible.len().saturating_sub(list_height)),
        selected,
        list_height,
    );
    let end = (scroll + list_height).min(visible.len());

    let rows = visible
        .get(scroll..end)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, product)| ProductRowViewModel {
            product: product.clone(),
            is_selected: state.focus == Focus::List && scroll + i == selected,
        })
        .collect();

    // Loading and failure look the same: nothing stored for the page
    let empty_state = if snapshot.products.is_empty() {
        Some(EmptyStateKind::Loading)
    } else if visible.is_empty() {
        Some(EmptyStateKind::NoMatches)
    } else {
        None
    };

    let inputs = INPUT_ORDER
        .iter()
        .map(|&field| FilterInputViewModel {
            field,
            label: field.label(),
            focused: state.focus == Focus::Input(field),
            pending: typed.get(field) != snapshot.filters.get(field),
        })
        .collect();

    let shortcuts = match state.focus {
        Focus::List => list_shortcuts(),
        Focus::Input(_) => input_shortcuts(),
    };

    CatalogViewModel {
        page_label: format!("Page {}/{}", snapshot.page.number(), MAX_PAGE),
        prev_enabled: !snapshot.page.is_first(),
        next_enabled: !snapshot.page.is_last(),
        loading: snapshot.loading,
        count_label: format!("{} of {} products", visible.len(), snapshot.products.len()),
        inputs,
        rows,
        hidden_above: scroll,
        hidden_below: visible.len().saturating_sub(end),
        empty_state,
        filter_summary: describe_filters(&snapshot.filters),
        shortcuts,
    }
}
