//! View state controller for the catalog browser.
//!
//! Owns the current page, the filter terms and the fetched product set. Every
//! change is published as a [`CatalogSnapshot`] on a watch channel, which the
//! presentation layer renders.
//!
//! Fetch ordering: each fetch takes the next request id when it starts and only
//! stores its result if no newer fetch has started since. A slow response for
//! an old page can therefore never replace the products of the page on screen.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::remote::CatalogProvider;
use crate::types::{Page, PageDirection, Product};

use super::debounce::Debouncer;
use super::filter::{FilterField, Filters, visible_products};

/// Default quiet period for the brand and price inputs
pub const DEFAULT_FILTER_DEBOUNCE: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    pub filter_debounce: Duration,
    pub initial_page: Page,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            filter_debounce: DEFAULT_FILTER_DEBOUNCE,
            initial_page: Page::FIRST,
        }
    }
}

/// Immutable view of the controller state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub page: Page,
    pub filters: Filters,
    /// Deduplicated products of the current page
    pub products: Vec<Product>,
    /// `products` narrowed by `filters`
    pub visible: Vec<Product>,
    /// A fetch is in flight
    pub loading: bool,
    /// Number of fetches whose result was stored
    pub completed_fetches: u64,
}

#[derive(Debug, Default)]
struct ControllerState {
    page: Page,
    filters: Filters,
    products: Vec<Product>,
    loading: bool,
    latest_request: u64,
    completed_fetches: u64,
}

impl ControllerState {
    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            page: self.page,
            filters: self.filters.clone(),
            products: self.products.clone(),
            visible: visible_products(&self.products, &self.filters),
            loading: self.loading,
            completed_fetches: self.completed_fetches,
        }
    }
}

struct Inner<P> {
    provider: P,
    state: Mutex<ControllerState>,
    brand_debounce: Debouncer,
    price_debounce: Debouncer,
    updates: watch::Sender<CatalogSnapshot>,
}

/// Cloneable handle to the shared controller
pub struct CatalogController<P> {
    inner: Arc<Inner<P>>,
}

impl<P> Clone for CatalogController<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> CatalogController<P>
where
    P: CatalogProvider + 'static,
{
    pub fn new(provider: P, options: ControllerOptions) -> Self {
        let state = ControllerState {
            page: options.initial_page,
            ..Default::default()
        };
        let (updates, _) = watch::channel(state.snapshot());

        Self {
            inner: Arc::new(Inner {
                provider,
                state: Mutex::new(state),
                brand_debounce: Debouncer::new(options.filter_debounce),
                price_debounce: Debouncer::new(options.filter_debounce),
                updates,
            }),
        }
    }

    /// Receive a snapshot after every state change
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.inner.updates.subscribe()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.inner.state.lock().snapshot()
    }

    pub fn page(&self) -> Page {
        self.inner.state.lock().page
    }

    pub fn filters(&self) -> Filters {
        self.inner.state.lock().filters.clone()
    }

    /// Current page's products that pass the active filters
    pub fn visible_products(&self) -> Vec<Product> {
        let state = self.inner.state.lock();
        visible_products(&state.products, &state.filters)
    }

    /// Initial fetch of the starting page
    pub fn start(&self) -> JoinHandle<()> {
        self.spawn_fetch()
    }

    /// Re-fetch the current page
    pub fn refresh(&self) -> JoinHandle<()> {
        self.spawn_fetch()
    }

    /// Move one page in `direction`.
    ///
    /// Returns the fetch task, or `None` when already at the bound (no-op).
    pub fn on_paginate(&self, direction: PageDirection) -> Option<JoinHandle<()>> {
        {
            let mut state = self.inner.state.lock();
            let next = state.page.step(direction)?;
            state.page = next;
        }
        self.publish();
        Some(self.spawn_fetch())
    }

    /// Apply a search term immediately; search never re-fetches
    pub fn on_search_change(&self, term: impl Into<String>) {
        self.inner.state.lock().filters.search = term.into();
        self.publish();
    }

    /// Debounced brand filter update
    pub fn on_brand_filter_change(&self, term: impl Into<String>) {
        self.schedule_filter(FilterField::Brand, term.into());
    }

    /// Debounced price ceiling update
    pub fn on_price_filter_change(&self, term: impl Into<String>) {
        self.schedule_filter(FilterField::MaxPrice, term.into());
    }

    /// Route a change from any filter input
    pub fn on_filter_change(&self, field: FilterField, term: impl Into<String>) {
        match field {
            FilterField::Search => self.on_search_change(term),
            FilterField::Brand => self.on_brand_filter_change(term),
            FilterField::MaxPrice => self.on_price_filter_change(term),
        }
    }

    /// Whether a brand or price update is waiting for its quiet period
    pub fn has_pending_filter(&self) -> bool {
        self.inner.brand_debounce.is_pending() || self.inner.price_debounce.is_pending()
    }

    fn schedule_filter(&self, field: FilterField, term: String) {
        let debouncer = match field {
            FilterField::Brand => &self.inner.brand_debounce,
            FilterField::MaxPrice => &self.inner.price_debounce,
            FilterField::Search => return self.on_search_change(term),
        };

        let weak: Weak<Inner<P>> = Arc::downgrade(&self.inner);
        debouncer.schedule(move || {
            if let Some(inner) = weak.upgrade() {
                CatalogController { inner }.apply_filter(field, term);
            }
        });
    }

    fn apply_filter(&self, field: FilterField, term: String) {
        {
            let mut state = self.inner.state.lock();
            if state.filters.get(field) == term {
                tracing::debug!(field = field.label(), "debounced filter unchanged");
                return;
            }
            tracing::debug!(field = field.label(), term = %term, "applying debounced filter");
            state.filters.set(field, term);
        }
        self.publish();
        // Filtering is client-side; the page is re-fetched on brand/price changes regardless
        self.spawn_fetch();
    }

    fn spawn_fetch(&self) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move { this.fetch_current_page().await })
    }

    /// Fetch the current page and store it unless a newer fetch has started
    pub async fn fetch_current_page(&self) {
        let (request_id, page) = {
            let mut state = self.inner.state.lock();
            state.latest_request += 1;
            state.loading = true;
            (state.latest_request, state.page)
        };
        self.publish();

        let products = self.inner.provider.fetch_page(page).await;

        {
            let mut state = self.inner.state.lock();
            if state.latest_request != request_id {
                tracing::debug!(
                    request_id,
                    latest = state.latest_request,
                    page = page.number(),
                    "discarding stale page response"
                );
                return;
            }
            state.products = products;
            state.loading = false;
            state.completed_fetches += 1;
        }
        self.publish();
    }

    fn publish(&self) {
        let snapshot = self.inner.state.lock().snapshot();
        self.inner.updates.send_replace(snapshot);
    }
}
