//! Reusable hooks for TUI components

use std::future::Future;
use std::pin::Pin;

use iocraft::prelude::*;

use crate::remote::CatalogProvider;
use crate::tui::catalog::controller::{CatalogController, CatalogSnapshot};
use crate::tui::catalog::filter::FilterField;

type BoxedFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Create an async handler that mirrors controller snapshots into component state
///
/// Call the handler once after mount; it runs until the controller is dropped.
///
/// # Example
///
/// ```ignore
/// let snapshot: State<CatalogSnapshot> = hooks.use_state(|| controller.snapshot());
/// let listener = hooks.use_async_handler(use_snapshot_listener(controller.clone(), snapshot));
/// listener(());
/// ```
pub fn use_snapshot_listener<P>(
    controller: CatalogController<P>,
    snapshot_setter: State<CatalogSnapshot>,
) -> impl Fn(()) -> BoxedFuture + Clone
where
    P: CatalogProvider + 'static,
{
    move |()| {
        let mut rx = controller.subscribe();
        let mut snapshot_setter = snapshot_setter;

        Box::pin(async move {
            // Anything published before we subscribed
            snapshot_setter.set(rx.borrow_and_update().clone());

            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                snapshot_setter.set(next);
            }
        })
    }
}

/// Create an async handler that forwards a filter input's value to the controller
pub fn use_filter_change<P>(
    controller: CatalogController<P>,
    field: FilterField,
) -> impl Fn(String) -> BoxedFuture + Clone
where
    P: CatalogProvider + 'static,
{
    move |value: String| {
        let controller = controller.clone();
        Box::pin(async move {
            controller.on_filter_change(field, value);
        })
    }
}
