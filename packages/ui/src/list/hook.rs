//! Dioxus binding for [`ListController`].

use std::future::Future;
use std::time::Duration;

use api::ListSource;
use dioxus::prelude::*;

use super::controller::ListController;
use super::driver::ListDriver;

/// Page size options and debounce interval of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    pub page_size: u32,
    pub page_sizes: Vec<u32>,
    pub search_debounce: Duration,
}

impl From<&store::ListConfig> for ListOptions {
    fn from(config: &store::ListConfig) -> Self {
        Self {
            page_size: config.initial_page_size(),
            page_sizes: config.page_sizes.clone(),
            search_debounce: Duration::from_millis(config.search_debounce_ms),
        }
    }
}

/// Handle to a server-paginated list. `Copy`, so it can be moved into any
/// number of event handlers.
pub struct PaginatedList<S: ListSource + 'static> {
    state: Signal<ListController<S::Row>>,
    source: Signal<S>,
    debounce: Duration,
}

impl<S: ListSource + 'static> Clone for PaginatedList<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ListSource + 'static> Copy for PaginatedList<S> {}

impl<S: ListSource + 'static> PartialEq for PaginatedList<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.source == other.source
    }
}

/// Create a list over `source` and load its first page after mount.
pub fn use_paginated_list<S>(source: S, options: ListOptions) -> PaginatedList<S>
where
    S: ListSource + Clone + 'static,
{
    let debounce = options.search_debounce;
    let state = use_signal(move || ListController::new(options.page_size, options.page_sizes));
    let source = use_signal(move || source);
    let list = PaginatedList {
        state,
        source,
        debounce,
    };

    use_effect(move || {
        let mut list = list;
        list.refresh();
    });

    list
}

impl<S> PaginatedList<S>
where
    S: ListSource + Clone + 'static,
{
    /// The controller, for rendering. Reading subscribes the caller.
    pub fn state(&self) -> Signal<ListController<S::Row>> {
        self.state
    }

    pub fn set_page(&mut self, page_index: u32) {
        ListDriver::set_page(self, page_index);
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        ListDriver::set_page_size(self, page_size);
    }

    pub fn set_filter_value(&mut self, filter_value: String) {
        ListDriver::set_filter_value(self, filter_value);
    }

    pub fn set_search_text(&mut self, search_text: String) {
        ListDriver::set_search_text(self, search_text);
    }

    pub fn refresh(&mut self) {
        ListDriver::refresh(self);
    }
}

impl<S> ListDriver for PaginatedList<S>
where
    S: ListSource + Clone + 'static,
{
    type Source = S;

    fn source(&self) -> S {
        self.source.peek().clone()
    }

    fn debounce(&self) -> Duration {
        self.debounce
    }

    fn update<T>(&mut self, f: impl FnOnce(&mut ListController<S::Row>) -> T) -> T {
        f(&mut *self.state.write())
    }

    fn spawn_local(&self, task: impl Future<Output = ()> + 'static) {
        spawn(task);
    }
}
