//! Timer and fetch scheduling around a [`ListController`].
//!
//! A [`ListDriver`] supplies storage for the controller and a way to spawn
//! local tasks; the provided methods do the rest. The Dioxus hook implements
//! it over signals and `spawn`, and tests implement it over `Rc<RefCell<_>>`
//! and a tokio `LocalSet`, so both run the same debounce and dispatch code.

use std::future::Future;
use std::time::Duration;

use api::ListSource;

use super::controller::{FetchTicket, ListController, SearchTicket};
use crate::timer::sleep;

type Row<D> = <<D as ListDriver>::Source as ListSource>::Row;

pub trait ListDriver: Clone + 'static {
    type Source: ListSource + Clone + 'static;

    fn source(&self) -> Self::Source;

    /// Quiet period a search must survive before it is fetched.
    fn debounce(&self) -> Duration;

    fn update<T>(&mut self, f: impl FnOnce(&mut ListController<Row<Self>>) -> T) -> T;

    fn spawn_local(&self, task: impl Future<Output = ()> + 'static);

    fn set_page(&mut self, page_index: u32) {
        let ticket = self.update(|list| list.set_page(page_index));
        self.dispatch(ticket);
    }

    fn set_page_size(&mut self, page_size: u32) {
        if let Some(ticket) = self.update(|list| list.set_page_size(page_size)) {
            self.dispatch(ticket);
        }
    }

    fn set_filter_value(&mut self, filter_value: String) {
        let ticket = self.update(|list| list.set_filter_value(filter_value));
        self.dispatch(ticket);
    }

    fn set_search_text(&mut self, search_text: String) {
        if let Some(ticket) = self.update(|list| list.set_search_text(search_text)) {
            self.schedule_search(ticket);
        }
    }

    fn refresh(&mut self) {
        let ticket = self.update(|list| list.refresh());
        self.dispatch(ticket);
    }

    fn schedule_search(&self, ticket: SearchTicket) {
        let mut driver = self.clone();
        self.spawn_local(async move {
            sleep(driver.debounce()).await;
            if let Some(fetch) = driver.update(|list| list.search_due(ticket)) {
                driver.dispatch(fetch);
            }
        });
    }

    fn dispatch(&self, ticket: FetchTicket) {
        let mut driver = self.clone();
        let source = self.source();
        self.spawn_local(async move {
            let result = source.fetch_page(&ticket.query).await;
            driver.update(|list| list.complete(ticket.seq, result));
        });
    }
}
