//! Server-paginated lists: the [`ListController`] state machine, the
//! [`ListDriver`] that schedules its timers and fetches, and the
//! [`use_paginated_list`] hook that runs it from Dioxus.

mod controller;
mod driver;
mod hook;

pub use controller::{FetchTicket, ListController, SearchTicket};
pub use driver::ListDriver;
pub use hook::{use_paginated_list, ListOptions, PaginatedList};

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use api::{ApiError, ListPage, ListQuery, ListSource};

    use super::*;
    use crate::timer::sleep;

    const DEBOUNCE: Duration = Duration::from_millis(500);

    /// Records every query and answers after a per-page delay.
    #[derive(Clone, Default)]
    struct RecordingSource {
        queries: Rc<RefCell<Vec<ListQuery>>>,
        slow_first_page: bool,
    }

    impl ListSource for RecordingSource {
        type Row = String;

        async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<String>, ApiError> {
            self.queries.borrow_mut().push(query.clone());
            let delay = if self.slow_first_page && query.page_index == 0 {
                300
            } else {
                50
            };
            sleep(Duration::from_millis(delay)).await;
            Ok(ListPage {
                rows: vec![format!("{}:{}", query.search_text, query.wire_page())],
                total_count: 12,
            })
        }
    }

    /// Controller behind a `RefCell`, with tasks spawned on the current
    /// `LocalSet`.
    #[derive(Clone)]
    struct LocalList {
        state: Rc<RefCell<ListController<String>>>,
        source: RecordingSource,
    }

    impl LocalList {
        fn new(source: RecordingSource, page_sizes: Vec<u32>) -> Self {
            Self {
                state: Rc::new(RefCell::new(ListController::new(5, page_sizes))),
                source,
            }
        }
    }

    impl ListDriver for LocalList {
        type Source = RecordingSource;

        fn source(&self) -> RecordingSource {
            self.source.clone()
        }

        fn debounce(&self) -> Duration {
            DEBOUNCE
        }

        fn update<T>(&mut self, f: impl FnOnce(&mut ListController<String>) -> T) -> T {
            f(&mut self.state.borrow_mut())
        }

        fn spawn_local(&self, task: impl std::future::Future<Output = ()> + 'static) {
            tokio::task::spawn_local(task);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_within_window_issues_one_request() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let source = RecordingSource::default();
                let mut list = LocalList::new(source.clone(), vec![5, 10]);

                for text in ["j", "jo", "joh", "john"] {
                    list.set_search_text(text.to_string());
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
                assert!(source.queries.borrow().is_empty());

                tokio::time::sleep(Duration::from_millis(700)).await;

                let queries = source.queries.borrow();
                assert_eq!(queries.len(), 1);
                assert_eq!(queries[0].search_text, "john");
                assert_eq!(queries[0].wire_page(), 1);
                assert_eq!(list.state.borrow().rows(), &["john:1".to_string()]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_pauses_longer_than_window_fire_separately() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let source = RecordingSource::default();
                let mut list = LocalList::new(source.clone(), vec![5]);

                list.set_search_text("jo".to_string());
                tokio::time::sleep(Duration::from_millis(600)).await;
                list.set_search_text("john".to_string());
                tokio::time::sleep(Duration::from_millis(600)).await;

                let texts: Vec<String> = source
                    .queries
                    .borrow()
                    .iter()
                    .map(|q| q.search_text.clone())
                    .collect();
                assert_eq!(texts, vec!["jo", "john"]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_stale_response_loses() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let source = RecordingSource {
                    slow_first_page: true,
                    ..Default::default()
                };
                let mut list = LocalList::new(source.clone(), vec![5]);

                list.refresh();
                list.set_page(1);

                tokio::time::sleep(Duration::from_millis(400)).await;

                let list = list.state.borrow();
                assert_eq!(list.rows(), &[":2".to_string()]);
                assert_eq!(list.query().page_index, 1);
                assert!(!list.is_loading());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_size_change_keeps_page_and_ignores_unknown_sizes() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let source = RecordingSource::default();
                let mut list = LocalList::new(source.clone(), vec![5, 10]);

                list.set_page(2);
                tokio::time::sleep(Duration::from_millis(100)).await;
                list.set_page_size(10);
                tokio::time::sleep(Duration::from_millis(100)).await;
                list.set_page_size(7);
                tokio::time::sleep(Duration::from_millis(100)).await;

                let queries = source.queries.borrow();
                assert_eq!(queries.len(), 2);
                assert_eq!(queries[1].page_size, 10);
                assert_eq!(queries[1].page_index, 2);
                assert!(!list.state.borrow().is_loading());
            })
            .await;
    }
}
