//! # List controller: page, size, search and filter state for a remote list
//!
//! [`ListController`] is a plain state machine with no runtime attached. Each
//! mutator returns what the caller must do next:
//!
//! | Mutator | Returns | Caller action |
//! |---------|---------|---------------|
//! | [`set_page`](ListController::set_page), [`set_filter_value`](ListController::set_filter_value), [`refresh`](ListController::refresh) | [`FetchTicket`] | fetch now |
//! | [`set_page_size`](ListController::set_page_size) | `Option<FetchTicket>` | fetch now, unless the size was rejected |
//! | [`set_search_text`](ListController::set_search_text) | `Option<SearchTicket>` | wait the debounce interval, then call [`search_due`](ListController::search_due) |
//!
//! Results are handed back with [`complete`](ListController::complete).
//!
//! ## Ordering
//!
//! Every [`FetchTicket`] carries a sequence number one higher than the last.
//! Only the result for the latest sequence number is applied; anything older
//! is dropped on arrival, so a slow response to a superseded query can never
//! overwrite a newer one.
//!
//! ## Debounce
//!
//! Every search keystroke bumps a generation counter and yields a
//! [`SearchTicket`] for it. When a ticket's timer fires, `search_due` only
//! issues a fetch if no later keystroke has happened since.

use api::{ApiError, ListPage, ListQuery};

/// A fetch the caller must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ListQuery,
}

/// A pending debounced search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct ListController<R> {
    query: ListQuery,
    page_sizes: Vec<u32>,
    page: ListPage<R>,
    loading: bool,
    latest_seq: u64,
    search_generation: u64,
}

impl<R> ListController<R> {
    /// A controller on page 0 with no search or filter.
    pub fn new(page_size: u32, page_sizes: Vec<u32>) -> Self {
        Self {
            query: ListQuery::new(page_size),
            page_sizes,
            page: ListPage::default(),
            loading: false,
            latest_seq: 0,
            search_generation: 0,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn page_sizes(&self) -> &[u32] {
        &self.page_sizes
    }

    pub fn rows(&self) -> &[R] {
        &self.page.rows
    }

    pub fn total_count(&self) -> u64 {
        self.page.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Sequence number of the most recently issued fetch, 0 before the first.
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Number of pages needed for `total_count` rows, at least 1.
    pub fn page_count(&self) -> u64 {
        let size = u64::from(self.query.page_size.max(1));
        self.page.total_count.div_ceil(size).max(1)
    }

    pub fn set_page(&mut self, page_index: u32) -> FetchTicket {
        self.query.page_index = page_index;
        self.issue()
    }

    /// Change the page size. Sizes outside the configured options are ignored.
    pub fn set_page_size(&mut self, page_size: u32) -> Option<FetchTicket> {
        if !self.page_sizes.contains(&page_size) {
            tracing::warn!("Ignoring unsupported page size {}", page_size);
            return None;
        }
        self.query.page_size = page_size;
        Some(self.issue())
    }

    pub fn set_filter_value(&mut self, filter_value: impl Into<String>) -> FetchTicket {
        self.query.filter_value = filter_value.into();
        self.issue()
    }

    /// Record new search text. A new non-empty search jumps back to the first
    /// page; the fetch itself waits for the debounce interval.
    pub fn set_search_text(&mut self, search_text: impl Into<String>) -> Option<SearchTicket> {
        let search_text = search_text.into();
        if search_text == self.query.search_text {
            return None;
        }
        if !search_text.is_empty() {
            self.query.page_index = 0;
        }
        self.query.search_text = search_text;
        self.search_generation += 1;
        Some(SearchTicket {
            generation: self.search_generation,
        })
    }

    /// Called when a search ticket's quiet period has elapsed.
    pub fn search_due(&mut self, ticket: SearchTicket) -> Option<FetchTicket> {
        (ticket.generation == self.search_generation).then(|| self.issue())
    }

    /// Refetch the current query.
    pub fn refresh(&mut self) -> FetchTicket {
        self.issue()
    }

    /// Apply the outcome of fetch `seq`. Returns whether it was applied;
    /// results for superseded fetches are dropped.
    pub fn complete(&mut self, seq: u64, result: Result<ListPage<R>, ApiError>) -> bool {
        if seq != self.latest_seq {
            tracing::debug!("Dropping stale list response {} (latest {})", seq, self.latest_seq);
            return false;
        }
        match result {
            Ok(page) => self.page = page,
            Err(e) => tracing::error!("Failed to load list page: {}", e),
        }
        self.loading = false;
        true
    }

    fn issue(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.loading = true;
        FetchTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ListController<&'static str> {
        ListController::new(5, vec![5, 10, 25, 50])
    }

    fn page(rows: Vec<&'static str>, total_count: u64) -> ListPage<&'static str> {
        ListPage { rows, total_count }
    }

    #[test]
    fn test_last_issued_request_reflects_latest_values() {
        let mut list = controller();
        list.set_page(3);
        list.set_page_size(25).unwrap();
        list.set_filter_value("monthly");
        let ticket = list.set_page(1);

        assert_eq!(ticket.seq, 4);
        assert_eq!(ticket.query.page_index, 1);
        assert_eq!(ticket.query.wire_page(), 2);
        assert_eq!(ticket.query.page_size, 25);
        assert_eq!(ticket.query.filter_value, "monthly");
        assert!(list.is_loading());
    }

    #[test]
    fn test_unsupported_page_size_is_ignored() {
        let mut list = controller();
        assert!(list.set_page_size(7).is_none());
        assert_eq!(list.query().page_size, 5);
        assert_eq!(list.latest_seq(), 0);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_search_resets_page_before_firing() {
        let mut list = controller();
        list.set_page(2);

        let ticket = list.set_search_text("john").unwrap();
        assert_eq!(list.query().page_index, 0);

        let fetch = list.search_due(ticket).unwrap();
        assert_eq!(fetch.query.page_index, 0);
        assert_eq!(fetch.query.search_text, "john");
    }

    #[test]
    fn test_clearing_search_keeps_page() {
        let mut list = controller();
        let ticket = list.set_search_text("jo").unwrap();
        list.search_due(ticket);
        list.set_page(2);

        let ticket = list.set_search_text("").unwrap();
        assert_eq!(list.query().page_index, 2);
        assert_eq!(list.search_due(ticket).unwrap().query.search_text, "");
    }

    #[test]
    fn test_rapid_keystrokes_collapse_into_one_fetch() {
        let mut list = controller();
        let tickets: Vec<SearchTicket> = ["j", "jo", "joh", "john"]
            .into_iter()
            .filter_map(|s| list.set_search_text(s))
            .collect();
        assert_eq!(tickets.len(), 4);

        let fetches: Vec<FetchTicket> = tickets
            .into_iter()
            .filter_map(|t| list.search_due(t))
            .collect();
        assert_eq!(fetches.len(), 1);
        assert_eq!(fetches[0].query.search_text, "john");
    }

    #[test]
    fn test_unchanged_search_schedules_nothing() {
        let mut list = controller();
        list.set_search_text("john");
        assert!(list.set_search_text("john").is_none());
    }

    #[test]
    fn test_success_replaces_rows() {
        let mut list = controller();
        let ticket = list.refresh();
        assert!(list.complete(ticket.seq, Ok(page(vec!["a", "b"], 12))));

        assert_eq!(list.rows(), &["a", "b"]);
        assert_eq!(list.total_count(), 12);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut list = controller();
        let first = list.refresh();
        list.complete(first.seq, Ok(page(vec!["a"], 1)));

        let second = list.set_page(1);
        assert!(list.complete(second.seq, Err(ApiError::Transport("offline".into()))));

        assert_eq!(list.rows(), &["a"]);
        assert_eq!(list.total_count(), 1);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut list = controller();
        let older = list.set_page(0);
        let newer = list.set_page(1);

        // Newer answer arrives first, then the slow older one
        assert!(list.complete(newer.seq, Ok(page(vec!["page-2"], 12))));
        assert!(!list.complete(older.seq, Ok(page(vec!["page-1"], 12))));

        assert_eq!(list.rows(), &["page-2"]);
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut list = controller();
        let older = list.set_page(0);
        let _newer = list.set_page(1);

        assert!(!list.complete(older.seq, Err(ApiError::Transport("timeout".into()))));
        assert!(list.is_loading());
    }

    #[test]
    fn test_page_count() {
        let mut list = controller();
        assert_eq!(list.page_count(), 1);

        let ticket = list.refresh();
        list.complete(ticket.seq, Ok(page(vec![], 12)));
        assert_eq!(list.page_count(), 3);

        let ticket = list.set_page_size(10).unwrap();
        list.complete(ticket.seq, Ok(page(vec![], 12)));
        assert_eq!(list.page_count(), 2);
    }
}
