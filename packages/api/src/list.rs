//! Paginated list plumbing shared by list controllers and their data sources.

use std::future::Future;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::OfferRow;

/// Pagination, search and filter parameters of one list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Zero-based page index as shown in the UI.
    pub page_index: u32,
    pub page_size: u32,
    pub search_text: String,
    pub filter_value: String,
}

impl ListQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_index: 0,
            page_size,
            search_text: String::new(),
            filter_value: String::new(),
        }
    }

    /// One-based page number sent to the server.
    pub fn wire_page(&self) -> u32 {
        self.page_index + 1
    }
}

/// Rows of one page plus the total row count across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R> {
    pub rows: Vec<R>,
    pub total_count: u64,
}

impl<R> Default for ListPage<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
        }
    }
}

/// Async source of list pages.
pub trait ListSource {
    type Row: 'static;

    fn fetch_page(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = Result<ListPage<Self::Row>, ApiError>>;
}

/// The offers list endpoint.
#[derive(Clone, PartialEq)]
pub struct OffersSource {
    client: ApiClient,
}

impl OffersSource {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl ListSource for OffersSource {
    type Row = OfferRow;

    async fn fetch_page(&self, query: &ListQuery) -> Result<ListPage<OfferRow>, ApiError> {
        let page = self.client.list_offers(query).await?;
        Ok(ListPage {
            rows: page.data,
            total_count: page.meta.total,
        })
    }
}
