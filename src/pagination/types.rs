//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by the aggregator.

use crate::error::Result;
use async_trait::async_trait;

/// One batch of records plus the cursor for the batch after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records in server order
    pub items: Vec<T>,
    /// Continuation token, absent on the last page
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self { items, next_token }
    }

    /// Create a page that ends the listing
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, None)
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page carries no records
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// What to fetch after this page
    pub fn next_page(&self) -> NextPage {
        NextPage::from_token(self.next_token.clone())
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available, resume from this token
    Continue {
        /// Opaque token to send with the next request
        token: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Build from an optional continuation token.
    ///
    /// Only absence ends the listing. An empty string is still a token.
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) => Self::Continue { token },
            None => Self::Done,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Token for the next request
    pub token: Option<String>,
    /// Pages fetched so far
    pub pages_fetched: usize,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }

    /// Account for a fetched page and move to whatever comes after it
    pub fn advance<T>(&mut self, page: &Page<T>) {
        self.pages_fetched += 1;
        self.add_fetched(page.len() as u64);

        match page.next_page() {
            NextPage::Continue { token } => self.token = Some(token),
            NextPage::Done => {
                self.token = None;
                self.mark_done();
            }
        }
    }
}

/// A cursor-based remote listing
///
/// Implementors own transport concerns (retries, throttling). The aggregator
/// only ever calls `fetch_page` sequentially, threading the token through.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Caller-defined filter, sent unchanged with every page request
    type Request: Send + Sync;
    /// One record of the listing
    type Item: Send;

    /// Name of the remote operation, used in logs and errors
    fn operation(&self) -> &str;

    /// Fetch the page that starts at `token` (the first page when `None`)
    async fn fetch_page(
        &self,
        request: &Self::Request,
        token: Option<&str>,
    ) -> Result<Page<Self::Item>>;
}
