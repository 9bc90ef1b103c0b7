//! Pagination module
//!
//! Supports: continuation-token listings (the only pattern the ODB API uses)
//!
//! # Overview
//!
//! A [`PageSource`] fetches one page at a time. [`aggregate`] drives it until
//! the remote stops returning a continuation token and yields every record in
//! arrival order, or fails as a whole. [`pages`] exposes the same loop as a
//! stream for callers that want to process pages as they arrive.

mod aggregate;
mod types;

pub use aggregate::{aggregate, aggregate_with_cancel, pages};
pub use types::{NextPage, Page, PageSource, PaginationState};

#[cfg(test)]
mod tests;
