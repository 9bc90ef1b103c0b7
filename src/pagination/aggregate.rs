//! Page aggregation
//!
//! Drives a [`PageSource`] to completion, either as a stream of pages or as
//! one ordered collection of records.

use super::types::{Page, PageSource, PaginationState};
use crate::error::{Error, Result};
use futures::stream::{self, Stream, TryStreamExt};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Stream the pages of a listing in server order.
///
/// The cancellation token is checked before every fetch. The stream ends
/// after the first page without a continuation token, or after the first
/// error.
pub fn pages<'a, S>(
    source: &'a S,
    request: &'a S::Request,
    cancel: &'a CancellationToken,
) -> impl Stream<Item = Result<Page<S::Item>>> + Send + 'a
where
    S: PageSource + ?Sized,
{
    stream::try_unfold(PaginationState::new(), move |mut state| async move {
        if state.done {
            return Ok(None);
        }
        if cancel.is_cancelled() {
            return Err(Error::cancelled(source.operation()));
        }

        let page = source.fetch_page(request, state.token.as_deref()).await?;
        state.advance(&page);

        debug!(
            operation = source.operation(),
            page = state.pages_fetched,
            records = page.len(),
            more = !state.done,
            "fetched page"
        );

        Ok(Some((page, state)))
    })
}

/// Fetch every page and return all records in arrival order.
///
/// Either the full listing is returned or the first error is; records
/// gathered before a failure are dropped.
pub async fn aggregate_with_cancel<S>(
    source: &S,
    request: &S::Request,
    cancel: &CancellationToken,
) -> Result<Vec<S::Item>>
where
    S: PageSource + ?Sized,
{
    let start = Instant::now();
    let mut items = Vec::new();
    let mut page_count = 0usize;

    let mut stream = std::pin::pin!(pages(source, request, cancel));
    while let Some(page) = stream.try_next().await? {
        page_count += 1;
        items.extend(page.items);
    }

    info!(
        operation = source.operation(),
        records = items.len(),
        pages = page_count,
        duration_ms = start.elapsed().as_millis() as u64,
        "listing complete"
    );

    Ok(items)
}

/// [`aggregate_with_cancel`] without a cancellation signal
pub async fn aggregate<S>(source: &S, request: &S::Request) -> Result<Vec<S::Item>>
where
    S: PageSource + ?Sized,
{
    aggregate_with_cancel(source, request, &CancellationToken::new()).await
}
