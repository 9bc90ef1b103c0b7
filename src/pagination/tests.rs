//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::Mutex;
use test_case::test_case;
use tokio_util::sync::CancellationToken;

/// Page source replaying a fixed script and recording every call
struct ScriptedSource {
    script: Mutex<VecDeque<Result<Page<u32>>>>,
    calls: Mutex<Vec<(String, Option<String>)>>,
    cancel_after_first: Option<CancellationToken>,
}

impl ScriptedSource {
    fn new(script: Vec<Result<Page<u32>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(Vec::new()),
            cancel_after_first: None,
        }
    }

    /// Build a script of pages with the given sizes, numbering records 0..
    fn with_sizes(sizes: &[usize]) -> Self {
        let mut next = 0u32;
        let script = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let items = (next..next + size as u32).collect();
                next += size as u32;
                let token = (i + 1 < sizes.len()).then(|| format!("token-{}", i + 1));
                Ok(Page::new(items, token))
            })
            .collect();
        Self::new(script)
    }

    fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    type Request = String;
    type Item = u32;

    fn operation(&self) -> &str {
        "ListNumbers"
    }

    async fn fetch_page(&self, request: &String, token: Option<&str>) -> Result<Page<u32>> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), token.map(String::from)));

        if let Some(cancel) = &self.cancel_after_first {
            cancel.cancel();
        }

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("script exhausted".to_string())))
    }
}

// ============================================================================
// NextPage / Page Tests
// ============================================================================

#[test]
fn test_next_page_from_token() {
    let next = NextPage::from_token(Some("abc".to_string()));
    assert!(!next.is_done());
    assert_eq!(
        next,
        NextPage::Continue {
            token: "abc".to_string()
        }
    );

    let next = NextPage::from_token(None);
    assert!(next.is_done());
}

#[test]
fn test_empty_token_still_continues() {
    let page = Page::new(vec![1u32], Some(String::new()));
    assert_eq!(
        page.next_page(),
        NextPage::Continue {
            token: String::new()
        }
    );
}

#[test]
fn test_page_helpers() {
    let page = Page::last(Vec::<u32>::new());
    assert!(page.is_empty());
    assert_eq!(page.len(), 0);
    assert!(page.next_page().is_done());
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert!(state.token.is_none());
    assert_eq!(state.pages_fetched, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(!state.done);
}

#[test]
fn test_pagination_state_advance() {
    let mut state = PaginationState::new();

    state.advance(&Page::new(vec![1u32, 2], Some("t1".to_string())));
    assert_eq!(state.token, Some("t1".to_string()));
    assert_eq!(state.pages_fetched, 1);
    assert_eq!(state.total_fetched, 2);
    assert!(!state.done);

    state.advance(&Page::last(vec![3u32]));
    assert!(state.token.is_none());
    assert_eq!(state.pages_fetched, 2);
    assert_eq!(state.total_fetched, 3);
    assert!(state.done);
}

// ============================================================================
// Aggregation Tests
// ============================================================================

#[tokio::test]
async fn test_aggregate_keeps_cross_page_order() {
    let source = ScriptedSource::new(vec![
        Ok(Page::new(vec![1, 2], Some("t1".to_string()))),
        Ok(Page::new(vec![], Some("t2".to_string()))),
        Ok(Page::last(vec![3, 4])),
    ]);

    let items = aggregate(&source, &"cluster-1".to_string()).await.unwrap();
    assert_eq!(items, vec![1, 2, 3, 4]);

    assert_eq!(
        source.calls(),
        vec![
            ("cluster-1".to_string(), None),
            ("cluster-1".to_string(), Some("t1".to_string())),
            ("cluster-1".to_string(), Some("t2".to_string())),
        ]
    );
}

#[test_case(&[3] ; "single page")]
#[test_case(&[0] ; "single empty page")]
#[test_case(&[2, 0, 2] ; "empty page in the middle")]
#[test_case(&[0, 0, 5] ; "leading empty pages")]
#[test_case(&[4, 4, 4, 1] ; "many pages")]
#[tokio::test]
async fn test_aggregate_returns_every_record(sizes: &[usize]) {
    let source = ScriptedSource::with_sizes(sizes);
    let total: usize = sizes.iter().sum();

    let items = aggregate(&source, &String::new()).await.unwrap();

    assert_eq!(items, (0..total as u32).collect::<Vec<_>>());
    assert_eq!(source.calls().len(), sizes.len());
}

#[tokio::test]
async fn test_aggregate_failure_discards_records() {
    let source = ScriptedSource::new(vec![
        Ok(Page::new(vec![1, 2], Some("t1".to_string()))),
        Err(Error::service("ThrottlingException", "Rate exceeded")),
        Ok(Page::last(vec![3])),
    ]);

    let err = aggregate(&source, &String::new()).await.unwrap_err();

    assert!(matches!(err, Error::Service { ref code, .. } if code == "ThrottlingException"));
    // Nothing after the failed page is requested
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn test_aggregate_first_page_failure() {
    let source = ScriptedSource::new(vec![Err(Error::not_found("no cluster"))]);

    let err = aggregate(&source, &String::new()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_aggregate_cancelled_before_first_fetch() {
    let source = ScriptedSource::with_sizes(&[1, 1]);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = aggregate_with_cancel(&source, &String::new(), &cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert!(err.to_string().contains("ListNumbers"));
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn test_aggregate_cancelled_between_pages() {
    let cancel = CancellationToken::new();
    let mut source = ScriptedSource::with_sizes(&[2, 2, 2]);
    source.cancel_after_first = Some(cancel.clone());

    let err = aggregate_with_cancel(&source, &String::new(), &cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    // The in-flight fetch completes, no further fetch is started
    assert_eq!(source.calls().len(), 1);
}

#[tokio::test]
async fn test_pages_stream_yields_pages_in_order() {
    let source = ScriptedSource::with_sizes(&[2, 1]);
    let cancel = CancellationToken::new();
    let request = String::new();

    let collected: Vec<Page<u32>> = pages(&source, &request, &cancel)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(
        collected,
        vec![
            Page::new(vec![0, 1], Some("token-1".to_string())),
            Page::last(vec![2]),
        ]
    );
}

#[tokio::test]
async fn test_pages_stream_stops_after_error() {
    let source = ScriptedSource::new(vec![
        Ok(Page::new(vec![1], Some("t1".to_string()))),
        Err(Error::Other("boom".to_string())),
    ]);
    let cancel = CancellationToken::new();
    let request = String::new();

    let results: Vec<Result<Page<u32>>> =
        futures::StreamExt::collect(pages(&source, &request, &cancel)).await;

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}
