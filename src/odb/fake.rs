//! Scripted in-memory [`OdbApi`] for unit tests

use super::api::OdbApi;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Replays queued responses per operation and records every call
#[derive(Debug, Default)]
pub(crate) struct FakeOdbApi {
    responses: Mutex<HashMap<String, VecDeque<Result<Value>>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl FakeOdbApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response for `operation`
    pub(crate) fn respond(self, operation: &str, output: Value) -> Self {
        self.push(operation, Ok(output))
    }

    /// Queue a failure for `operation`
    pub(crate) fn fail(self, operation: &str, error: Error) -> Self {
        self.push(operation, Err(error))
    }

    fn push(self, operation: &str, response: Result<Value>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// Every call in order, as (operation, input document)
    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// Inputs sent to one operation
    pub(crate) fn inputs(&self, operation: &str) -> Vec<Value> {
        self.calls()
            .into_iter()
            .filter(|(op, _)| op == operation)
            .map(|(_, input)| input)
            .collect()
    }
}

#[async_trait]
impl OdbApi for FakeOdbApi {
    async fn call(&self, operation: &'static str, input: Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), input));

        self.responses
            .lock()
            .unwrap()
            .get_mut(operation)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(Error::Other(format!("unexpected call to {operation}"))))
    }
}
