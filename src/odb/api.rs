//! ODB API seam
//!
//! [`OdbApi`] is the one place the crate talks to the remote service: a JSON
//! request in, a JSON response out. Typed operations sit on top of it.

use crate::error::{Error, Result};
use crate::pagination::{Page, PageSource};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use tracing::trace;

/// Raw access to the ODB API
#[async_trait]
pub trait OdbApi: Send + Sync {
    /// Invoke `operation` (e.g. `ListDbNodes`) with a JSON input document
    async fn call(&self, operation: &'static str, input: Value) -> Result<Value>;
}

/// A typed remote operation
pub trait Operation: Send + Sync + 'static {
    /// Wire name of the operation
    const NAME: &'static str;
    /// Request shape
    type Input: Serialize + Clone + Send + Sync;
    /// Response shape
    type Output: DeserializeOwned + Send;
}

/// An operation that lists with a continuation token
pub trait ListOperation: Operation {
    /// One record of the listing
    type Item: Send;

    /// Point the request at the page starting from `token`
    fn set_next_token(input: &mut Self::Input, token: Option<String>);

    /// Split a response into its records and continuation token
    fn into_page(output: Self::Output) -> Page<Self::Item>;
}

/// Invoke a typed operation
pub async fn invoke<Op, A>(api: &A, input: &Op::Input) -> Result<Op::Output>
where
    Op: Operation,
    A: OdbApi + ?Sized,
{
    let body = serde_json::to_value(input)?;
    trace!(operation = Op::NAME, input = %body, "invoking");

    let response = api.call(Op::NAME, body).await?;
    serde_json::from_value(response).map_err(|e| Error::decode(Op::NAME, e.to_string()))
}

/// Adapts a list operation on an [`OdbApi`] into a [`PageSource`]
pub struct ListPages<'a, Op, A: ?Sized> {
    api: &'a A,
    _op: PhantomData<fn() -> Op>,
}

impl<'a, Op, A: ?Sized> ListPages<'a, Op, A> {
    /// Create a page source for `Op` over `api`
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            _op: PhantomData,
        }
    }
}

#[async_trait]
impl<'a, Op, A> PageSource for ListPages<'a, Op, A>
where
    Op: ListOperation,
    A: OdbApi + ?Sized,
{
    type Request = Op::Input;
    type Item = Op::Item;

    fn operation(&self) -> &str {
        Op::NAME
    }

    async fn fetch_page(
        &self,
        request: &Op::Input,
        token: Option<&str>,
    ) -> Result<Page<Op::Item>> {
        // The caller's filter stays untouched, the token goes on a copy
        let mut input = request.clone();
        Op::set_next_token(&mut input, token.map(String::from));

        let output = invoke::<Op, A>(self.api, &input).await?;
        Ok(Op::into_page(output))
    }
}
