//! HTTP transport for the ODB API
//!
//! Every operation is a `POST /` carrying a JSON document, with the operation
//! selected by the `X-Amz-Target` header. Errors come back as a JSON body with
//! a `__type` code and a `message`.

use super::api::OdbApi;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Content type of the JSON protocol
pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// Prefix of the `X-Amz-Target` header
pub const TARGET_PREFIX: &str = "Odb";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", alias = "code")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// [`OdbApi`] over HTTP
#[derive(Debug)]
pub struct HttpOdbClient {
    http: HttpClient,
}

impl HttpOdbClient {
    /// Wrap a configured HTTP client; its base URL is the service endpoint
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    async fn send(
        &self,
        operation: &'static str,
        input: &Value,
    ) -> std::result::Result<Value, Failure> {
        let request = RequestConfig::new()
            .header("X-Amz-Target", format!("{TARGET_PREFIX}.{operation}"))
            .content_type(JSON_CONTENT_TYPE)
            .json(input.clone());

        let response = match self.http.post_with_config("/", request).await {
            Ok(response) => response,
            Err(Error::HttpStatus { status, body }) => {
                return Err(Failure {
                    error: service_error(status, &body),
                    status: Some(status),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let text = response.text().await.map_err(Error::from)?;
        if text.trim().is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&text).map_err(|e| Error::decode(operation, e.to_string()).into())
    }
}

/// A failed exchange and the HTTP status that carried it, if any
struct Failure {
    error: Error,
    status: Option<u16>,
}

impl Failure {
    /// Throttling-class codes on a 4xx status; 5xx statuses were already
    /// retried by the HTTP client
    fn retry_here(&self) -> bool {
        matches!(self.status, Some(status) if status < 500)
            && matches!(self.error, Error::Service { .. })
            && self.error.is_retryable()
    }
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        Self {
            error,
            status: None,
        }
    }
}

#[async_trait]
impl OdbApi for HttpOdbClient {
    async fn call(&self, operation: &'static str, input: Value) -> Result<Value> {
        let max_retries = self.http.config().max_retries;
        let mut attempt = 0;

        loop {
            match self.send(operation, &input).await {
                Ok(output) => {
                    debug!(operation, attempt, "call succeeded");
                    return Ok(output);
                }
                Err(failure) if failure.retry_here() && attempt < max_retries => {
                    let delay = self.http.calculate_backoff(attempt);
                    warn!(
                        "{} failed with {}, attempt {}/{}, retrying in {:?}",
                        operation,
                        failure.error,
                        attempt + 1,
                        max_retries + 1,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(failure) => return Err(failure.error),
            }
        }
    }
}

/// Turn an error response into a typed error
///
/// Falls back to [`Error::HttpStatus`] when the body carries no error code.
fn service_error(status: u16, body: &str) -> Error {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            code: Some(code),
            message,
        }) => Error::service(normalize_code(&code), message.unwrap_or_default()),
        _ => Error::http_status(status, body),
    }
}

/// Strip the namespace and any trailing URI from an error code
///
/// `com.amazonaws.odb#ResourceNotFoundException` and
/// `ResourceNotFoundException:http://internal/` both become
/// `ResourceNotFoundException`.
fn normalize_code(code: &str) -> &str {
    let code = code.rsplit('#').next().unwrap_or(code);
    code.split(':').next().unwrap_or(code)
}
