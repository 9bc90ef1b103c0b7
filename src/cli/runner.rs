//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ClientConfig;
use crate::data_source::{DataSourceKind, ReadContext};
use crate::error::{Error, Result, ResultExt};
use crate::types::JsonValue;
use serde_json::json;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Read {
                data_source,
                input_json,
                input,
                timeout_secs,
            } => {
                self.read(
                    *data_source,
                    input_json.as_deref(),
                    input.as_deref(),
                    *timeout_secs,
                )
                .await
            }
            Commands::List => self.list(),
        }
    }

    /// Load the data source config
    fn load_input(inline: Option<&str>, path: Option<&Path>) -> Result<JsonValue> {
        // Inline config takes precedence
        if let Some(json_str) = inline {
            return serde_json::from_str(json_str)
                .map_err(|e| Error::config(format!("Invalid input JSON: {e}")));
        }

        if let Some(path) = path {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            return serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid input JSON: {e}")));
        }

        Ok(json!({}))
    }

    /// Read one data source and print its state
    async fn read(
        &self,
        kind: DataSourceKind,
        input_json: Option<&str>,
        input: Option<&Path>,
        timeout_secs: Option<u64>,
    ) -> Result<()> {
        let input = Self::load_input(input_json, input)?;
        let config = ClientConfig::load(self.cli.config.as_deref())?;
        let client = config.build_client()?;

        let cancel = CancellationToken::new();
        let watchers = CancelWatchers::spawn(&cancel, timeout_secs.map(Duration::from_secs));
        let ctx = ReadContext::with_cancel(cancel);

        debug!(data_source = %kind, "reading");
        let result = kind.read_json(&client, input, &ctx).await;
        watchers.stop();

        self.output(&result?)
    }

    /// List available data sources
    fn list(&self) -> Result<()> {
        let sources: Vec<JsonValue> = DataSourceKind::ALL
            .iter()
            .map(|kind| {
                json!({
                    "name": kind.name(),
                    "description": kind.description(),
                })
            })
            .collect();

        self.output(&json!({ "data_sources": sources }))
    }

    fn output(&self, value: &JsonValue) -> Result<()> {
        println!("{}", self.cli.format.render(value)?);
        Ok(())
    }
}

/// Background tasks that cancel a read on Ctrl-C or when its deadline passes
struct CancelWatchers {
    tasks: Vec<tokio::task::JoinHandle<()>>,
}

impl CancelWatchers {
    fn spawn(cancel: &CancellationToken, timeout: Option<Duration>) -> Self {
        let mut tasks = Vec::new();

        let token = cancel.clone();
        tasks.push(tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, cancelling read");
                token.cancel();
            }
        }));

        if let Some(timeout) = timeout {
            let token = cancel.clone();
            tasks.push(tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                warn!("read exceeded {:?}, cancelling", timeout);
                token.cancel();
            }));
        }

        Self { tasks }
    }

    fn stop(self) {
        for task in self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_input_defaults_to_empty_object() {
        assert_eq!(Runner::load_input(None, None).unwrap(), json!({}));
    }

    #[test]
    fn test_inline_input_takes_precedence() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"shape": "from-file"}}"#).unwrap();

        let value = Runner::load_input(Some(r#"{"shape": "inline"}"#), Some(file.path())).unwrap();
        assert_eq!(value, json!({"shape": "inline"}));

        let value = Runner::load_input(None, Some(file.path())).unwrap();
        assert_eq!(value, json!({"shape": "from-file"}));
    }

    #[test]
    fn test_missing_input_file() {
        let err = Runner::load_input(None, Some(Path::new("/nonexistent/input.json"))).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Failed to read input file /nonexistent/input.json: IO error"));
    }

    #[test]
    fn test_invalid_input_json() {
        let err = Runner::load_input(Some("{not json"), None).unwrap_err();
        assert!(err.to_string().contains("Invalid input JSON"));
    }

    #[tokio::test]
    async fn test_deadline_cancels_token() {
        let token = CancellationToken::new();
        let watchers = CancelWatchers::spawn(&token, Some(Duration::from_millis(10)));

        tokio::time::timeout(Duration::from_secs(2), token.cancelled())
            .await
            .unwrap();
        watchers.stop();
        assert!(token.is_cancelled());
    }
}
