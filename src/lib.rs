// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]

//! # odb-inventory
//!
//! Read-only inventory of Oracle Database@AWS (ODB) resources.
//!
//! ## Features
//!
//! - **Data Sources**: DB nodes, DB servers, system shapes, GI versions,
//!   peering connections, VM clusters, Autonomous VM clusters and Exadata
//!   infrastructures
//! - **Complete Listings**: every page of a listing or an error, never a
//!   partial result
//! - **Forward-Compatible Enums**: unknown members are kept, not rejected
//! - **HTTP Client**: retries, backoff and client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use odb_inventory::{ClientConfig, DataSourceKind, ReadContext, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ClientConfig::load(None)?.build_client()?;
//!
//!     let state = DataSourceKind::DbNodes
//!         .read_json(
//!             &client,
//!             serde_json::json!({ "cloud_vm_cluster_id": "cvmc-123" }),
//!             &ReadContext::new(),
//!         )
//!         .await?;
//!     println!("{state}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Data Sources                         │
//! │  config → list / get → flatten → state                     │
//! └────────────────────────────────────────────────────────────┘
//!                │                          │
//! ┌──────────────┴─────────────┐ ┌──────────┴──────────────────┐
//! │        Pagination          │ │           ODB               │
//! │  PageSource → aggregate    │ │  Operation / ListPages      │
//! │  cancellation, ordering    │ │  OdbApi → HttpOdbClient     │
//! └────────────────────────────┘ └──────────┬──────────────────┘
//!                                           │
//!                                ┌──────────┴──────────────────┐
//!                                │  HTTP: retry, rate limit    │
//!                                └─────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client with retry and rate limiting
pub mod http;

/// Continuation-token pagination
pub mod pagination;

/// ODB service model and client
pub mod odb;

/// Inventory data sources
pub mod data_source;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ClientConfig;
pub use data_source::{DataSource, DataSourceKind, ReadContext};
pub use error::{Error, Result};
pub use odb::{HttpOdbClient, OdbApi};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
