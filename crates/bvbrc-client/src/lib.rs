//! BV-BRC data API client
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Builds RQL (Resource Query Language) queries and runs them against the
//! BV-BRC data warehouse collections ("cores").
//!
//! - [`rql`]: pure filter builder (`eq`, `gt`, `lt`, `in_`, `and`, `or`, ...)
//! - [`runner`]: option validation, request assembly and execution
//! - [`context`]: base URL, headers and the shared HTTP client
//! - [`resources`]: known cores and per-core lookups
//! - [`settings`]: optional process-wide configuration and token loading
//!
//! # Example
//!
//! ```no_run
//! use bvbrc_client::rql::{and, eq, gt};
//! use bvbrc_client::{BvbrcClient, ClientConfig, Core, QueryOptions};
//!
//! # async fn example() -> bvbrc_client::Result<()> {
//! let client = BvbrcClient::from_config(&ClientConfig::new())?;
//!
//! let features = client
//!     .resource(Core::GenomeFeature)
//!     .query(
//!         and([eq("genome_id", "83332.12"), gt("start", 100)]),
//!         &QueryOptions::new().select(["feature_id", "gene"]).limit(50),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod context;
pub mod endpoints;
pub mod error;
pub mod options;
pub mod resources;
pub mod rql;
pub mod runner;
pub mod settings;

// Re-export commonly used types
pub use client::{query, BvbrcClient};
pub use config::ClientConfig;
pub use context::ExecutionContext;
pub use error::{ClientError, Result};
pub use options::QueryOptions;
pub use resources::{Core, Resource};
pub use rql::Fragment;
pub use runner::{assemble_body, run, run_as};
