//! Client for the Ghent University Academic Bibliography.
//!
//! A thin wrapper around the public Biblio REST API at
//! <https://biblio.ugent.be/>: build a URL, issue one GET request, decode the
//! JSON (or newline-delimited JSON) body, and normalize field names by
//! stripping leading underscores and replacing hyphens with underscores.
//!
//! # Features
//!
//! - **Six lookups**: by publication id, person, organisation (optionally per
//!   year), project, group of people, and free-text search
//! - **Validated inputs**: non-integer ids and non-digit years are rejected
//!   before any network traffic
//! - **Normalized records**: every decoded object has its keys reshaped
//!   recursively, so `_id` is addressable as `id`
//!
//! # Example
//!
//! ```no_run
//! use ugent_biblio::{BiblioClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BiblioClient::new(Config::default())?;
//!
//!     if let Some(publication) = client.publication("5731482").await? {
//!         println!("{:?}", publication.title());
//!     }
//!
//!     let hits = client.search(Some("informatics")).await?;
//!     println!("{} matching publications", hits.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod reshape;
pub mod response;

pub use client::BiblioClient;
pub use config::Config;
pub use error::{ClientError, ClientResult};
pub use models::{Payload, Record};
pub use request::ApiRequest;
pub use reshape::reshape_keys;
