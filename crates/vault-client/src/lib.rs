#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Async client for the audio vault HTTP API.
//!
//! Layout: config.rs (connection settings), error.rs (failure taxonomy),
//! cache.rs (path-keyed response cache), client.rs (endpoints),
//! upload.rs (validated multipart upload and playlist association).

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod upload;

pub use cache::QueryCache;
pub use client::{ApiClient, Mutation, PlaylistSummary, ProfileStats};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use upload::{UploadOutcome, UploadRequest};
