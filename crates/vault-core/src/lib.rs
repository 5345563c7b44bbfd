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

//! Pure client logic extracted from the vault views so it can be tested
//! without a backend.
//! Layout: search.rs (name filter), format.rs (durations, dates, labels),
//! profile.rs (account form), create.rs (playlist/category name checks),
//! playback.rs (player seam and play-all), notice.rs (user-facing outcomes).

pub mod create;
pub mod format;
pub mod notice;
pub mod playback;
pub mod profile;
pub mod search;

pub use notice::{Notice, Severity};
