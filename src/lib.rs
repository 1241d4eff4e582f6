// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # Fetchback - Legacy Request Shim
//!
//! A compatibility layer exposing the old callback/stream `request` surface
//! on top of a modern future-based fetch client. Pure API translation:
//! no retries, no caching, no connection management beyond what the
//! underlying client already does.
//!
//! ## Calling conventions
//!
//! - Stream form: [`Shim::request`] returns a readable byte stream
//!   synchronously; the transfer starts eagerly.
//! - Callback forms: [`Shim::get`] and [`Shim::head`] invoke their callback
//!   exactly once with either a normalized [`ResponseMeta`] (plus body text
//!   for GET) or the transport error. Non-2xx statuses are success.
//! - Async forms: [`Shim::fetch_get`] and [`Shim::fetch_head`] are what new
//!   code should call.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fetchback::Shim;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let shim = Shim::new()?;
//!
//!     let (meta, body) = shim.fetch_get("https://example.com").await?;
//!     println!("{} {}", meta.status_code, meta.status_message);
//!     println!("{}", body);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod response;
pub mod shim;
pub mod stream;

// Re-exports for convenience

pub use client::{Fetch, FetchClient, FetchClientConfig, DEFAULT_USER_AGENT};
pub use error::{Error, Result};
pub use response::{normalize_headers, ResponseMeta};
pub use shim::Shim;
pub use stream::BodyStream;

/// Fetchback version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
