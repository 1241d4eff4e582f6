// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the fetchback shim
//!
//! The legacy `request` contract knows a single failure kind: the transport
//! failed before the exchange completed. Completed exchanges are never errors
//! here, whatever their status code.

use thiserror::Error;

/// Result type alias for fetchback operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the fetchback shim
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure: DNS, connection, aborted transfer, body read
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// URL parsing failed before any request was issued
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The consumer of a body stream went away mid-transfer
    #[error("Stream consumer dropped")]
    Closed,
}

impl Error {
    /// True when the failure happened at the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Fetch(_))
    }

    /// True when the URL never parsed and no request was sent
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, Error::Url(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_error_classification() {
        let err = Error::from(url::Url::parse("::::").unwrap_err());
        assert!(err.is_invalid_url());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_display_formats() {
        let err = Error::from(url::Url::parse("::::").unwrap_err());
        assert!(err.to_string().starts_with("Invalid URL:"));
        assert_eq!(Error::Closed.to_string(), "Stream consumer dropped");
    }
}
