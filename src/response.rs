// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Normalized response descriptor
//!
//! Legacy `request` callers expect `{statusCode, statusMessage, headers}`
//! with lower-cased header names. [`ResponseMeta`] is that shape, built once
//! per completed exchange and immutable afterwards.

use std::collections::HashMap;

use reqwest::header::HeaderMap;
use serde::Serialize;

/// Normalized response descriptor handed to legacy-style callers
#[derive(Debug, Clone, Serialize)]
pub struct ResponseMeta {
    /// HTTP status code
    pub status_code: u16,
    /// Canonical reason phrase, empty when unknown
    pub status_message: String,
    /// Header names lower-cased, last write wins on duplicates
    pub headers: HashMap<String, String>,
}

impl ResponseMeta {
    /// Project a raw fetch response into the legacy descriptor shape
    pub fn from_response(response: &reqwest::Response) -> Self {
        Self {
            status_code: response.status().as_u16(),
            status_message: response
                .status()
                .canonical_reason()
                .unwrap_or("")
                .to_string(),
            headers: normalize_headers(response.headers()),
        }
    }

    /// Get a header value by name (any casing)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get content length
    pub fn content_length(&self) -> Option<usize> {
        self.header("content-length").and_then(|v| v.parse().ok())
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Flatten a header map into lower-cased name/value strings
///
/// Duplicate names collapse to the last value seen. Values that are not
/// valid UTF-8 are converted lossily rather than dropped.
pub fn normalize_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut out = HashMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        out.insert(
            name.as_str().to_ascii_lowercase(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    #[test]
    fn test_normalize_lowercases_names() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-test"),
            HeaderValue::from_static("1"),
        );
        headers.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("text/plain"),
        );

        let out = normalize_headers(&headers);
        assert_eq!(out.get("x-test").map(String::as_str), Some("1"));
        assert_eq!(out.get("content-type").map(String::as_str), Some("text/plain"));
    }

    #[test]
    fn test_normalize_duplicate_last_wins() {
        let mut headers = HeaderMap::new();
        headers.append(
            HeaderName::from_static("x-dup"),
            HeaderValue::from_static("first"),
        );
        headers.append(
            HeaderName::from_static("x-dup"),
            HeaderValue::from_static("second"),
        );

        let out = normalize_headers(&headers);
        assert_eq!(out.get("x-dup").map(String::as_str), Some("second"));
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_headers(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn test_header_lookup_any_casing() {
        let meta = ResponseMeta {
            status_code: 200,
            status_message: "OK".to_string(),
            headers: HashMap::from([("x-test".to_string(), "1".to_string())]),
        };
        assert_eq!(meta.header("X-Test"), Some("1"));
        assert_eq!(meta.header("x-test"), Some("1"));
        assert_eq!(meta.header("x-missing"), None);
        assert!(meta.is_success());
    }

    #[test]
    fn test_serializes_to_legacy_shape() {
        let meta = ResponseMeta {
            status_code: 404,
            status_message: "Not Found".to_string(),
            headers: HashMap::new(),
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["status_code"], 404);
        assert_eq!(json["status_message"], "Not Found");
    }
}
