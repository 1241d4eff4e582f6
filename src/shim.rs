// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Legacy request adapter
//!
//! Translates the three calling conventions of the old `request` surface
//! onto the [`Fetch`] primitive:
//!
//! - `request(url)` returning a readable stream -> [`Shim::request`]
//! - `request.get(url, cb)` -> [`Shim::get`] (the callback overload of the
//!   bare `request(url, cb)` call maps here too)
//! - `request.head(url, cb)` -> [`Shim::head`]
//!
//! The callback forms are thin spawning wrappers over [`Shim::fetch_get`]
//! and [`Shim::fetch_head`]; new code should call those directly and await.
//!
//! Every invocation is independent. There is no shared state, no ordering
//! between concurrent calls, and a failure in one call never affects another.

use std::sync::Arc;

use futures::StreamExt;
use reqwest::Method;

use crate::client::{Fetch, FetchClient};
use crate::error::Result;
use crate::response::ResponseMeta;
use crate::stream::BodyStream;

/// Request adapter over an injectable fetch primitive
///
/// Cheap to clone; clones share the underlying client. All entry points
/// must be called from within a tokio runtime.
pub struct Shim<F: Fetch + 'static = FetchClient> {
    fetcher: Arc<F>,
}

impl Shim<FetchClient> {
    /// Create a shim backed by a default [`FetchClient`]
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(FetchClient::new()?))
    }
}

impl<F: Fetch + 'static> Shim<F> {
    /// Create a shim over a custom fetch primitive
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
        }
    }

    /// Stream form: `request(url)`
    ///
    /// Returns a readable byte stream immediately; the HTTP request starts
    /// eagerly on a background task, independent of when the consumer begins
    /// reading. A fetch rejection or a mid-transfer body error surfaces as a
    /// single `Err` item on the stream; a bodyless response ends the stream
    /// with zero items.
    pub fn request(&self, url: &str) -> BodyStream {
        let (tx, stream) = BodyStream::channel();
        let fetcher = Arc::clone(&self.fetcher);
        let url = url.to_string();

        tokio::spawn(async move {
            match fetcher.fetch(Method::GET, &url).await {
                Ok(response) => {
                    let mut body = response.bytes_stream();
                    while let Some(chunk) = body.next().await {
                        match chunk {
                            Ok(bytes) => {
                                if tx.chunk(bytes).await.is_err() {
                                    tracing::debug!(%url, "stream consumer dropped mid-transfer");
                                    return;
                                }
                            }
                            Err(err) => {
                                tx.fail(err.into()).await;
                                return;
                            }
                        }
                    }
                }
                Err(err) => tx.fail(err).await,
            }
        });

        stream
    }

    /// Callback GET form: `request.get(url, cb)`
    ///
    /// The callback runs exactly once, with either the normalized descriptor
    /// and the fully materialized body text, or the transport failure.
    pub fn get<C>(&self, url: &str, callback: C)
    where
        C: FnOnce(Result<(ResponseMeta, String)>) + Send + 'static,
    {
        let shim = self.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            callback(shim.fetch_get(&url).await);
        });
    }

    /// Callback HEAD form: `request.head(url, cb)`
    ///
    /// The callback runs exactly once with the descriptor or the failure.
    /// No body is ever read.
    pub fn head<C>(&self, url: &str, callback: C)
    where
        C: FnOnce(Result<ResponseMeta>) + Send + 'static,
    {
        let shim = self.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            callback(shim.fetch_head(&url).await);
        });
    }

    /// GET a URL, await the descriptor and the body as text
    ///
    /// Any completed exchange is `Ok`, 4xx/5xx included; only transport
    /// failures error. Body text is decoded per the response charset, with
    /// lossy fallback.
    pub async fn fetch_get(&self, url: &str) -> Result<(ResponseMeta, String)> {
        let response = self.fetcher.fetch(Method::GET, url).await?;
        let meta = ResponseMeta::from_response(&response);
        let body = response.text().await?;
        Ok((meta, body))
    }

    /// HEAD a URL, await the descriptor only
    pub async fn fetch_head(&self, url: &str) -> Result<ResponseMeta> {
        let response = self.fetcher.fetch(Method::HEAD, url).await?;
        Ok(ResponseMeta::from_response(&response))
    }
}

impl<F: Fetch + 'static> Clone for Shim<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}
