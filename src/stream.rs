// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Streaming response body
//!
//! [`BodyStream`] is the pass-through pipe handed back by the stream form of
//! the shim: the producer side forwards body chunks from an in-flight fetch,
//! the consumer side is a plain `futures::Stream` of byte chunks.
//!
//! A transport failure at any point surfaces as exactly one `Err` item,
//! after which the stream ends. A bodyless response ends the stream with
//! zero items.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;

use crate::error::{Error, Result};

/// Chunks buffered between fetch resolution and consumer readiness
const CHANNEL_CAPACITY: usize = 16;

/// Readable byte stream of a response body
pub struct BodyStream {
    rx: mpsc::Receiver<Result<Bytes>>,
}

impl BodyStream {
    /// Create a connected producer/consumer pair
    pub(crate) fn channel() -> (BodySender, BodyStream) {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        (BodySender { tx }, BodyStream { rx })
    }

    /// Drain the stream into a single buffer, or the first error
    pub async fn collect(mut self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }
}

impl Stream for BodyStream {
    type Item = Result<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl std::fmt::Debug for BodyStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyStream").finish_non_exhaustive()
    }
}

/// Producer half feeding a [`BodyStream`]
pub(crate) struct BodySender {
    tx: mpsc::Sender<Result<Bytes>>,
}

impl BodySender {
    /// Forward one body chunk; errors when the consumer is gone
    pub(crate) async fn chunk(&self, bytes: Bytes) -> Result<()> {
        self.tx.send(Ok(bytes)).await.map_err(|_| Error::Closed)
    }

    /// Surface a failure to the consumer, then the stream ends
    pub(crate) async fn fail(&self, err: Error) {
        // Nothing to do if the consumer already went away
        let _ = self.tx.send(Err(err)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chunks_arrive_in_order() {
        let (tx, stream) = BodyStream::channel();
        tokio::spawn(async move {
            tx.chunk(Bytes::from_static(b"hel")).await.unwrap();
            tx.chunk(Bytes::from_static(b"lo")).await.unwrap();
        });

        assert_eq!(stream.collect().await.unwrap(), Bytes::from_static(b"hello"));
    }

    #[tokio::test]
    async fn test_empty_body_ends_with_zero_items() {
        let (tx, mut stream) = BodyStream::channel();
        drop(tx);
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_error_then_end() {
        let (tx, mut stream) = BodyStream::channel();
        tokio::spawn(async move {
            tx.fail(Error::Closed).await;
        });

        assert!(matches!(stream.next().await, Some(Err(Error::Closed))));
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn test_pending_until_producer_sends() {
        let (_tx, mut stream) = BodyStream::channel();
        let mut task = tokio_test::task::spawn(futures::future::pending::<()>());
        task.enter(|cx, _| {
            assert!(Pin::new(&mut stream).poll_next(cx).is_pending());
        });
    }

    #[tokio::test]
    async fn test_sender_observes_dropped_consumer() {
        let (tx, stream) = BodyStream::channel();
        drop(stream);
        let err = tx.chunk(Bytes::from_static(b"x")).await.unwrap_err();
        assert!(matches!(err, Error::Closed));
    }
}
