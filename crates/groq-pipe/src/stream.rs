//! Lazy line splitter over a streaming response body

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::stream::{BoxStream, Stream, StreamExt, TryStreamExt};

use crate::error::{PipeError, Result};

/// Lazy, forward-only, single-pass sequence of raw response lines.
///
/// No SSE parsing happens here: each item is one raw line of the provider's
/// streamed body with the trailing `\n` (or `\r\n`) removed, blank separator
/// lines included. Iterating to the end drains the underlying connection;
/// dropping the value early drops the response and releases the connection,
/// so an abandoned stream never leaks a socket.
pub struct ResponseLines {
    /// `None` once the body is exhausted or has failed
    inner: Option<BoxStream<'static, Result<Bytes>>>,
    buf: BytesMut,
}

impl ResponseLines {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        Self::from_stream(response.bytes_stream().map_err(PipeError::unhandled))
    }

    pub(crate) fn from_stream(stream: impl Stream<Item = Result<Bytes>> + Send + 'static) -> Self {
        Self {
            inner: Some(stream.boxed()),
            buf: BytesMut::new(),
        }
    }

    /// Pop one complete line off the front of the buffer, if there is one.
    fn take_line(&mut self) -> Option<Bytes> {
        let pos = self.buf.iter().position(|&b| b == b'\n')?;
        let mut line = self.buf.split_to(pos + 1);
        line.truncate(pos);
        if line.last() == Some(&b'\r') {
            line.truncate(line.len() - 1);
        }
        Some(line.freeze())
    }
}

impl Stream for ResponseLines {
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(line) = this.take_line() {
                return Poll::Ready(Some(Ok(line)));
            }

            let Some(inner) = this.inner.as_mut() else {
                // Body exhausted: flush an unterminated tail, then end.
                if this.buf.is_empty() {
                    return Poll::Ready(None);
                }
                return Poll::Ready(Some(Ok(this.buf.split().freeze())));
            };

            match inner.poll_next_unpin(cx) {
                Poll::Ready(Some(Ok(chunk))) => this.buf.extend_from_slice(&chunk),
                Poll::Ready(Some(Err(err))) => {
                    this.inner = None;
                    this.buf.clear();
                    return Poll::Ready(Some(Err(err)));
                }
                Poll::Ready(None) => this.inner = None,
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl std::fmt::Debug for ResponseLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseLines")
            .field("buffered", &self.buf.len())
            .field("exhausted", &self.inner.is_none())
            .finish()
    }
}
