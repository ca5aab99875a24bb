/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::Write;
use std::io;

use http::Version;
use log::{debug, warn};

use super::ChunkedStreamError;
use crate::{ResponseHead, ResponseSink, StreamingCapability};

const TERMINAL_FRAME: &[u8] = b"0\r\n\r\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChunkedStreamState {
    Idle,
    Streaming,
    Closed,
}

/// Writes one response body using chunked transfer-encoding.
///
/// The lifecycle is `begin_stream`, any number of `write_chunk`, then `end_stream`.
/// Every `write_chunk` call is sent as exactly one frame and flushed. A transport
/// error closes the writer, as a chunked body can not be resumed.
pub struct ChunkedResponseWriter<'a, S: ?Sized> {
    sink: &'a mut S,
    capability: StreamingCapability,
    state: ChunkedStreamState,
    frame_header: String,
    chunks: u64,
    body_bytes: u64,
}

impl<'a, S> ChunkedResponseWriter<'a, S>
where
    S: ResponseSink + ?Sized,
{
    pub fn new(sink: &'a mut S, capability: StreamingCapability) -> Self {
        ChunkedResponseWriter {
            sink,
            capability,
            state: ChunkedStreamState::Idle,
            frame_header: String::with_capacity(16),
            chunks: 0,
            body_bytes: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> ChunkedStreamState {
        self.state
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.state == ChunkedStreamState::Closed
    }

    pub fn chunks_written(&self) -> u64 {
        self.chunks
    }

    pub fn body_bytes_written(&self) -> u64 {
        self.body_bytes
    }

    /// Send the status line and the header block.
    ///
    /// The capability and the HTTP version are checked before anything reaches
    /// the sink, and `Transfer-Encoding: chunked` is added to the head if missing.
    pub async fn begin_stream(&mut self, head: &mut ResponseHead) -> Result<(), ChunkedStreamError> {
        self.capability.must_support_streaming()?;
        // chunked transfer coding only exists in HTTP/1.1
        if head.version() != Version::HTTP_11 {
            return Err(ChunkedStreamError::UnsupportedTransport);
        }
        if self.state != ChunkedStreamState::Idle {
            return Err(ChunkedStreamError::AlreadyBegun);
        }

        head.set_chunked();
        if let Err(e) = self.send_head(head).await {
            return Err(self.poison(e));
        }
        self.state = ChunkedStreamState::Streaming;
        Ok(())
    }

    pub async fn write_chunk(&mut self, data: &[u8]) -> Result<(), ChunkedStreamError> {
        self.check_streaming()?;

        self.frame_header.clear();
        let _ = write!(&mut self.frame_header, "{:x}\r\n", data.len());
        if let Err(e) = self.send_frame(data).await {
            return Err(self.poison(e));
        }
        self.chunks += 1;
        self.body_bytes += data.len() as u64;
        Ok(())
    }

    pub async fn end_stream(&mut self) -> Result<(), ChunkedStreamError> {
        self.check_streaming()?;

        if let Err(e) = self.send_terminal().await {
            return Err(self.poison(e));
        }
        self.state = ChunkedStreamState::Closed;
        debug!(
            "chunked stream finished after {} chunks with {} body bytes",
            self.chunks, self.body_bytes
        );
        Ok(())
    }

    fn check_streaming(&self) -> Result<(), ChunkedStreamError> {
        match self.state {
            ChunkedStreamState::Idle => Err(ChunkedStreamError::StreamNotBegun),
            ChunkedStreamState::Streaming => Ok(()),
            ChunkedStreamState::Closed => Err(ChunkedStreamError::StreamClosed),
        }
    }

    async fn send_head(&mut self, head: &ResponseHead) -> io::Result<()> {
        self.sink.send_status_no_length(head).await?;
        self.sink.send_header().await?;
        self.sink.flush().await
    }

    async fn send_frame(&mut self, data: &[u8]) -> io::Result<()> {
        self.sink.write(self.frame_header.as_bytes()).await?;
        self.sink.write(data).await?;
        self.sink.write(b"\r\n").await?;
        self.sink.flush().await
    }

    async fn send_terminal(&mut self) -> io::Result<()> {
        self.sink.write(TERMINAL_FRAME).await?;
        self.sink.flush().await
    }

    fn poison(&mut self, e: io::Error) -> ChunkedStreamError {
        warn!("chunked stream aborted after {} chunks: {e}", self.chunks);
        self.state = ChunkedStreamState::Closed;
        ChunkedStreamError::WriteFailed(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HttpResponseSink;

    const CHUNKED_HEAD: &[u8] =
        b"HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\nConnection: Keep-Alive\r\n\r\n";

    fn body_after_head(wire: &[u8]) -> &[u8] {
        assert!(wire.starts_with(CHUNKED_HEAD));
        &wire[CHUNKED_HEAD.len()..]
    }

    #[tokio::test]
    async fn three_chunks_with_empty() {
        let mut sink = HttpResponseSink::new(Vec::new());
        let mut head = ResponseHead::ok(Version::HTTP_11, false);

        let mut writer = ChunkedResponseWriter::new(&mut sink, StreamingCapability::supported());
        writer.begin_stream(&mut head).await.unwrap();
        let chunks: [&[u8]; 3] = [b"a", b"bb", b""];
        for data in chunks {
            writer.write_chunk(data).await.unwrap();
        }
        writer.end_stream().await.unwrap();
        assert!(writer.finished());
        assert_eq!(writer.chunks_written(), 3);
        assert_eq!(writer.body_bytes_written(), 3);

        let wire = sink.into_inner();
        assert_eq!(
            body_after_head(&wire),
            b"1\r\na\r\n2\r\nbb\r\n0\r\n\r\n0\r\n\r\n"
        );
    }

    #[tokio::test]
    async fn hex_size_line() {
        let mut sink = HttpResponseSink::new(Vec::new());
        let mut head = ResponseHead::ok(Version::HTTP_11, false);
        let data = vec![b'x'; 255];

        let mut writer = ChunkedResponseWriter::new(&mut sink, StreamingCapability::supported());
        writer.begin_stream(&mut head).await.unwrap();
        writer.write_chunk(&data).await.unwrap();

        let wire = sink.into_inner();
        let body = body_after_head(&wire);
        assert!(body.starts_with(b"ff\r\nxxx"));
        assert!(body.ends_with(b"x\r\n"));
        assert_eq!(body.len(), 4 + 255 + 2);
    }

    #[tokio::test]
    async fn end_without_chunks() {
        let mut sink = HttpResponseSink::new(Vec::new());
        let mut head = ResponseHead::ok(Version::HTTP_11, false);

        let mut writer = ChunkedResponseWriter::new(&mut sink, StreamingCapability::supported());
        writer.begin_stream(&mut head).await.unwrap();
        writer.end_stream().await.unwrap();

        let wire = sink.into_inner();
        assert_eq!(body_after_head(&wire), b"0\r\n\r\n");
    }

    #[tokio::test]
    async fn write_before_begin() {
        let mut sink = HttpResponseSink::new(Vec::new());

        let mut writer = ChunkedResponseWriter::new(&mut sink, StreamingCapability::supported());
        let e = writer.write_chunk(b"early").await.unwrap_err();
        assert!(matches!(e, ChunkedStreamError::StreamNotBegun));
        let e = writer.end_stream().await.unwrap_err();
        assert!(matches!(e, ChunkedStreamError::StreamNotBegun));
        assert_eq!(writer.state(), ChunkedStreamState::Idle);

        assert!(sink.into_inner().is_empty());
    }

    #[tokio::test]
    async fn write_after_end() {
        let mut sink = HttpResponseSink::new(Vec::new());
        let mut head = ResponseHead::ok(Version::HTTP_11, false);

        let mut writer = ChunkedResponseWriter::new(&mut sink, StreamingCapability::supported());
        writer.begin_stream(&mut head).await.unwrap();
        writer.write_chunk(b"data").await.unwrap();
        writer.end_stream().await.unwrap();

        let e = writer.write_chunk(b"late").await.unwrap_err();
        assert!(matches!(e, ChunkedStreamError::StreamClosed));
        let e = writer.end_stream().await.unwrap_err();
        assert!(matches!(e, ChunkedStreamError::StreamClosed));

        let wire = sink.into_inner();
        assert_eq!(body_after_head(&wire), b"4\r\ndata\r\n0\r\n\r\n");
    }

    #[tokio::test]
    async fn unsupported_transport() {
        let mut sink = HttpResponseSink::new(Vec::new());
        let mut head = ResponseHead::ok(Version::HTTP_11, false);

        let mut writer =
            ChunkedResponseWriter::new(&mut sink, StreamingCapability::unsupported());
        let e = writer.begin_stream(&mut head).await.unwrap_err();
        assert!(matches!(e, ChunkedStreamError::UnsupportedTransport));
        let e = writer.write_chunk(b"a").await.unwrap_err();
        assert!(matches!(e, ChunkedStreamError::StreamNotBegun));

        assert!(!sink.header_sent());
        assert!(sink.into_inner().is_empty());
    }

    #[tokio::test]
    async fn http10_head() {
        let mut sink = HttpResponseSink::new(Vec::new());
        let mut head = ResponseHead::ok(Version::HTTP_10, true);

        let mut writer = ChunkedResponseWriter::new(&mut sink, StreamingCapability::supported());
        let e = writer.begin_stream(&mut head).await.unwrap_err();
        assert!(matches!(e, ChunkedStreamError::UnsupportedTransport));
        assert_eq!(writer.state(), ChunkedStreamState::Idle);
        assert!(!head.has_header("Transfer-Encoding"));

        assert!(sink.into_inner().is_empty());
    }

    #[tokio::test]
    async fn begin_twice() {
        let mut sink = HttpResponseSink::new(Vec::new());
        let mut head = ResponseHead::ok(Version::HTTP_11, false);

        let mut writer = ChunkedResponseWriter::new(&mut sink, StreamingCapability::supported());
        writer.begin_stream(&mut head).await.unwrap();
        let e = writer.begin_stream(&mut head).await.unwrap_err();
        assert!(matches!(e, ChunkedStreamError::AlreadyBegun));
        assert_eq!(writer.state(), ChunkedStreamState::Streaming);

        let wire = sink.into_inner();
        assert_eq!(wire.as_slice(), CHUNKED_HEAD);
    }

    #[tokio::test]
    async fn broken_pipe_poisons() {
        let stream = tokio_test::io::Builder::new()
            .write(CHUNKED_HEAD)
            .write_error(io::Error::new(io::ErrorKind::BrokenPipe, "peer gone"))
            .build();
        let mut sink = HttpResponseSink::new(stream);
        let mut head = ResponseHead::ok(Version::HTTP_11, false);

        let mut writer = ChunkedResponseWriter::new(&mut sink, StreamingCapability::supported());
        writer.begin_stream(&mut head).await.unwrap();
        let e = writer.write_chunk(b"abc").await.unwrap_err();
        match e {
            ChunkedStreamError::WriteFailed(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            e => panic!("unexpected error: {e}"),
        }
        assert!(writer.finished());
        let e = writer.write_chunk(b"abc").await.unwrap_err();
        assert!(matches!(e, ChunkedStreamError::StreamClosed));
    }
}
