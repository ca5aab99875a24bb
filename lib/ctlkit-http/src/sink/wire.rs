/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::ResponseSink;
use crate::ResponseHead;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SinkStage {
    Initial,
    StatusPending { close: bool },
    Body,
}

/// HTTP/1.x wire implementation of [`ResponseSink`] over any tokio writer.
pub struct HttpResponseSink<W> {
    writer: W,
    header: Vec<u8>,
    stage: SinkStage,
    body_written: u64,
}

impl<W> HttpResponseSink<W> {
    pub fn new(writer: W) -> Self {
        HttpResponseSink {
            writer,
            header: Vec::with_capacity(ResponseHead::RESPONSE_BUFFER_SIZE),
            stage: SinkStage::Initial,
            body_written: 0,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Body bytes that have been handed to the writer.
    pub fn body_written(&self) -> u64 {
        self.body_written
    }

    pub fn header_sent(&self) -> bool {
        self.stage == SinkStage::Body
    }

    fn prepare_status(&mut self, head: &ResponseHead) -> io::Result<()> {
        if self.stage != SinkStage::Initial {
            return Err(io::Error::other("response status has already been sent"));
        }
        self.header.clear();
        head.write_head_lines(&mut self.header)?;
        self.stage = SinkStage::StatusPending {
            close: head.should_close(),
        };
        Ok(())
    }
}

#[async_trait]
impl<W> ResponseSink for HttpResponseSink<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send_status_no_length(&mut self, head: &ResponseHead) -> io::Result<()> {
        self.prepare_status(head)
    }

    async fn send_status(&mut self, head: &ResponseHead, content_length: u64) -> io::Result<()> {
        self.prepare_status(head)?;
        self.header
            .extend_from_slice(crate::header::content_length(content_length).as_bytes());
        Ok(())
    }

    async fn send_header(&mut self) -> io::Result<()> {
        let SinkStage::StatusPending { close } = self.stage else {
            return Err(io::Error::other("no pending response status to send"));
        };
        self.header
            .extend_from_slice(crate::header::connection_as_bytes(close));
        self.header.extend_from_slice(b"\r\n");
        self.writer.write_all(&self.header).await?;
        self.header.clear();
        self.stage = SinkStage::Body;
        Ok(())
    }

    async fn write(&mut self, data: &[u8]) -> io::Result<()> {
        if self.stage != SinkStage::Body {
            return Err(io::Error::other("response header has not been sent"));
        }
        self.writer.write_all(data).await?;
        self.body_written += data.len() as u64;
        Ok(())
    }

    async fn flush(&mut self) -> io::Result<()> {
        self.writer.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{StatusCode, Version};

    #[tokio::test]
    async fn sized_response() {
        let mut sink = HttpResponseSink::new(Vec::new());
        let head = ResponseHead::ok(Version::HTTP_11, false);
        sink.send_status(&head, 5).await.unwrap();
        sink.send_header().await.unwrap();
        sink.write(b"hello").await.unwrap();
        sink.flush().await.unwrap();
        assert_eq!(sink.body_written(), 5);
        assert_eq!(
            sink.into_inner().as_slice(),
            b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\nConnection: Keep-Alive\r\n\r\nhello"
        );
    }

    #[tokio::test]
    async fn no_length_close() {
        let mut sink = HttpResponseSink::new(Vec::new());
        let head = ResponseHead::from_standard(StatusCode::OK, Version::HTTP_11, true);
        sink.send_status_no_length(&head).await.unwrap();
        assert!(sink.get_ref().is_empty());
        sink.send_header().await.unwrap();
        assert!(sink.header_sent());
        assert_eq!(
            sink.get_ref().as_slice(),
            b"HTTP/1.1 200 OK\r\nConnection: Close\r\n\r\n"
        );
    }

    #[tokio::test]
    async fn out_of_order() {
        let mut sink = HttpResponseSink::new(Vec::new());
        assert!(sink.write(b"x").await.is_err());
        assert!(sink.send_header().await.is_err());

        let head = ResponseHead::ok(Version::HTTP_11, false);
        sink.send_status_no_length(&head).await.unwrap();
        assert!(sink.send_status(&head, 1).await.is_err());
        assert!(sink.write(b"x").await.is_err());
        assert!(sink.into_inner().is_empty());
    }
}
