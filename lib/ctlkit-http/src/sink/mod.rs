/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use async_trait::async_trait;

use crate::ResponseHead;

mod wire;
pub use wire::HttpResponseSink;

/// The response side of a server connection.
///
/// The calls should be made in order: one of the status methods,
/// then `send_header`, then any number of `write`.
#[async_trait]
pub trait ResponseSink: Send {
    /// Send the status line and the extra headers, without any Content-Length.
    async fn send_status_no_length(&mut self, head: &ResponseHead) -> io::Result<()>;

    /// Send the status line, the extra headers and a Content-Length header.
    async fn send_status(&mut self, head: &ResponseHead, content_length: u64) -> io::Result<()>;

    /// Finish the header block.
    async fn send_header(&mut self) -> io::Result<()>;

    async fn write(&mut self, data: &[u8]) -> io::Result<()>;

    async fn flush(&mut self) -> io::Result<()>;
}
