/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChunkedStreamError {
    #[error("current transport does not support streaming")]
    UnsupportedTransport,
    #[error("chunked stream has already begun")]
    AlreadyBegun,
    #[error("chunked stream has not begun")]
    StreamNotBegun,
    #[error("chunked stream has been closed")]
    StreamClosed,
    #[error("write failed: {0:?}")]
    WriteFailed(io::Error),
}
