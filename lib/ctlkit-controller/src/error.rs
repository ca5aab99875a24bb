/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;
use tokio::task::JoinError;

use ctlkit_http::ChunkedStreamError;
use ctlkit_http::header::InvalidHeaderValue;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("chunked stream error: {0}")]
    Stream(#[from] ChunkedStreamError),
    #[error("invalid response header: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("deferred task failed: {0}")]
    DeferredTaskFailed(JoinError),
    #[error("chunk producer failed: {0:?}")]
    ProducerFailed(#[from] anyhow::Error),
    #[error("io failed: {0:?}")]
    Io(#[from] io::Error),
}

impl RenderError {
    /// Whether nothing has been sent as the transport can not stream.
    pub fn is_unsupported_transport(&self) -> bool {
        matches!(
            self,
            RenderError::Stream(ChunkedStreamError::UnsupportedTransport)
        )
    }
}
