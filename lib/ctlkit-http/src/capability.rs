/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::ChunkedStreamError;

/// Whether the serving adapter can hold a connection open for incremental writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamingCapability {
    supports_streaming: bool,
}

impl StreamingCapability {
    pub const fn new(supports_streaming: bool) -> Self {
        StreamingCapability { supports_streaming }
    }

    #[inline]
    pub const fn supported() -> Self {
        StreamingCapability::new(true)
    }

    #[inline]
    pub const fn unsupported() -> Self {
        StreamingCapability::new(false)
    }

    #[inline]
    pub fn supports_streaming(&self) -> bool {
        self.supports_streaming
    }

    pub fn must_support_streaming(&self) -> Result<(), ChunkedStreamError> {
        if self.supports_streaming {
            Ok(())
        } else {
            Err(ChunkedStreamError::UnsupportedTransport)
        }
    }
}

impl From<bool> for StreamingCapability {
    fn from(value: bool) -> Self {
        StreamingCapability::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check() {
        assert!(StreamingCapability::supported().must_support_streaming().is_ok());
        assert!(matches!(
            StreamingCapability::unsupported().must_support_streaming(),
            Err(ChunkedStreamError::UnsupportedTransport)
        ));
        assert!(!StreamingCapability::default().supports_streaming());
        assert!(StreamingCapability::from(true).supports_streaming());
    }
}
