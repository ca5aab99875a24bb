/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid char {ch:?} in {header} header value")]
pub struct InvalidHeaderValue {
    header: &'static str,
    ch: char,
}

impl InvalidHeaderValue {
    pub(crate) fn new(header: &'static str, ch: char) -> Self {
        InvalidHeaderValue { header, ch }
    }

    #[inline]
    pub fn header(&self) -> &'static str {
        self.header
    }
}
