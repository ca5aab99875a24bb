/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::ChunkedStreamError;

mod chunked_writer;
pub use chunked_writer::{ChunkedResponseWriter, ChunkedStreamState};
