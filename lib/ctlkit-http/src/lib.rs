/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub mod header;

mod capability;
pub use capability::StreamingCapability;

mod head;
pub use head::ResponseHead;

mod sink;
pub use sink::{HttpResponseSink, ResponseSink};

mod body;
pub use body::{ChunkedResponseWriter, ChunkedStreamError, ChunkedStreamState};
