/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod chunked;
pub use chunked::render_chunked;

mod deferred;
pub use deferred::{render_deferred, render_then_call};

#[cfg(test)]
mod testing;
