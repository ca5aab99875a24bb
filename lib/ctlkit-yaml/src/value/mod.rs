/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod primary;
pub use primary::{as_string, as_usize};

mod http;
pub use self::http::{as_header_token, as_mime};
