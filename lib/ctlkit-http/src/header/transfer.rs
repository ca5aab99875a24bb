/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub fn transfer_encoding_chunked() -> &'static str {
    "Transfer-Encoding: chunked\r\n"
}

pub fn content_transfer_encoding_binary() -> &'static str {
    "Content-Transfer-Encoding: binary\r\n"
}
