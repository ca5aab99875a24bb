/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use super::{InvalidHeaderValue, check_value};

/// Build a Set-Cookie line, the value should already be in its wire form.
pub fn set_cookie(cookie: &str) -> Result<String, InvalidHeaderValue> {
    check_value("Set-Cookie", cookie)?;
    Ok(format!("Set-Cookie: {cookie}\r\n"))
}
