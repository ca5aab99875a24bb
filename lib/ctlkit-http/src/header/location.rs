/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::path::Path;

use super::{InvalidHeaderValue, check_value};

pub fn location(url: &str) -> Result<String, InvalidHeaderValue> {
    check_value("Location", url)?;
    Ok(format!("Location: {url}\r\n"))
}

pub fn x_accel_redirect(path: &Path) -> Result<String, InvalidHeaderValue> {
    let path = path.display().to_string();
    check_value("X-Accel-Redirect", &path)?;
    Ok(format!("X-Accel-Redirect: {path}\r\n"))
}
