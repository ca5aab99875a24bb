/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use mime::Mime;

use super::{InvalidHeaderValue, check_value};

pub fn content_length(len: u64) -> String {
    format!("Content-Length: {len}\r\n")
}

pub fn content_type(mime: &Mime) -> String {
    format!("Content-Type: {mime}\r\n")
}

/// The filename is sent as a quoted-string, with `\` and `"` escaped.
pub fn content_disposition(
    disposition: &str,
    filename: Option<&str>,
) -> Result<String, InvalidHeaderValue> {
    check_value("Content-Disposition", disposition)?;
    match filename {
        Some(name) => {
            check_value("Content-Disposition", name)?;
            let name = name.replace('\\', "\\\\").replace('"', "\\\"");
            Ok(format!(
                "Content-Disposition: {disposition}; filename=\"{name}\"\r\n"
            ))
        }
        None => Ok(format!("Content-Disposition: {disposition}\r\n")),
    }
}
