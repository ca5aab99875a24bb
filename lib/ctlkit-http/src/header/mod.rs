/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::InvalidHeaderValue;

mod connection;
pub use connection::connection_as_bytes;

mod content;
pub use content::{content_disposition, content_length, content_type};

mod transfer;
pub use transfer::{content_transfer_encoding_binary, transfer_encoding_chunked};

mod location;
pub use location::{location, x_accel_redirect};

mod cookie;
pub use cookie::set_cookie;

/// Reject values that would end the header line early.
pub(crate) fn check_value(header: &'static str, value: &str) -> Result<(), InvalidHeaderValue> {
    match value.chars().find(|c| matches!(c, '\r' | '\n' | '\0')) {
        Some(ch) => Err(InvalidHeaderValue::new(header, ch)),
        None => Ok(()),
    }
}

/// Check whether a pre-formatted header line carries the given header name.
pub fn line_has_name(line: &str, name: &str) -> bool {
    match line.split_once(':') {
        Some((n, _)) => n.trim().eq_ignore_ascii_case(name),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_name() {
        assert!(line_has_name("Transfer-Encoding: chunked\r\n", "transfer-encoding"));
        assert!(line_has_name("content-length: 0\r\n", "Content-Length"));
        assert!(!line_has_name("Content-Type: text/html\r\n", "Content-Length"));
        assert!(!line_has_name("garbage\r\n", "garbage"));
    }

    #[test]
    fn line_breaking_chars() {
        assert!(check_value("Location", "/a b?c=d").is_ok());
        for value in ["/x\r\nSet-Cookie: a=1", "/x\nX: 1", "/x\0"] {
            let e = check_value("Location", value).unwrap_err();
            assert_eq!(e.header(), "Location");
        }
    }
}
