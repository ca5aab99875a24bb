/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};

use http::{StatusCode, Version};

/// Status and header lines of a response that has not been sent yet.
///
/// Header lines are kept pre-formatted, each one ending with CRLF.
#[derive(Clone, Debug)]
pub struct ResponseHead {
    status: StatusCode,
    version: Version,
    close: bool,
    extra_headers: Vec<String>,
}

impl ResponseHead {
    pub const RESPONSE_BUFFER_SIZE: usize = 1024;

    pub fn from_standard(status: StatusCode, version: Version, close: bool) -> Self {
        ResponseHead {
            status,
            version,
            close,
            extra_headers: Vec::new(),
        }
    }

    #[inline]
    pub fn ok(version: Version, close: bool) -> Self {
        ResponseHead::from_standard(StatusCode::OK, version, close)
    }

    #[inline]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    #[inline]
    pub fn version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn should_close(&self) -> bool {
        self.close
    }

    pub fn set_close(&mut self, close: bool) {
        self.close = close;
    }

    pub fn add_extra_header(&mut self, line: String) {
        self.extra_headers.push(line);
    }

    pub fn extra_headers(&self) -> &[String] {
        &self.extra_headers
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.extra_headers
            .iter()
            .any(|line| crate::header::line_has_name(line, name))
    }

    /// Add `Transfer-Encoding: chunked` unless it is already present.
    pub fn set_chunked(&mut self) {
        if !self.has_header("Transfer-Encoding") {
            self.add_extra_header(crate::header::transfer_encoding_chunked().to_string());
        }
    }

    fn canonical_reason(&self) -> &'static str {
        self.status
            .canonical_reason()
            .unwrap_or("<unknown status code>")
    }

    /// Write the status line and all extra header lines, without the ending blank line.
    pub fn write_head_lines(&self, buf: &mut Vec<u8>) -> io::Result<()> {
        write!(
            buf,
            "{:?} {} {}\r\n",
            self.version,
            self.status.as_str(),
            self.canonical_reason(),
        )?;
        for line in &self.extra_headers {
            buf.extend_from_slice(line.as_bytes());
        }
        Ok(())
    }
}
