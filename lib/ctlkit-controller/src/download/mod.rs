/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use mime::Mime;

use ctlkit_http::ResponseHead;
use ctlkit_http::header::InvalidHeaderValue;

mod file;
pub use file::{nginx_send_file, send_data, send_file};

mod stream;
pub use stream::stream_file;

const DEFAULT_DISPOSITION: &str = "attachment";

/// Header options of a file download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SendFileOptions {
    disposition: String,
    filename: Option<String>,
    content_type: Mime,
    content_length: Option<u64>,
}

impl Default for SendFileOptions {
    fn default() -> Self {
        SendFileOptions {
            disposition: DEFAULT_DISPOSITION.to_string(),
            filename: None,
            content_type: mime::APPLICATION_OCTET_STREAM,
            content_length: None,
        }
    }
}

impl SendFileOptions {
    pub fn with_disposition(mut self, disposition: String) -> Self {
        self.set_disposition(disposition);
        self
    }

    pub fn with_filename(mut self, filename: String) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_content_type(mut self, content_type: Mime) -> Self {
        self.set_content_type(content_type);
        self
    }

    pub fn with_content_length(mut self, len: u64) -> Self {
        self.content_length = Some(len);
        self
    }

    pub fn set_disposition(&mut self, disposition: String) {
        let disposition = disposition.trim();
        if disposition.is_empty() {
            self.disposition = DEFAULT_DISPOSITION.to_string();
        } else {
            self.disposition = disposition.to_string();
        }
    }

    pub fn set_content_type(&mut self, content_type: Mime) {
        self.content_type = content_type;
    }

    #[inline]
    pub fn disposition(&self) -> &str {
        &self.disposition
    }

    #[inline]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    #[inline]
    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }

    #[inline]
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Nothing is added to the head if any value is invalid.
    fn add_headers(
        &self,
        head: &mut ResponseHead,
        filename: Option<&str>,
    ) -> Result<(), InvalidHeaderValue> {
        let disposition = ctlkit_http::header::content_disposition(&self.disposition, filename)?;
        head.add_extra_header(ctlkit_http::header::content_type(&self.content_type));
        head.add_extra_header(disposition);
        head.add_extra_header(ctlkit_http::header::content_transfer_encoding_binary().to_string());
        Ok(())
    }
}
