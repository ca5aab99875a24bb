/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::SendFileOptions;

#[cfg(feature = "yaml")]
mod yaml;

const DEFAULT_COOKIE_PATH: &str = "/";
const DEFAULT_STREAM_BUFFER_SIZE: usize = 16 * 1024;

#[derive(Clone, Debug)]
pub struct ControllerConfig {
    cookie_path: String,
    send_file: SendFileOptions,
    stream_buffer_size: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            cookie_path: DEFAULT_COOKIE_PATH.to_string(),
            send_file: SendFileOptions::default(),
            stream_buffer_size: DEFAULT_STREAM_BUFFER_SIZE,
        }
    }
}

impl ControllerConfig {
    #[inline]
    pub fn cookie_path(&self) -> &str {
        &self.cookie_path
    }

    /// Default options for `send_file`, `send_data` and `stream_file`.
    pub fn send_file_options(&self) -> SendFileOptions {
        self.send_file.clone()
    }

    #[inline]
    pub fn stream_buffer_size(&self) -> usize {
        self.stream_buffer_size
    }

    pub fn set_cookie_path(&mut self, path: String) {
        self.cookie_path = path;
    }

    pub fn set_stream_buffer_size(&mut self, size: usize) {
        self.stream_buffer_size = size.max(1);
    }
}
