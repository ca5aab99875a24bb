/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ctlkit_http::{ResponseHead, ResponseSink};

/// A sink that records the calls made on it, shared with the test body.
#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub(crate) fn record(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResponseSink for RecordingSink {
    async fn send_status_no_length(&mut self, _head: &ResponseHead) -> io::Result<()> {
        self.record("status".to_string());
        Ok(())
    }

    async fn send_status(&mut self, _head: &ResponseHead, content_length: u64) -> io::Result<()> {
        self.record(format!("status {content_length}"));
        Ok(())
    }

    async fn send_header(&mut self) -> io::Result<()> {
        self.record("header".to_string());
        Ok(())
    }

    async fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.record(format!("write {}", String::from_utf8_lossy(data)));
        Ok(())
    }

    async fn flush(&mut self) -> io::Result<()> {
        self.record("flush".to_string());
        Ok(())
    }
}
