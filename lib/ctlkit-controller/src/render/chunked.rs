/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use log::debug;

use ctlkit_http::{ChunkedResponseWriter, ResponseHead, ResponseSink, StreamingCapability};

use crate::RenderError;

/// Stream the response body produced by `producer` using chunked encoding.
///
/// The terminal frame is only written if the producer returns `Ok`. On producer
/// error the body is left unterminated, so the client sees an aborted response.
pub async fn render_chunked<S, F>(
    capability: StreamingCapability,
    head: &mut ResponseHead,
    sink: &mut S,
    producer: F,
) -> Result<u64, RenderError>
where
    S: ResponseSink + ?Sized,
    F: AsyncFnOnce(&mut ChunkedResponseWriter<'_, S>) -> Result<(), RenderError>,
{
    capability.must_support_streaming()?;

    let mut writer = ChunkedResponseWriter::new(sink, capability);
    writer.begin_stream(head).await?;
    debug!("start chunked response with status {}", head.status());

    producer(&mut writer).await?;
    writer.end_stream().await?;
    Ok(writer.body_bytes_written())
}
