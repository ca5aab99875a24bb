/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use ctlkit_http::{ResponseHead, ResponseSink, StreamingCapability};

use crate::RenderError;

async fn send_sized<S>(head: &ResponseHead, sink: &mut S, body: &[u8]) -> io::Result<()>
where
    S: ResponseSink + ?Sized,
{
    sink.send_status(head, body.len() as u64).await?;
    sink.send_header().await?;
    sink.write(body).await?;
    sink.flush().await
}

/// Compute the body on the blocking pool, then send it as a sized response.
///
/// The connection task is free while `work` runs, and it does all the writes
/// once the body is ready.
pub async fn render_deferred<S, F, T>(
    capability: StreamingCapability,
    head: &ResponseHead,
    sink: &mut S,
    work: F,
) -> Result<u64, RenderError>
where
    S: ResponseSink + ?Sized,
    F: FnOnce() -> T + Send + 'static,
    T: AsRef<[u8]> + Send + 'static,
{
    capability.must_support_streaming()?;

    let body = tokio::task::spawn_blocking(work)
        .await
        .map_err(RenderError::DeferredTaskFailed)?;
    let body = body.as_ref();
    send_sized(head, sink, body).await?;
    Ok(body.len() as u64)
}

/// Send `body` as a sized response, then run `then` once the bytes are flushed.
pub async fn render_then_call<S, Fut>(
    capability: StreamingCapability,
    head: &ResponseHead,
    sink: &mut S,
    body: &[u8],
    then: Fut,
) -> Result<Fut::Output, RenderError>
where
    S: ResponseSink + ?Sized,
    Fut: Future,
{
    capability.must_support_streaming()?;

    send_sized(head, sink, body).await?;
    Ok(then.await)
}
