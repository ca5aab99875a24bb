/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt};

use ctlkit_http::{ResponseHead, ResponseSink, StreamingCapability};

use super::SendFileOptions;
use crate::{ControllerConfig, RenderError};

/// Send the download headers, then copy `source` to the sink as the body.
///
/// With a content length in `opts` the body is sized and a short source is an
/// error. Without it the body is delimited by closing the connection.
pub async fn stream_file<S, R>(
    capability: StreamingCapability,
    config: &ControllerConfig,
    head: &mut ResponseHead,
    sink: &mut S,
    opts: &SendFileOptions,
    source: &mut R,
) -> Result<u64, RenderError>
where
    S: ResponseSink + ?Sized,
    R: AsyncRead + Unpin,
{
    capability.must_support_streaming()?;

    opts.add_headers(head, opts.filename())?;
    match opts.content_length() {
        Some(len) => sink.send_status(head, len).await?,
        None => {
            head.set_close(true);
            sink.send_status_no_length(head).await?;
        }
    }
    sink.send_header().await?;

    let mut buf = vec![0u8; config.stream_buffer_size()];
    let mut limited = source.take(opts.content_length().unwrap_or(u64::MAX));
    let mut total = 0u64;
    loop {
        let nr = limited.read(&mut buf).await?;
        if nr == 0 {
            break;
        }
        sink.write(&buf[..nr]).await?;
        total += nr as u64;
    }
    sink.flush().await?;

    if let Some(len) = opts.content_length()
        && total < len
    {
        return Err(RenderError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("file source ended after {total} of {len} bytes"),
        )));
    }
    Ok(total)
}
