/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use anyhow::anyhow;
use chrono::{TimeDelta, Utc};
use http::Version;
use log::{debug, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::net::TcpStream;

use ctlkit_controller::RenderError;
use ctlkit_http::{HttpResponseSink, ResponseHead, ResponseSink, StreamingCapability};

use crate::opts::ProcArgs;

const PATH_DEFERRED: &str = "/deferred";
const PATH_DOWNLOAD: &str = "/download";
const PATH_OLD: &str = "/old";

struct RequestLine {
    path: String,
    version: Version,
}

/// Read the request line and skip the header lines that follow.
async fn read_request_head<R>(reader: &mut R) -> anyhow::Result<Option<RequestLine>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    let mut parts = line.split_ascii_whitespace();
    let (Some(_method), Some(path), Some(version)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(anyhow!("invalid request line: {}", line.trim_end()));
    };
    let request = RequestLine {
        path: path.to_string(),
        version: match version {
            "HTTP/1.1" => Version::HTTP_11,
            _ => Version::HTTP_10,
        },
    };

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        if line == "\r\n" || line == "\n" {
            return Ok(Some(request));
        }
    }
}

fn format_lines(content: &str) -> String {
    content
        .lines()
        .take_while(|line| *line != "EOF")
        .map(|line| format!("<p>{}</p>\r\n", ctlkit_controller::h(line)))
        .collect()
}

/// Plain sized response for transports that can not stream.
async fn reply_buffered<S>(head: &ResponseHead, sink: &mut S, body: &[u8]) -> io::Result<()>
where
    S: ResponseSink + ?Sized,
{
    sink.send_status(head, body.len() as u64).await?;
    sink.send_header().await?;
    sink.write(body).await?;
    sink.flush().await
}

pub(crate) async fn serve_connection(stream: TcpStream, args: &ProcArgs) -> anyhow::Result<()> {
    let (r, w) = stream.into_split();
    let mut reader = BufReader::new(r);
    let Some(request) = read_request_head(&mut reader).await? else {
        return Ok(());
    };
    debug!("{:?} request for {}", request.version, request.path);

    // chunked encoding is not available to HTTP/1.0 clients
    let capability =
        StreamingCapability::new(args.streaming && request.version == Version::HTTP_11);
    let mut head = ResponseHead::ok(request.version, true);
    let mut sink = HttpResponseSink::new(w);

    match request.path.as_str() {
        PATH_OLD => {
            let body = ctlkit_controller::redirect(&mut head, "/")?;
            head.add_extra_header(ctlkit_http::header::content_type(&mime::TEXT_HTML_UTF_8));
            reply_buffered(&head, &mut sink, body.as_bytes()).await?;
        }
        PATH_DOWNLOAD => serve_download(capability, args, &mut head, &mut sink).await?,
        PATH_DEFERRED => serve_deferred(capability, args, &mut head, &mut sink).await?,
        _ => serve_lines(capability, args, &mut head, &mut sink).await?,
    }
    Ok(())
}

async fn serve_download<S>(
    capability: StreamingCapability,
    args: &ProcArgs,
    head: &mut ResponseHead,
    sink: &mut S,
) -> anyhow::Result<()>
where
    S: ResponseSink + ?Sized,
{
    let filename = args
        .file
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let opts = args.config.send_file_options().with_filename(filename);

    if capability.supports_streaming() {
        let mut file = tokio::fs::File::open(&args.file).await?;
        let len = file.metadata().await?.len();
        let opts = opts.with_content_length(len);
        let n = ctlkit_controller::stream_file(
            capability,
            &args.config,
            head,
            sink,
            &opts,
            &mut file,
        )
        .await?;
        debug!("streamed {n} bytes of {}", args.file.display());
    } else {
        let data = tokio::fs::read(&args.file).await?;
        let data = ctlkit_controller::send_data(head, data, &opts)?;
        reply_buffered(head, sink, &data).await?;
    }
    Ok(())
}

async fn serve_deferred<S>(
    capability: StreamingCapability,
    args: &ProcArgs,
    head: &mut ResponseHead,
    sink: &mut S,
) -> anyhow::Result<()>
where
    S: ResponseSink + ?Sized,
{
    head.add_extra_header(ctlkit_http::header::content_type(&mime::TEXT_HTML_UTF_8));

    let path = args.file.clone();
    let r = ctlkit_controller::render_deferred(capability, head, sink, move || {
        match std::fs::read_to_string(&path) {
            Ok(s) => format_lines(&s),
            Err(e) => {
                warn!("failed to read {}: {e}", path.display());
                String::new()
            }
        }
    })
    .await;
    match r {
        Ok(n) => debug!("sent {n} bytes in a deferred response"),
        Err(e) if e.is_unsupported_transport() => {
            let content = tokio::fs::read_to_string(&args.file).await?;
            reply_buffered(head, sink, format_lines(&content).as_bytes()).await?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

async fn serve_lines<S>(
    capability: StreamingCapability,
    args: &ProcArgs,
    head: &mut ResponseHead,
    sink: &mut S,
) -> anyhow::Result<()>
where
    S: ResponseSink + ?Sized,
{
    head.add_extra_header(ctlkit_http::header::content_type(&mime::TEXT_HTML_UTF_8));
    ctlkit_controller::set_cookie(
        head,
        &args.config,
        "last_stream",
        &Utc::now().to_rfc3339(),
        Utc::now() + TimeDelta::days(1),
    )?;

    let r = ctlkit_controller::render_chunked(capability, head, sink, async |writer| {
        let file = tokio::fs::File::open(&args.file).await?;
        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines.next_line().await? {
            if line == "EOF" {
                break;
            }
            let chunk = format!("<p>{}</p>\r\n", ctlkit_controller::h(&line));
            writer.write_chunk(chunk.as_bytes()).await?;
            if !args.interval.is_zero() {
                tokio::time::sleep(args.interval).await;
            }
        }
        Ok(())
    })
    .await;

    match r {
        Ok(n) => debug!("streamed {n} bytes of {}", args.file.display()),
        Err(e) if e.is_unsupported_transport() => {
            debug!("streaming is not available, fall back to a buffered response");
            let content = tokio::fs::read_to_string(&args.file).await?;
            reply_buffered(head, sink, format_lines(&content).as_bytes()).await?;
        }
        Err(RenderError::ProducerFailed(e)) => return Err(e),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
