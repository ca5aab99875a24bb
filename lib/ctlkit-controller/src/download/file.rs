/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::path::Path;

use tokio::fs::File;

use ctlkit_http::ResponseHead;
use ctlkit_http::header::InvalidHeaderValue;

use super::SendFileOptions;

/// Open a file to be sent as a download and set the download headers.
///
/// The filename in Content-Disposition defaults to the basename of `path`.
/// The head is left untouched if the file can not be opened, or if the
/// filename can not be put in a header, which is an `InvalidInput` error.
pub async fn send_file<P: AsRef<Path>>(
    head: &mut ResponseHead,
    path: P,
    opts: &SendFileOptions,
) -> io::Result<File> {
    let path = path.as_ref();
    let file = File::open(path).await?;

    let r = match opts.filename() {
        Some(name) => opts.add_headers(head, Some(name)),
        None => {
            let basename = path.file_name().map(|s| s.to_string_lossy());
            opts.add_headers(head, basename.as_deref())
        }
    };
    r.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    Ok(file)
}

/// Set the download headers for in-memory data and give the data back.
///
/// The filename is only set if given in `opts`.
pub fn send_data<T>(
    head: &mut ResponseHead,
    data: T,
    opts: &SendFileOptions,
) -> Result<T, InvalidHeaderValue> {
    opts.add_headers(head, opts.filename())?;
    Ok(data)
}

/// Let nginx send the file by using the X-Accel-Redirect header.
///
/// Relative paths are resolved against the current dir, the file is not checked.
pub fn nginx_send_file<P: AsRef<Path>>(head: &mut ResponseHead, path: P) -> io::Result<()> {
    let path = std::path::absolute(path.as_ref())?;
    let line = ctlkit_http::header::x_accel_redirect(&path)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    head.add_extra_header(line);
    Ok(())
}
