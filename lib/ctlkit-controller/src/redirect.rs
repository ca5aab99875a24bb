/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use http::StatusCode;
use log::info;

use ctlkit_http::ResponseHead;
use ctlkit_http::header::InvalidHeaderValue;

/// Turn the response into a 302 redirect and return the explanation body.
///
/// `url` may be relative or fully qualified, it is used as given. The head is
/// left untouched if `url` can not be put in a Location header.
pub fn redirect(head: &mut ResponseHead, url: &str) -> Result<String, InvalidHeaderValue> {
    let location = ctlkit_http::header::location(url)?;
    info!("redirecting to: {url}");
    head.set_status(StatusCode::FOUND);
    head.add_extra_header(location);
    Ok(format!(
        "<html><body>You are being <a href=\"{url}\">redirected</a>.</body></html>"
    ))
}
