/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use chrono::{DateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use ctlkit_http::ResponseHead;
use ctlkit_http::header::InvalidHeaderValue;

use crate::ControllerConfig;

const COOKIE_EXPIRATION_FORMAT: &str = "%a, %d-%b-%Y %H:%M:%S GMT";

// space is kept here and turned into '+' afterwards
const COOKIE_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b' ');

fn escape_cookie_value(value: &str) -> String {
    utf8_percent_encode(value, COOKIE_VALUE_ENCODE_SET)
        .to_string()
        .replace(' ', "+")
}

/// Add a Set-Cookie header line. The expiry time is always rendered in GMT.
pub fn set_cookie(
    head: &mut ResponseHead,
    config: &ControllerConfig,
    name: &str,
    value: &str,
    expires: DateTime<Utc>,
) -> Result<(), InvalidHeaderValue> {
    let cookie = format!(
        "{name}={}; path={}; expires={}",
        escape_cookie_value(value),
        config.cookie_path(),
        expires.format(COOKIE_EXPIRATION_FORMAT),
    );
    head.add_extra_header(ctlkit_http::header::set_cookie(&cookie)?);
    Ok(())
}

/// Expire the cookie on the client by setting an empty value dated at the epoch.
pub fn delete_cookie(
    head: &mut ResponseHead,
    config: &ControllerConfig,
    name: &str,
) -> Result<(), InvalidHeaderValue> {
    set_cookie(head, config, name, "", DateTime::<Utc>::UNIX_EPOCH)
}
