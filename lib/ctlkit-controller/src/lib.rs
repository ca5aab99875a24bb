/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::RenderError;

mod config;
pub use config::ControllerConfig;

mod escape;
pub use escape::{escape_xml, h, html_escape};

mod cookie;
pub use cookie::{delete_cookie, set_cookie};

mod redirect;
pub use redirect::redirect;

mod download;
pub use download::{SendFileOptions, nginx_send_file, send_data, send_file, stream_file};

mod render;
pub use render::{render_chunked, render_deferred, render_then_call};
