/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use super::ControllerConfig;
use crate::SendFileOptions;

impl SendFileOptions {
    pub fn parse_yaml(value: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = value {
            let mut opts = SendFileOptions::default();
            ctlkit_yaml::foreach_kv(map, |k, v| match ctlkit_yaml::key::normalize(k).as_str() {
                "disposition" => {
                    let disposition = ctlkit_yaml::value::as_header_token(v)
                        .context(format!("invalid header token value for key {k}"))?;
                    opts.set_disposition(disposition);
                    Ok(())
                }
                "content_type" | "type" => {
                    let mime = ctlkit_yaml::value::as_mime(v)
                        .context(format!("invalid mime value for key {k}"))?;
                    opts.set_content_type(mime);
                    Ok(())
                }
                _ => Err(anyhow!("invalid key {k}")),
            })?;
            Ok(opts)
        } else {
            Err(anyhow!("invalid yaml type"))
        }
    }
}

impl ControllerConfig {
    pub fn parse_yaml(value: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = value {
            let mut config = ControllerConfig::default();
            ctlkit_yaml::foreach_kv(map, |k, v| match ctlkit_yaml::key::normalize(k).as_str() {
                "cookie_path" => {
                    let path = ctlkit_yaml::value::as_string(v)
                        .context(format!("invalid string value for key {k}"))?;
                    if !path.starts_with('/') {
                        return Err(anyhow!("cookie path {path} should start with '/'"));
                    }
                    config.cookie_path = path;
                    Ok(())
                }
                "send_file" => {
                    config.send_file = SendFileOptions::parse_yaml(v)
                        .context(format!("invalid send file options value for key {k}"))?;
                    Ok(())
                }
                "stream_buffer_size" => {
                    let size = ctlkit_yaml::value::as_usize(v)
                        .context(format!("invalid usize value for key {k}"))?;
                    config.set_stream_buffer_size(size);
                    Ok(())
                }
                _ => Err(anyhow!("invalid key {k}")),
            })?;
            Ok(config)
        } else {
            Err(anyhow!("invalid yaml type"))
        }
    }
}
