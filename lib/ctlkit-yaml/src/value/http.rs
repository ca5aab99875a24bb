/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use mime::Mime;
use yaml_rust::Yaml;

pub fn as_mime(v: &Yaml) -> anyhow::Result<Mime> {
    let s = super::as_string(v).context("the base type for Mime should be String")?;
    Mime::from_str(s.trim()).map_err(|e| anyhow!("invalid mime type {s}: {e}"))
}

/// A single header token, such as a content disposition type.
pub fn as_header_token(v: &Yaml) -> anyhow::Result<String> {
    let s = super::as_string(v)?;
    let s = s.trim();
    if s.is_empty() {
        return Err(anyhow!("empty header token"));
    }
    if let Some(c) = s
        .chars()
        .find(|c| !c.is_ascii_graphic() || matches!(c, ';' | ',' | '"'))
    {
        return Err(anyhow!("invalid char {c:?} in header token {s}"));
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_as_mime() {
        let v = yaml_str!(" text/plain ");
        assert_eq!(as_mime(&v).unwrap(), mime::TEXT_PLAIN);

        let v = yaml_str!("application/pdf");
        assert_eq!(as_mime(&v).unwrap().essence_str(), "application/pdf");

        assert!(as_mime(&yaml_str!("not a mime")).is_err());
        assert!(as_mime(&Yaml::Boolean(false)).is_err());
    }

    #[test]
    fn t_as_header_token() {
        assert_eq!(as_header_token(&yaml_str!("inline")).unwrap(), "inline");
        assert_eq!(
            as_header_token(&yaml_str!(" attachment\r")).unwrap(),
            "attachment"
        );
        assert!(as_header_token(&yaml_str!("")).is_err());
        assert!(as_header_token(&yaml_str!("a b")).is_err());
        assert!(as_header_token(&yaml_str!("a;b")).is_err());
    }
}
