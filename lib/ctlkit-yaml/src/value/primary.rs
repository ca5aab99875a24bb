/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::anyhow;
use yaml_rust::Yaml;

pub fn as_usize(v: &Yaml) -> anyhow::Result<usize> {
    match v {
        Yaml::String(s) => Ok(usize::from_str(s)?),
        Yaml::Integer(i) => Ok(usize::try_from(*i)?),
        _ => Err(anyhow!(
            "yaml value type for 'usize' should be 'string' or 'integer'"
        )),
    }
}

pub fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!(
            "yaml value type for string should be 'string' / 'integer' / 'real'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_as_string() {
        assert_eq!(as_string(&yaml_str!("abc")).unwrap(), "abc");
        assert_eq!(as_string(&Yaml::Integer(12)).unwrap(), "12");
        assert!(as_string(&Yaml::Array(vec![])).is_err());
    }

    #[test]
    fn t_as_usize() {
        assert_eq!(as_usize(&Yaml::Integer(16)).unwrap(), 16);
        assert_eq!(as_usize(&yaml_str!("32")).unwrap(), 32);
        assert!(as_usize(&Yaml::Integer(-1)).is_err());
        assert!(as_usize(&Yaml::Boolean(true)).is_err());
    }
}
