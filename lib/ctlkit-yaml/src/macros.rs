/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// Load the first document of a yaml string, panics on invalid input.
///
/// `yaml_rust::YamlLoader` should be in scope at the call site.
#[macro_export]
macro_rules! yaml_doc {
    ($s:expr) => {
        YamlLoader::load_from_str($s)
            .expect("invalid yaml document")
            .into_iter()
            .next()
            .expect("empty yaml document")
    };
}

#[macro_export]
macro_rules! yaml_str {
    ($s:expr) => {
        yaml_rust::Yaml::String($s.to_string())
    };
}
