/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use yaml_rust::YamlLoader;

use ctlkit_controller::ControllerConfig;

const ARG_LISTEN: &str = "listen";
const ARG_FILE: &str = "file";
const ARG_INTERVAL: &str = "interval";
const ARG_CONFIG: &str = "config";
const ARG_NO_STREAMING: &str = "no-streaming";
const ARG_VERBOSE: &str = "verbose";

pub(crate) struct ProcArgs {
    pub(crate) listen: SocketAddr,
    pub(crate) file: PathBuf,
    pub(crate) interval: Duration,
    pub(crate) streaming: bool,
    pub(crate) verbose: bool,
    pub(crate) config: ControllerConfig,
}

pub(crate) fn build_cli_args() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .about("Stream the lines of a file to http clients using chunked encoding")
        .arg(
            Arg::new(ARG_LISTEN)
                .help("Listen address")
                .long(ARG_LISTEN)
                .short('l')
                .value_name("ADDR")
                .num_args(1)
                .default_value("127.0.0.1:8080")
                .value_parser(value_parser!(SocketAddr)),
        )
        .arg(
            Arg::new(ARG_FILE)
                .help("The file to stream")
                .value_name("FILE")
                .required(true)
                .num_args(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_INTERVAL)
                .help("Milliseconds to wait between two chunks")
                .long(ARG_INTERVAL)
                .value_name("MILLIS")
                .num_args(1)
                .default_value("300")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_CONFIG)
                .help("Controller config file in yaml format")
                .long(ARG_CONFIG)
                .short('c')
                .value_name("CONFIG FILE")
                .num_args(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(ARG_NO_STREAMING)
                .help("Act as a transport without streaming support")
                .long(ARG_NO_STREAMING)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_VERBOSE)
                .help("Show debug logs")
                .long(ARG_VERBOSE)
                .short('v')
                .action(ArgAction::SetTrue),
        )
}

fn load_config(path: &Path) -> anyhow::Result<ControllerConfig> {
    let content = std::fs::read_to_string(path)
        .context(format!("failed to read config file {}", path.display()))?;
    let docs = YamlLoader::load_from_str(&content)
        .map_err(|e| anyhow!("invalid yaml file {}: {e}", path.display()))?;
    match docs.first() {
        Some(doc) => ControllerConfig::parse_yaml(doc),
        None => Ok(ControllerConfig::default()),
    }
}

pub(crate) fn parse_args(args: &ArgMatches) -> anyhow::Result<ProcArgs> {
    let listen = args
        .get_one::<SocketAddr>(ARG_LISTEN)
        .copied()
        .ok_or_else(|| anyhow!("no listen address set"))?;
    let file = args
        .get_one::<PathBuf>(ARG_FILE)
        .cloned()
        .ok_or_else(|| anyhow!("no file set"))?;
    let interval = args
        .get_one::<u64>(ARG_INTERVAL)
        .map(|v| Duration::from_millis(*v))
        .unwrap_or_default();
    let config = match args.get_one::<PathBuf>(ARG_CONFIG) {
        Some(path) => load_config(path)?,
        None => ControllerConfig::default(),
    };

    Ok(ProcArgs {
        listen,
        file,
        interval,
        streaming: !args.get_flag(ARG_NO_STREAMING),
        verbose: args.get_flag(ARG_VERBOSE),
        config,
    })
}
