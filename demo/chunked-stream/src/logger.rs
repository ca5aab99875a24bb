/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};

use chrono::Local;
use slog::{Drain, OwnedKVList, Record};
use slog_scope::GlobalLoggerGuard;

struct StderrDrain;

impl Drain for StderrDrain {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record, _values: &OwnedKVList) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(
            stderr,
            "{} {} {} <{}:{}>",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.msg(),
            record.module(),
            record.line(),
        )
    }
}

pub(crate) fn setup(verbose: bool) -> anyhow::Result<GlobalLoggerGuard> {
    let logger = slog::Logger::root(StderrDrain.ignore_res(), slog::o!());
    let scope_guard = slog_scope::set_global_logger(logger);

    let level = if verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    slog_stdlog::init_with_level(level)?;
    Ok(scope_guard)
}
