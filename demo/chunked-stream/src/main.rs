/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::rc::Rc;

use log::{info, warn};
use tokio::net::TcpListener;
use tokio::task::LocalSet;

mod logger;
mod opts;
mod serve;

fn main() -> anyhow::Result<()> {
    let args = opts::build_cli_args().get_matches();
    let proc_args = opts::parse_args(&args)?;
    let _logger_guard = logger::setup(proc_args.verbose)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    // one response is written by one task, and the tasks never move between threads
    let local = LocalSet::new();
    local.block_on(&rt, run(Rc::new(proc_args)))
}

async fn run(proc_args: Rc<opts::ProcArgs>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(proc_args.listen).await?;
    info!(
        "serving {} on {}",
        proc_args.file.display(),
        listener.local_addr()?
    );

    loop {
        let (stream, peer) = listener.accept().await?;
        let proc_args = Rc::clone(&proc_args);
        tokio::task::spawn_local(async move {
            if let Err(e) = serve::serve_connection(stream, &proc_args).await {
                warn!("connection from {peer} failed: {e:?}");
            }
        });
    }
}
