//! PubNote stdio host.
//!
//! # Responsibility
//! - Load host configuration and start logging.
//! - Build one note store and serve JSON-lines requests on stdin/stdout.

mod config;
mod host;

use config::HostConfig;
use host::Host;
use log::{error, info};
use pubnote_core::{core_version, init_logging, NoteResource, NoteService};
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    if std::env::args().skip(1).any(|arg| arg == "--version") {
        println!("pubnote {}", core_version());
        return ExitCode::SUCCESS;
    }

    let config = match HostConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("pubnote: {err}");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        eprintln!("pubnote: {err}");
        return ExitCode::from(2);
    }

    let service = if config.seed {
        NoteService::seeded()
    } else {
        NoteService::in_memory()
    };
    let host = Host::new(NoteResource::new(Arc::new(service)));
    info!(
        "event=host_start module=host status=ok seed={} version={}",
        config.seed,
        core_version()
    );

    match host.serve(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=host_io module=host status=error error={err}");
            ExitCode::FAILURE
        }
    }
}
