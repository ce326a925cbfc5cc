// src/log.rs
//
// Subscriber setup. Called once by the binary; the library only emits events.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::options::LogOptions;
use crate::error::Result;

/// Install stderr + (optional) append-mode file logging.
/// `RUST_LOG` overrides `opts.default_filter`.
pub fn init(opts: &LogOptions) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&opts.default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file = match &opts.file {
        Some(path) => {
            let f = OpenOptions::new().create(true).append(true).open(path)?;
            Some(fmt::layer().with_writer(Mutex::new(f)).with_ansi(false))
        }
        None => None,
    };

    // A second init (tests, embedding) keeps whichever subscriber won.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file)
        .try_init();
    Ok(())
}
