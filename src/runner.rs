// src/runner.rs
use chrono::Local;
use tracing::{error, info};

use crate::{
    browser,
    config::options::AppOptions,
    error::{Result, ScrapeError},
    file::{self, WrittenFiles},
    model::{Benchmark, RawRow, total_results},
    normalize::build_benchmark,
    progress::{NullProgress, Progress},
    specs::leaderboard::BenchmarkInfo,
    store,
};

/// Where the rows of a run came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Backup,
    /// Both paths failed; the run carries no benchmarks.
    Nothing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collected {
    pub benchmarks: Vec<Benchmark>,
    pub source: DataSource,
}

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub collected: Collected,
    pub files: WrittenFiles,
}

impl RunReport {
    pub fn total_results(&self) -> usize {
        total_results(&self.collected.benchmarks)
    }
}

/// Top-level runner: scrape (or fall back), normalize, write.
/// Only writer errors escape; scrape failures pivot to the backup file.
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunReport> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    info!("Starting collection from {}", opts.scrape.url);
    let collected = collect(opts, &mut *progress);

    progress.log("Writing output files…");
    let written = file::write_outputs(&collected.benchmarks, &opts.export, &Local::now());
    progress.finish();
    let files = written?;
    info!(
        "Collected {} benchmark(s) with {} result(s)",
        collected.benchmarks.len(),
        total_results(&collected.benchmarks)
    );
    info!("Data saved to {}", files.json.display());

    Ok(RunReport { collected, files })
}

/// Live scrape unless `skip_live`, then the backup file if that didn't work.
pub fn collect(opts: &AppOptions, progress: &mut dyn Progress) -> Collected {
    let live = if opts.skip_live {
        info!("Live scrape skipped");
        None
    } else {
        Some(browser::read_leaderboard(opts, Some(&mut *progress)))
    };
    resolve(live, opts, progress)
}

/// Decide between a live result and the backup file, and normalize whichever wins.
pub fn resolve(
    live: Option<Result<Vec<RawRow>>>,
    opts: &AppOptions,
    progress: &mut dyn Progress,
) -> Collected {
    let info = BenchmarkInfo { url: opts.scrape.url.clone(), ..BenchmarkInfo::default() };

    match live {
        Some(Ok(rows)) => {
            return Collected {
                benchmarks: vec![build_benchmark(rows, info)],
                source: DataSource::Live,
            };
        }
        Some(Err(e)) => error!("Live scrape failed: {e}"),
        None => {}
    }

    progress.log("Loading backup file…");
    info!("Trying backup file {}", opts.backup_csv.display());
    match store::load_backup_rows(&opts.backup_csv) {
        Ok(rows) => Collected {
            benchmarks: vec![build_benchmark(rows, info)],
            source: DataSource::Backup,
        },
        Err(e @ ScrapeError::BackupMissing(_)) => {
            error!("{e}");
            Collected { benchmarks: Vec::new(), source: DataSource::Nothing }
        }
        Err(e) => {
            error!("Backup file unusable: {e}");
            Collected { benchmarks: Vec::new(), source: DataSource::Nothing }
        }
    }
}
