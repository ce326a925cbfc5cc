// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use crate::config::{self, AppOptions};
use crate::error::{Result, ScrapeError};
use crate::progress::Progress;
use crate::runner::{self, RunReport};

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(Box<AppOptions>),
    Help,
}

/// `--config` is applied first, every other flag on top of it.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    let mut opts = match config_path(&args)? {
        Some(path) => config::file::load(&path)?,
        None => AppOptions::default(),
    };

    let mut it = args.into_iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "-c" | "--config" => { it.next(); } // already applied
            "-o" | "--out" => opts.export.out_dir = PathBuf::from(value(&mut it, &a)?),
            "-b" | "--backup" => opts.backup_csv = PathBuf::from(value(&mut it, &a)?),
            "--url" => opts.scrape.url = value(&mut it, &a)?,
            "--target-rows" => opts.scrape.scroll.target_rows = Some(number(&mut it, &a)?),
            "--no-target" => opts.scrape.scroll.target_rows = None,
            "--max-scrolls" => opts.scrape.scroll.max_scrolls = number(&mut it, &a)?,
            "--max-stalls" => opts.scrape.scroll.max_stalls = number(&mut it, &a)?,
            "--chrome" => opts.browser.chrome_path = Some(PathBuf::from(value(&mut it, &a)?)),
            "--headful" => opts.browser.headless = false,
            "--offline" => opts.skip_live = true,
            "--diagnostics" => opts.export.diagnostics_dir = Some(PathBuf::from(value(&mut it, &a)?)),
            "--log-file" => opts.log.file = Some(PathBuf::from(value(&mut it, &a)?)),
            "--no-log-file" => opts.log.file = None,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(ScrapeError::Usage(format!("Unknown arg: {}", a))),
        }
    }

    Ok(Command::Run(Box::new(opts)))
}

fn config_path(args: &[String]) -> Result<Option<PathBuf>> {
    match args.iter().position(|a| a == "-c" || a == "--config") {
        Some(i) => args.get(i + 1)
            .map(|p| Some(PathBuf::from(p)))
            .ok_or_else(|| ScrapeError::Usage(s!("Missing value for --config"))),
        None => Ok(None),
    }
}

fn value(it: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    it.next().ok_or_else(|| ScrapeError::Usage(format!("Missing value for {flag}")))
}

fn number(it: &mut impl Iterator<Item = String>, flag: &str) -> Result<usize> {
    let v = value(it, flag)?;
    v.parse().map_err(|_| ScrapeError::Usage(format!("{flag} expects a number, got `{v}`")))
}

/// Console progress on stderr; stdout is kept for the final summary line.
#[derive(Default)]
pub struct CliProgress {
    expected: Option<usize>,
}

impl Progress for CliProgress {
    fn begin(&mut self, expected: Option<usize>) {
        self.expected = expected;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, count: usize, model: &str) {
        let mut err = std::io::stderr().lock();
        let _ = match self.expected {
            Some(n) => writeln!(err, "  [{count}/{n}] {model}"),
            None => writeln!(err, "  [{count}] {model}"),
        };
    }
}

pub fn run(opts: &AppOptions) -> Result<RunReport> {
    let mut progress = CliProgress::default();
    runner::run(opts, Some(&mut progress))
}

/// The one line printed on stdout at the end.
pub fn summary_line(report: &RunReport) -> String {
    let benchmarks = report.collected.benchmarks.len();
    if benchmarks == 0 {
        s!("Failed to collect data")
    } else {
        format!(
            "Successfully collected data for {} benchmark(s) with {} result(s)",
            benchmarks,
            report.total_results()
        )
    }
}
