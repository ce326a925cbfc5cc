// src/bin/cli.rs
use leaderboard_scrape::{cli::{self, Command}, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", cli::HELP);
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    log::init(&opts.log)?;
    let report = cli::run(&opts)?;
    println!("{}", cli::summary_line(&report));
    Ok(())
}
