// src/cli.rs
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::config::consts::{DEFAULT_INPUT_DIR, DEFAULT_OUT_DIR, DEFAULT_RECORDS_FILE, LOG_FILE};
use crate::config::options::{RunOptions, SourceSelector};
use crate::progress::Progress;
use crate::{log, runner, specs};

#[derive(Parser, Debug)]
#[command(name = "sunset_scrape")]
#[command(about = "Extract model deprecation schedules from saved vendor documentation pages")]
#[command(version)]
pub struct Args {
    #[arg(long, value_name = "DIR", help = "Directory holding <slug>.html per source")]
    pub input_dir: Option<PathBuf>,

    #[arg(long, short, value_name = "FILE", help = "JSON file to write")]
    pub out: Option<PathBuf>,

    #[arg(long = "source", short, value_name = "SLUG", help = "Only this source (repeatable)")]
    pub sources: Vec<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Reference date for status (default: local today)")]
    pub today: Option<NaiveDate>,

    #[arg(long, help = "List built-in sources and exit")]
    pub list_sources: bool,

    #[arg(long, value_name = "FILE", help = "Debug log file")]
    pub log: Option<PathBuf>,
}

impl Args {
    pub fn to_options(&self) -> RunOptions {
        RunOptions {
            sources: if self.sources.is_empty() {
                SourceSelector::All
            } else {
                SourceSelector::Only(self.sources.clone())
            },
            input_dir: self.input_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            out: self
                .out
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_RECORDS_FILE)),
            today: self.today.unwrap_or_else(|| Local::now().date_naive()),
        }
    }
}

/// Prints progress lines to stderr.
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, source: &str, records: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {source}: {records} record(s)", self.done, self.total);
    }
    fn item_failed(&mut self, source: &str, error: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {source}: FAILED ({error})", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    if args.list_sources {
        for src in specs::ALL {
            println!("{}\t{}\t{}", src.slug, src.name, src.url);
        }
        return Ok(());
    }

    let log_path = args.log.clone().unwrap_or_else(|| PathBuf::from(LOG_FILE));
    log::init(&log_path).wrap_err_with(|| format!("opening log {}", log_path.display()))?;

    let opts = args.to_options();
    let mut progress = ConsoleProgress { total: 0, done: 0 };
    let report = runner::run(&opts, Some(&mut progress))?;

    eprintln!("{} record(s) → {}", report.total(), report.out.display());
    if report.per_source.is_empty() {
        return Err(eyre!("every source failed"));
    }
    Ok(())
}
