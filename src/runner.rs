// src/runner.rs
use std::{
    fs, path::{Path, PathBuf}, thread,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use chrono::NaiveDate;

use crate::{
    config::consts::WORKERS,
    config::options::RunOptions,
    engine::{ self, NormalizedRecord, source::SourceConfig },
    error::ScrapeError,
    progress::Progress,
    store,
};

/// Summary of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Records per source, registry order. Failed sources are absent.
    pub per_source: Vec<(String, usize)>,
    pub failed: Vec<(String, String)>,
    pub out: PathBuf,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.per_source.iter().map(|(_, n)| n).sum()
    }
}

/// Read, extract and save every selected source.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunReport, ScrapeError> {
    let sources = opts.sources.resolve().map_err(ScrapeError::UnknownSources)?;
    if sources.is_empty() {
        return Err(ScrapeError::NothingSelected);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
        p.log("Extracting…");
    }
    logf!("run: {} source(s), today={}", sources.len(), opts.today);

    let results = collect(opts, &sources);

    let mut report = RunReport { out: opts.out.clone(), ..RunReport::default() };
    let mut records: Vec<NormalizedRecord> = Vec::new();

    for (src, result) in sources.iter().zip(results) {
        match result {
            Ok(found) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(src.name, found.len());
                }
                report.per_source.push((src.name.to_string(), found.len()));
                records.extend(found);
            }
            Err(e) => {
                let msg = e.to_string();
                loge!("{msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(src.name, &msg);
                }
                report.failed.push((src.name.to_string(), msg));
            }
        }
    }

    let saved = store::save_records(&opts.out, &records);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    saved?;

    logf!("run: {} record(s) written to {}", records.len(), opts.out.display());
    Ok(report)
}

/// Extract every source on the worker pool. Results come back indexed like `sources`.
fn collect(
    opts: &RunOptions,
    sources: &[&'static SourceConfig],
) -> Vec<Result<Vec<NormalizedRecord>, ScrapeError>> {
    type Job = (&'static SourceConfig, PathBuf);
    type Done = (usize, Result<Vec<NormalizedRecord>, ScrapeError>);

    let jobs: Arc<Vec<Job>> = Arc::new(
        sources.iter().map(|&src| (src, opts.input_path(src))).collect()
    );
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Done>();
    let today = opts.today;

    let workers = WORKERS.min(jobs.len()).max(1);

    // Spawn workers
    for _ in 0..workers {
        let jobs = Arc::clone(&jobs);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= jobs.len() {
                    break;
                }
                let (src, path) = &jobs[i];
                let _ = tx.send((i, extract_file(src, path, today)));
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut slots: Vec<Option<Result<Vec<NormalizedRecord>, ScrapeError>>> =
        (0..jobs.len()).map(|_| None).collect();
    for (i, result) in res_rx {
        slots[i] = Some(result);
    }

    // A slot left empty means its worker died mid-job.
    slots
        .into_iter()
        .zip(jobs.iter())
        .map(|(slot, (src, path))| slot.unwrap_or_else(|| Err(ScrapeError::Input {
            source_name: src.name.to_string(),
            path: path.clone(),
            err: std::io::Error::other("worker exited"),
        })))
        .collect()
}

fn extract_file(
    src: &SourceConfig,
    path: &Path,
    today: NaiveDate,
) -> Result<Vec<NormalizedRecord>, ScrapeError> {
    let doc = fs::read_to_string(path).map_err(|err| ScrapeError::Input {
        source_name: src.name.to_string(),
        path: path.to_path_buf(),
        err,
    })?;
    logd!("{}: read {} bytes from {}", src.name, doc.len(), path.display());
    Ok(engine::extract(&doc, src, today))
}
