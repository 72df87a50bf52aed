// src/progress.rs
/// Progress reporting for multi-source runs. Frontends implement this to surface status.
pub trait Progress {
    /// Called at the start with the number of sources selected.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One source finished with `records` records.
    fn item_done(&mut self, _source: &str, _records: usize) {}

    /// One source failed; the run continues with the others.
    fn item_failed(&mut self, _source: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
