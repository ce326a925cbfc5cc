// src/progress.rs
/// Human-facing status for a run (stage changes, rows as they arrive).
/// The CLI prints these; library code never writes to stdout itself.
pub trait Progress {
    /// Called once the expected row count is known (the target, if any).
    fn begin(&mut self, _expected: Option<usize>) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One new unique row was collected. `count` is the running total.
    fn item_done(&mut self, _count: usize, _model: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
