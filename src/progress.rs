// src/progress.rs
use crate::scrape::Slot;

/// Lightweight progress reporting for a scrape run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of slots in the grid.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A row for this slot reached the table.
    fn slot_done(&mut self, _slot: Slot, _ball_id: &str) {}

    /// Nothing was bowled at this slot (or the document was empty).
    fn slot_empty(&mut self, _slot: Slot) {}

    /// The fetch failed; the slot was treated as no-data.
    fn slot_skipped(&mut self, _slot: Slot, _reason: &str) {}

    /// The document was malformed; no row was written for this slot.
    fn slot_failed(&mut self, _slot: Slot, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
