// src/gui/progress.rs
use std::sync::{Arc, Mutex, PoisonError};

use crate::progress::Progress;
use crate::scrape::Slot;

/// Writes scrape progress into the status line the UI thread reads each frame.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
    written: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, written: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    fn step(&mut self) {
        self.done += 1;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Scanning {total} slots…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn slot_done(&mut self, slot: Slot, ball_id: &str) {
        self.step();
        self.written += 1;
        self.set_status(format!(
            "Innings {} ball {} ({}/{}, {} rows)",
            slot.innings, ball_id, self.done, self.total, self.written
        ));
    }
    fn slot_empty(&mut self, _slot: Slot) {
        self.step();
    }
    fn slot_skipped(&mut self, slot: Slot, _reason: &str) {
        self.step();
        self.set_status(format!("Request failed at {slot} ({}/{})", self.done, self.total));
    }
    fn slot_failed(&mut self, slot: Slot, _reason: &str) {
        self.step();
        self.set_status(format!("Malformed delivery at {slot} ({}/{})", self.done, self.total));
    }
    fn finish(&mut self) {
        self.set_status(format!("Scrape complete ({} rows)", self.written));
    }
}
