// src/scrape/mod.rs
mod grid;
mod scrape;

pub use grid::{parse_range, Slot, SlotGrid, Slots};
pub use scrape::{collect_match, run, DeliverySource, HttpSource, ScrapeSummary, SlotFailure};
