// tests/scrape_run.rs
//
// The slot loop against an in-memory source.

use std::collections::HashMap;
use std::fs;

use serde_json::{json, Value};

use pitch_scrape::error::{FetchError, TableError};
use pitch_scrape::file::TableWriter;
use pitch_scrape::progress::{NullProgress, Progress};
use pitch_scrape::scrape::{self, DeliverySource, Slot, SlotGrid};
use pitch_scrape::specs::COLUMNS;

fn fixture() -> Value {
    serde_json::from_str(include_str!("fixtures/delivery.json")).unwrap()
}

fn delivery(innings: u32, over: u32, ball: u32, batter: &str) -> Value {
    let mut doc = fixture();
    doc["match"]["delivery"]["deliveryNumber"] = json!({ "innings": innings, "over": over, "ball": ball });
    doc["match"]["battingTeam"]["batsman"]["name"] = Value::from(batter);
    doc
}

enum Reply {
    Doc(Value),
    Fail,
}

#[derive(Default)]
struct FakeSource {
    replies: HashMap<Slot, Reply>,
    asked: Vec<Slot>,
}

impl FakeSource {
    fn with(mut self, slot: Slot, reply: Reply) -> Self {
        self.replies.insert(slot, reply);
        self
    }
}

impl DeliverySource for FakeSource {
    fn fetch(&mut self, slot: Slot) -> Result<Option<Value>, FetchError> {
        self.asked.push(slot);
        match self.replies.get(&slot) {
            None => Ok(None),
            Some(Reply::Doc(v)) => Ok(Some(v.clone())),
            Some(Reply::Fail) => Err(FetchError::Status { url: slot.to_string(), status: 500 }),
        }
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<String>,
    empty: usize,
    skipped: usize,
    failed: usize,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn slot_done(&mut self, _slot: Slot, ball_id: &str) { self.done.push(ball_id.to_string()); }
    fn slot_empty(&mut self, _slot: Slot) { self.empty += 1; }
    fn slot_skipped(&mut self, _slot: Slot, _reason: &str) { self.skipped += 1; }
    fn slot_failed(&mut self, _slot: Slot, _reason: &str) { self.failed += 1; }
    fn finish(&mut self) { self.finished = true; }
}

fn small_grid() -> SlotGrid {
    SlotGrid::new(1..=2, 1..=2, 1..=3)
}

fn data_lines(path: &std::path::Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(s) => s.lines().skip(1).map(String::from).collect(),
        Err(_) => Vec::new(),
    }
}

#[test]
fn visits_slots_in_nested_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut src = FakeSource::default();
    let grid = small_grid();
    let mut quiet = NullProgress;
    scrape::run(&grid, &mut src, TableWriter::new(dir.path().join("m.csv")), Some(&mut quiet)).unwrap();

    assert_eq!(src.asked.len(), 12);
    assert_eq!(src.asked[0], Slot::new(1, 1, 1));
    assert_eq!(src.asked[1], Slot::new(1, 1, 2));
    assert_eq!(src.asked[3], Slot::new(1, 2, 1));
    assert_eq!(src.asked[6], Slot::new(2, 1, 1));
    let mut sorted = src.asked.clone();
    sorted.sort();
    assert_eq!(sorted, src.asked);
}

#[test]
fn first_slot_empty_later_slot_initializes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.csv");
    let mut src = FakeSource::default()
        .with(Slot::new(1, 1, 1), Reply::Doc(json!({})))
        .with(Slot::new(1, 1, 2), Reply::Doc(delivery(1, 1, 2, "A")))
        .with(Slot::new(1, 2, 1), Reply::Doc(delivery(1, 2, 1, "B")));
    let mut rec = Recorder::default();

    let summary = scrape::run(&small_grid(), &mut src, TableWriter::new(&path), Some(&mut rec)).unwrap();

    assert_eq!(summary.visited, 12);
    assert_eq!(summary.written, 2);
    assert_eq!(summary.empty, 10);
    assert!(summary.is_clean());

    let text = fs::read_to_string(&path).unwrap();
    let first = text.lines().next().unwrap();
    assert_eq!(first, COLUMNS.join(","));
    assert_eq!(text.lines().count(), 3);

    assert_eq!(rec.total, 12);
    assert_eq!(rec.done, vec!["0.2", "1.1"]);
    assert!(rec.finished);
}

#[test]
fn nothing_found_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.csv");
    let mut src = FakeSource::default();
    let summary = scrape::run(&small_grid(), &mut src, TableWriter::new(&path), None).unwrap();
    assert_eq!(summary.written, 0);
    assert!(!path.exists());
}

#[test]
fn fetch_failure_skips_only_that_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.csv");
    let mut src = FakeSource::default()
        .with(Slot::new(1, 1, 1), Reply::Doc(delivery(1, 1, 1, "A")))
        .with(Slot::new(1, 1, 2), Reply::Fail)
        .with(Slot::new(1, 1, 3), Reply::Doc(delivery(1, 1, 3, "C")));
    let mut rec = Recorder::default();

    let summary = scrape::run(&small_grid(), &mut src, TableWriter::new(&path), Some(&mut rec)).unwrap();

    assert_eq!(summary.written, 2);
    assert_eq!(summary.skipped, 1);
    assert!(summary.is_clean());
    assert_eq!(rec.skipped, 1);
    assert_eq!(data_lines(&path).len(), 2);
}

#[test]
fn malformed_document_writes_no_partial_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("m.csv");
    let mut broken = delivery(1, 1, 2, "B");
    broken["match"]["delivery"].as_object_mut().unwrap().remove("trajectory");

    let mut src = FakeSource::default()
        .with(Slot::new(1, 1, 1), Reply::Doc(delivery(1, 1, 1, "A")))
        .with(Slot::new(1, 1, 2), Reply::Doc(broken))
        .with(Slot::new(1, 1, 3), Reply::Doc(delivery(1, 1, 3, "C")));

    let summary = scrape::run(&small_grid(), &mut src, TableWriter::new(&path), None).unwrap();

    assert_eq!(summary.written, 2);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].slot, Slot::new(1, 1, 2));
    assert!(summary.failed[0].error.paths().any(|p| p == "match.delivery.trajectory"));
    assert!(!summary.is_clean());

    let rows = data_lines(&path);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| !r.contains(",B,")));
}

#[test]
fn unwritable_table_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be.
    let path = dir.path().join("taken");
    fs::create_dir(&path).unwrap();

    let mut src = FakeSource::default()
        .with(Slot::new(1, 1, 1), Reply::Doc(delivery(1, 1, 1, "A")))
        .with(Slot::new(1, 1, 2), Reply::Doc(delivery(1, 1, 2, "B")));

    let res = scrape::run(&small_grid(), &mut src, TableWriter::new(&path), None);
    assert!(matches!(res, Err(TableError::Io { .. })));
    assert_eq!(src.asked.len(), 1);
}
