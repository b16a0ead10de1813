// src/scrape/scrape.rs
use std::path::PathBuf;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::{
    config::options::ScrapeOptions,
    core::{json::is_empty_document, net},
    error::{Error, ExtractError, FetchError, TableError},
    file::{TableWriter, WriteKind},
    progress::Progress,
    specs,
};

use super::grid::{Slot, SlotGrid};

/// Where delivery documents come from. The live one is `HttpSource`.
pub trait DeliverySource {
    /// `Ok(None)` means nothing was bowled at `slot`.
    fn fetch(&mut self, slot: Slot) -> Result<Option<Value>, FetchError>;
}

pub struct HttpSource {
    client: Client,
    base_url: String,
    match_id: String,
}

impl HttpSource {
    pub fn new(base_url: &str, match_id: &str) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(net::client()?, base_url, match_id))
    }

    pub fn with_client(client: Client, base_url: &str, match_id: &str) -> Self {
        Self { client, base_url: s!(base_url), match_id: s!(match_id) }
    }

    pub fn url_for(&self, slot: Slot) -> String {
        net::delivery_url(&self.base_url, slot.innings, slot.over, slot.ball, &self.match_id)
    }
}

impl DeliverySource for HttpSource {
    fn fetch(&mut self, slot: Slot) -> Result<Option<Value>, FetchError> {
        let url = self.url_for(slot);
        logd!("Fetch: GET {url}");
        net::get_json(&self.client, &url)
    }
}

/// A slot whose document could not be decoded.
#[derive(Debug)]
pub struct SlotFailure {
    pub slot: Slot,
    pub error: ExtractError,
}

/// What a scrape produced.
#[derive(Debug, Default)]
pub struct ScrapeSummary {
    pub out: PathBuf,
    pub visited: usize,
    pub written: usize,
    /// No document, or an empty one.
    pub empty: usize,
    /// Fetch failed; treated as no-data.
    pub skipped: usize,
    pub failed: Vec<SlotFailure>,
}

impl ScrapeSummary {
    pub fn is_clean(&self) -> bool { self.failed.is_empty() }
}

/// Scrape one match over the whole grid into the table at `opts.out_path()`.
pub fn collect_match(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ScrapeSummary, Error> {
    let match_id = opts.match_id.trim();
    if match_id.is_empty() {
        return Err(Error::InvalidInput(s!("match id is required")));
    }

    let out = opts.out_path();
    let table = if opts.resume {
        TableWriter::resume(&out)?
    } else {
        TableWriter::new(&out)
    };

    let mut source = HttpSource::new(&opts.base_url, match_id)?;
    logf!(
        "Scrape: Begin match={} slots={} out={} resume={}",
        match_id, opts.grid.len(), out.display(), opts.resume
    );

    Ok(run(&opts.grid, &mut source, table, progress)?)
}

/// Drive `source` over `grid`, one slot at a time, writing each good record.
///
/// Fetch failures and empty documents skip the slot. A malformed document
/// fails only its own slot. A table write error ends the run.
pub fn run<S: DeliverySource + ?Sized>(
    grid: &SlotGrid,
    source: &mut S,
    mut table: TableWriter,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ScrapeSummary, TableError> {
    let mut summary = ScrapeSummary { out: table.path().to_path_buf(), ..Default::default() };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(grid.len());
    }

    for slot in grid {
        summary.visited += 1;

        let doc = match source.fetch(slot) {
            Ok(Some(doc)) if !is_empty_document(&doc) => doc,
            Ok(_) => {
                logd!("Fetch: {slot}: no data");
                summary.empty += 1;
                if let Some(p) = progress.as_deref_mut() { p.slot_empty(slot); }
                continue;
            }
            Err(e) => {
                loge!("Fetch: {slot}: {e}");
                summary.skipped += 1;
                if let Some(p) = progress.as_deref_mut() { p.slot_skipped(slot, &e.to_string()); }
                continue;
            }
        };

        let record = match specs::extract(&doc) {
            Ok(r) => r,
            Err(error) => {
                loge!("Extract: {slot}: {error}");
                if let Some(p) = progress.as_deref_mut() { p.slot_failed(slot, &error.to_string()); }
                summary.failed.push(SlotFailure { slot, error });
                continue;
            }
        };

        let n = record.number;
        if (n.innings, n.over, n.ball) != (slot.innings, slot.over, slot.ball) {
            logd!("Extract: {slot}: document says {}.{}.{}", n.innings, n.over, n.ball);
        }

        let kind = table.write(&record.to_row())?;
        if kind == WriteKind::Initialized {
            logf!("Table: initialized by slot {slot}");
        }
        summary.written += 1;

        if let Some(p) = progress.as_deref_mut() {
            p.slot_done(slot, &n.ball_id());
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    logf!(
        "Scrape: Done written={} empty={} skipped={} failed={}",
        summary.written, summary.empty, summary.skipped, summary.failed.len()
    );
    Ok(summary)
}
