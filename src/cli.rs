// src/cli.rs
use std::path::PathBuf;

use crate::config::options::{PanelOptions, PlotOptions, ScrapeOptions};
use crate::data;
use crate::error::{Error, SelectError};
use crate::pitch::{LengthSummary, TaxonomyKind};
use crate::progress::Progress;
use crate::scrape::{self, parse_range, Slot};
use crate::specs::COLUMNS;
use crate::store::{self, DeliverySheet};

pub enum Command {
    Scrape(ScrapeOptions),
    Summary(PlotOptions, PanelSet),
    Columns,
    Help,
}

/// Which of the plot panels `summary` prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelSet {
    Both,
    /// `--ball-type` with a single source: only the first panel is meaningful.
    First,
}

/// How the run went, for the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Clean,
    /// Finished, but some slot failed to decode or some panel came up empty.
    Incomplete,
}

pub fn run() -> Result<Status, Error> {
    match parse_args(std::env::args().skip(1))? {
        Command::Scrape(opts) => scrape(&opts),
        Command::Summary(opts, set) => summary(&opts, set),
        Command::Columns => {
            for (i, c) in COLUMNS.iter().enumerate() {
                println!("{:>2} {}", i + 1, c);
            }
            Ok(Status::Clean)
        }
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            Ok(Status::Clean)
        }
    }
}

fn invalid(msg: impl Into<String>) -> Error {
    Error::InvalidInput(msg.into())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Error> {
    let mut args = args.into_iter();
    let Some(cmd) = args.next() else { return Ok(Command::Help) };

    match cmd.as_str() {
        "scrape" => parse_scrape(args).map(Command::Scrape),
        "summary" => parse_summary(args).map(|(opts, set)| Command::Summary(opts, set)),
        "columns" => Ok(Command::Columns),
        "-h" | "--help" | "help" => Ok(Command::Help),
        other => Err(invalid(format!("Unknown command: {other}"))),
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, Error> {
    args.next().ok_or_else(|| invalid(format!("Missing value for {flag}")))
}

fn parse_scrape<I: Iterator<Item = String>>(mut args: I) -> Result<ScrapeOptions, Error> {
    let mut opts = ScrapeOptions::default();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-m" | "--match" => opts.match_id = value(&mut args, &a)?.trim().to_string(),
            "-o" | "--out" => opts.out = Some(PathBuf::from(value(&mut args, &a)?)),
            "--innings" => opts.grid.innings = parse_range(&value(&mut args, &a)?).map_err(invalid)?,
            "--overs" => opts.grid.overs = parse_range(&value(&mut args, &a)?).map_err(invalid)?,
            "--balls" => opts.grid.balls = parse_range(&value(&mut args, &a)?).map_err(invalid)?,
            "--base-url" => opts.base_url = value(&mut args, &a)?,
            "--resume" => opts.resume = true,
            _ => return Err(invalid(format!("Unknown arg: {a}"))),
        }
    }
    if opts.match_id.is_empty() {
        return Err(invalid("Specify --match <id>"));
    }
    Ok(opts)
}

fn parse_summary<I: Iterator<Item = String>>(mut args: I) -> Result<(PlotOptions, PanelSet), Error> {
    let mut opts = PlotOptions::default();
    let mut ball_type: Option<String> = None;
    let mut taxonomy: Option<TaxonomyKind> = None;
    let mut second_source = false;

    while let Some(a) = args.next() {
        match a.as_str() {
            "-f" | "--file" => opts.panels[0].file = PathBuf::from(value(&mut args, &a)?),
            "-b" | "--batter" => opts.panels[0].batter = value(&mut args, &a)?,
            "--file2" => {
                opts.panels[1].file = PathBuf::from(value(&mut args, &a)?);
                second_source = true;
            }
            "--batter2" => {
                opts.panels[1].batter = value(&mut args, &a)?;
                second_source = true;
            }
            "--ball-type" => ball_type = Some(value(&mut args, &a)?),
            "--taxonomy" => taxonomy = Some(value(&mut args, &a)?.parse().map_err(invalid)?),
            _ => return Err(invalid(format!("Unknown arg: {a}"))),
        }
    }
    if opts.panels[0].file.as_os_str().is_empty() {
        return Err(invalid("Specify --file <csv>"));
    }
    if opts.panels[0].batter.trim().is_empty() {
        return Err(invalid("Specify --batter <name>"));
    }
    opts.inherit_source();

    let mut set = PanelSet::Both;
    match (ball_type, taxonomy) {
        (Some(bt), tax) => {
            let mut base = if bt.eq_ignore_ascii_case("spin") { PanelOptions::spin() } else { PanelOptions::pace() };
            base.taxonomy = tax.unwrap_or(base.taxonomy);
            base.caption = bt.to_uppercase();
            base.ball_type = bt;
            for p in &mut opts.panels {
                p.restyle(&base);
            }
            // Same ball type on both sides only makes sense when the sources differ.
            if !second_source {
                set = PanelSet::First;
            }
        }
        (None, Some(tax)) => {
            for p in &mut opts.panels {
                p.taxonomy = tax;
            }
        }
        (None, None) => {}
    }
    Ok((opts, set))
}

/* ---------------- scrape ---------------- */

struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Scanning {total} slots…");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn slot_done(&mut self, slot: Slot, ball_id: &str) {
        println!("innings: {}, ball: {}", slot.innings, ball_id);
    }
    fn slot_skipped(&mut self, slot: Slot, reason: &str) {
        eprintln!("Request failed at {slot}: {reason}");
    }
    fn slot_failed(&mut self, slot: Slot, reason: &str) {
        eprintln!("Malformed delivery at {slot}: {reason}");
    }
}

fn scrape(opts: &ScrapeOptions) -> Result<Status, Error> {
    let mut prog = CliProgress { total: 0 };
    let summary = scrape::collect_match(opts, Some(&mut prog))?;

    println!(
        "Wrote {} row(s) to {} ({} of {} slots empty, {} unreachable, {} malformed)",
        summary.written,
        summary.out.display(),
        summary.empty,
        prog.total,
        summary.skipped,
        summary.failed.len()
    );
    Ok(if summary.is_clean() { Status::Clean } else { Status::Incomplete })
}

/* ---------------- summary ---------------- */

/// One panel of `summary`: its length tally, or why it has nothing to show.
#[derive(Debug)]
pub struct PanelReport {
    pub batter: String,
    pub caption: String,
    pub taxonomy: TaxonomyKind,
    pub lengths: Result<LengthSummary, SelectError>,
}

/// Tally each requested panel against its own table. A file shared by both
/// sides is read once.
pub fn panel_reports(opts: &PlotOptions, set: PanelSet) -> Result<Vec<PanelReport>, Error> {
    let panels: &[PanelOptions] = match set {
        PanelSet::Both => &opts.panels,
        PanelSet::First => &opts.panels[..1],
    };

    let mut sheets: Vec<DeliverySheet> = Vec::new();
    let mut reports = Vec::with_capacity(panels.len());
    for p in panels {
        let ix = match sheets.iter().position(|s| s.path == p.file) {
            Some(ix) => ix,
            None => {
                let sheet = store::load_sheet(&p.file)?;
                if sheet.skipped > 0 {
                    println!("({}: {} row(s) without usable bounce/runs ignored)", p.file.display(), sheet.skipped);
                }
                sheets.push(sheet);
                sheets.len() - 1
            }
        };
        let lengths = data::select(&sheets[ix].deliveries, p.selection())
            .map(|rows| LengthSummary::tally(p.taxonomy.taxonomy(), &rows));
        reports.push(PanelReport {
            batter: p.batter.clone(),
            caption: p.caption.clone(),
            taxonomy: p.taxonomy,
            lengths,
        });
    }
    Ok(reports)
}

/// Print the length tables. One empty side is fine as long as the other
/// had something to show.
pub fn summary(opts: &PlotOptions, set: PanelSet) -> Result<Status, Error> {
    let reports = panel_reports(opts, set)?;

    let mut shown = 0usize;
    for r in &reports {
        match &r.lengths {
            Ok(lengths) => {
                shown += 1;
                println!("{}", crate::pitch::scene::title(&r.batter, &r.caption, lengths.total));
                println!("[{} lengths]", r.taxonomy);
                println!("{lengths}\n");
            }
            Err(e) => println!("{e}\n"),
        }
    }

    Ok(if shown == 0 { Status::Incomplete } else { Status::Clean })
}
