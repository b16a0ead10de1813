// src/store.rs
//
// Reading a delivery table back for plotting.

use std::path::{Path, PathBuf};

use crate::core::Scalar;
use crate::data::PlotRow;
use crate::error::LoadError;

/// Columns a pitch map cannot do without. Anything else in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = ["bounce_x", "bounce_y", "batter", "runs", "ball_type"];

/// Table as read, for display.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
}

/// A loaded table plus its plottable deliveries.
#[derive(Clone, Debug)]
pub struct DeliverySheet {
    pub path: PathBuf,
    pub dataset: DataSet,
    pub deliveries: Vec<PlotRow>,
    /// Rows whose bounce or runs cells did not parse to finite numbers.
    pub skipped: usize,
}

struct Cols {
    bounce_x: usize,
    bounce_y: usize,
    batter: usize,
    runs: usize,
    ball_type: usize,
}

fn locate(path: &Path, headers: &[String]) -> Result<Cols, LoadError> {
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| find(c).is_none())
        .map(|c| s!(*c))
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns { path: path.to_path_buf(), missing });
    }
    // All present, checked above.
    let at = |name: &str| find(name).unwrap_or_default();
    Ok(Cols {
        bounce_x: at("bounce_x"),
        bounce_y: at("bounce_y"),
        batter: at("batter"),
        runs: at("runs"),
        ball_type: at("ball_type"),
    })
}

fn parse_row(ix: usize, cells: &[String], c: &Cols) -> Option<PlotRow> {
    let get = |i: usize| cells.get(i).map(String::as_str);
    // "NaN" and "inf" parse as floats but have no place on the pitch.
    let num = |i: usize| Scalar::Text(s!(get(i)?)).as_f64().filter(|v| v.is_finite());
    Some(PlotRow {
        row: ix,
        batter: s!(get(c.batter)?),
        ball_type: s!(get(c.ball_type)?),
        bounce_x: num(c.bounce_x)?,
        bounce_y: num(c.bounce_y)?,
        runs: Scalar::Text(s!(get(c.runs)?)).as_i64()?,
    })
}

/// Load `path`. Missing required columns is a configuration error and nothing
/// is returned; individual unparseable rows are only counted.
pub fn load_sheet(path: &Path) -> Result<DeliverySheet, LoadError> {
    let csv_err = |source| LoadError::Csv { path: path.to_path_buf(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;

    let headers: Vec<String> = rdr.headers().map_err(csv_err)?.iter().map(String::from).collect();
    let cols = locate(path, &headers)?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(csv_err)?;
        rows.push(rec.iter().map(String::from).collect::<Vec<String>>());
    }

    let mut deliveries = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;
    for (ix, cells) in rows.iter().enumerate() {
        match parse_row(ix, cells, &cols) {
            Some(d) => deliveries.push(d),
            None => {
                skipped += 1;
                logd!("Load: {}: row {} has unusable bounce/runs", path.display(), ix + 1);
            }
        }
    }

    logf!(
        "Load: {} rows={} plottable={} skipped={}",
        path.display(), rows.len(), deliveries.len(), skipped
    );

    Ok(DeliverySheet {
        path: path.to_path_buf(),
        dataset: DataSet { headers, rows },
        deliveries,
        skipped,
    })
}
