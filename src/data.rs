// src/data.rs
//
// Deliveries as the pitch map sees them, and the batter / ball-type filter.

use std::collections::BTreeSet;

use crate::core::sanitize::same_name;
use crate::error::SelectError;
use crate::pitch::Outcome;

/// The handful of columns a pitch map needs from one table row.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotRow {
    /// Index into the loaded dataset's rows.
    pub row: usize,
    pub batter: String,
    pub ball_type: String,
    /// Meters from the batting stumps (negative: full toss).
    pub bounce_x: f64,
    /// Lateral offset from middle stump.
    pub bounce_y: f64,
    pub runs: i64,
}

impl PlotRow {
    pub fn outcome(&self) -> Outcome { Outcome::from_runs(self.runs) }
    pub fn longitudinal(&self) -> f64 { self.bounce_x }
    pub fn lateral(&self) -> f64 { self.bounce_y }
}

#[derive(Clone, Copy, Debug)]
pub struct Selection<'a> {
    pub batter: &'a str,
    pub ball_type: &'a str,
}

impl Selection<'_> {
    pub fn matches(&self, r: &PlotRow) -> bool {
        same_name(&r.batter, self.batter)
            && r.ball_type.trim().eq_ignore_ascii_case(self.ball_type.trim())
    }
}

/// Rows for one batter and ball type, in table order.
/// An empty result is an error of its own, distinct from unusable input.
pub fn select(rows: &[PlotRow], sel: Selection<'_>) -> Result<Vec<PlotRow>, SelectError> {
    let picked: Vec<PlotRow> = rows.iter().filter(|r| sel.matches(r)).cloned().collect();
    if picked.is_empty() {
        return Err(SelectError::Empty {
            batter: s!(sel.batter),
            ball_type: s!(sel.ball_type),
        });
    }
    Ok(picked)
}

/// Distinct batter names, sorted.
pub fn batters(rows: &[PlotRow]) -> Vec<String> {
    distinct(rows.iter().map(|r| r.batter.trim()))
}

/// Distinct delivery types, sorted.
pub fn ball_types(rows: &[PlotRow]) -> Vec<String> {
    distinct(rows.iter().map(|r| r.ball_type.trim()))
}

fn distinct<'a>(it: impl Iterator<Item = &'a str>) -> Vec<String> {
    it.filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
