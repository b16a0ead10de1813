// src/pitch/summary.rs
//
// Counts per length band, with an outcome breakdown. Text form for the CLI.

use std::fmt;

use crate::data::PlotRow;

use super::color::Rgb;
use super::outcome::Outcome;
use super::taxonomy::{Taxonomy, TaxonomyKind};

#[derive(Clone, Debug, PartialEq)]
pub struct BandTally {
    pub label: &'static str,
    pub color: Rgb,
    pub total: usize,
    /// First-seen order within the band.
    pub outcomes: Vec<(Outcome, usize)>,
}

impl BandTally {
    pub fn runs(&self) -> i64 {
        self.outcomes
            .iter()
            .map(|(o, n)| match o {
                Outcome::Runs(r) if *r > 0 => r * (*n as i64),
                _ => 0,
            })
            .sum()
    }

    pub fn boundaries(&self) -> usize {
        self.outcomes.iter().filter(|(o, _)| o.is_boundary()).map(|(_, n)| n).sum()
    }

    pub fn wickets(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(o, _)| *o == Outcome::Wicket)
            .map(|(_, n)| n)
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LengthSummary {
    pub taxonomy: TaxonomyKind,
    pub bands: Vec<BandTally>,
    pub total: usize,
}

impl LengthSummary {
    /// One tally per band, in band order, including empty bands.
    pub fn tally(taxonomy: &Taxonomy, deliveries: &[PlotRow]) -> Self {
        let mut bands: Vec<BandTally> = taxonomy
            .bands
            .iter()
            .map(|b| BandTally { label: b.label, color: b.color, total: 0, outcomes: Vec::new() })
            .collect();

        for d in deliveries {
            let t = &mut bands[taxonomy.classify_index(d.longitudinal())];
            t.total += 1;
            let o = d.outcome();
            match t.outcomes.iter_mut().find(|(k, _)| *k == o) {
                Some((_, n)) => *n += 1,
                None => t.outcomes.push((o, 1)),
            }
        }

        Self { taxonomy: taxonomy.kind, bands, total: deliveries.len() }
    }

    pub fn get(&self, label: &str) -> Option<&BandTally> {
        self.bands.iter().find(|b| b.label == label)
    }
}

impl fmt::Display for LengthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16}{:>6}{:>6}{:>6}{:>6}  outcomes", "length", "balls", "runs", "4s/6s", "wkts")?;
        for b in &self.bands {
            let detail = b
                .outcomes
                .iter()
                .map(|(o, n)| format!("{o}×{n}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                f,
                "{:<16}{:>6}{:>6}{:>6}{:>6}  {}",
                b.label, b.total, b.runs(), b.boundaries(), b.wickets(), detail
            )?;
        }
        write!(f, "{:<16}{:>6}", "total", self.total)
    }
}
