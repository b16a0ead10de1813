// src/pitch/outcome.rs
use std::fmt;

use super::color::Rgb;

/// Scoring result of one delivery as the table encodes it in `runs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// `runs == -1`
    Wicket,
    Runs(i64),
}

impl Outcome {
    pub const DEFAULT_COLOR: Rgb = Rgb::GREY;

    pub fn from_runs(runs: i64) -> Self {
        if runs == -1 { Outcome::Wicket } else { Outcome::Runs(runs) }
    }

    pub fn color(self) -> Rgb {
        match self {
            Outcome::Wicket => Rgb::BROWN,
            Outcome::Runs(0) => Rgb::GREEN,
            Outcome::Runs(1) => Rgb::BLUE,
            Outcome::Runs(2 | 3) => Rgb::CYAN,
            Outcome::Runs(4) => Rgb::RED,
            Outcome::Runs(6) => Rgb::MAGENTA,
            Outcome::Runs(_) => Self::DEFAULT_COLOR,
        }
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, Outcome::Runs(4 | 6))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Wicket => f.write_str("W"),
            Outcome::Runs(n) => write!(f, "{n}"),
        }
    }
}
