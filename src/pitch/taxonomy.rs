// src/pitch/taxonomy.rs
//
// Length categories. One ordered band list per taxonomy drives both the
// classifier and the shaded regions, so the two cannot disagree.

use std::fmt;
use std::str::FromStr;

use super::color::Rgb;
use super::geometry::FULL_TOSS_DEPTH;

/// A named zone along the pitch. `upper` is exclusive; the last band's is +∞.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthBand {
    pub label: &'static str,
    pub upper: f64,
    pub color: Rgb,
}

const fn band(label: &'static str, upper: f64, color: Rgb) -> LengthBand {
    LengthBand { label, upper, color }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TaxonomyKind {
    #[default]
    Pace,
    Spin,
}

impl TaxonomyKind {
    pub const ALL: [TaxonomyKind; 2] = [TaxonomyKind::Pace, TaxonomyKind::Spin];

    pub fn taxonomy(self) -> &'static Taxonomy {
        match self {
            TaxonomyKind::Pace => &PACE,
            TaxonomyKind::Spin => &SPIN,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TaxonomyKind::Pace => "pace",
            TaxonomyKind::Spin => "spin",
        }
    }
}

impl fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TaxonomyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pace" | "seam" => Ok(TaxonomyKind::Pace),
            "spin" => Ok(TaxonomyKind::Spin),
            other => Err(format!("Unknown taxonomy: {other} (expected pace or spin)")),
        }
    }
}

#[derive(Debug)]
pub struct Taxonomy {
    pub kind: TaxonomyKind,
    pub bands: &'static [LengthBand],
}

pub static PACE: Taxonomy = Taxonomy {
    kind: TaxonomyKind::Pace,
    bands: &[
        band("full toss", 0.0, Rgb::GREY),
        band("yorker", 2.0, Rgb::GREEN),
        band("slot", 4.0, Rgb::CYAN),
        band("full", 6.0, Rgb::BLUE),
        band("good", 8.0, Rgb::PURPLE),
        band("back of length", 10.0, Rgb::ORANGE),
        band("short", f64::INFINITY, Rgb::RED),
    ],
};

// Spin lands shorter: no separate "full", and short starts at 7.
pub static SPIN: Taxonomy = Taxonomy {
    kind: TaxonomyKind::Spin,
    bands: &[
        band("full toss", 0.0, Rgb::GREY),
        band("yorker", 2.0, Rgb::GREEN),
        band("slot", 4.0, Rgb::CYAN),
        band("good", 6.0, Rgb::PURPLE),
        band("back of length", 7.0, Rgb::ORANGE),
        band("short", f64::INFINITY, Rgb::RED),
    ],
};

/// A band as a concrete interval along the pitch, `[lo, hi)` in meters from the batting stumps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub label: &'static str,
    pub color: Rgb,
    pub lo: f64,
    pub hi: f64,
}

impl Region {
    /// Vertical extent in plot coordinates, where y runs from the bowler's end.
    pub fn display_span(&self, pitch_length: f64) -> (f64, f64) {
        (pitch_length - self.hi, pitch_length - self.lo)
    }

    pub fn contains(&self, y: f64) -> bool {
        self.lo <= y && y < self.hi
    }
}

impl Taxonomy {
    /// Index of the first band whose upper bound is above `y`.
    /// Values that compare false against everything (NaN) land in the last band.
    pub fn classify_index(&self, y: f64) -> usize {
        self.bands
            .iter()
            .position(|b| y < b.upper)
            .unwrap_or(self.bands.len() - 1)
    }

    pub fn classify(&self, y: f64) -> &'static LengthBand {
        &self.bands[self.classify_index(y)]
    }

    /// Lower bound of band `i`; the first band starts `FULL_TOSS_DEPTH` behind the stumps.
    pub fn lower(&self, i: usize) -> f64 {
        if i == 0 { -FULL_TOSS_DEPTH } else { self.bands[i - 1].upper }
    }

    pub fn band(&self, label: &str) -> Option<&'static LengthBand> {
        self.bands.iter().find(|b| b.label == label)
    }

    /// Bands clipped to a pitch of `pitch_length`: full toss `[-1, 0)` … last band up to the far stumps.
    pub fn regions(&self, pitch_length: f64) -> Vec<Region> {
        self.bands
            .iter()
            .enumerate()
            .map(|(i, b)| Region {
                label: b.label,
                color: b.color,
                lo: self.lower(i),
                hi: b.upper.min(pitch_length),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_increase() {
        for t in [&PACE, &SPIN] {
            assert!(t.bands.windows(2).all(|w| w[0].upper < w[1].upper), "{:?}", t.kind);
            assert!(t.bands.last().unwrap().upper.is_infinite());
        }
    }

    #[test]
    fn nan_goes_last() {
        assert_eq!(PACE.classify(f64::NAN).label, "short");
    }
}
