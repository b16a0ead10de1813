// src/scrape/grid.rs
//
// The (innings, over, ball) slots a scrape walks through.

use std::fmt;
use std::ops::RangeInclusive;

use crate::config::consts::{BALLS, INNINGS, MAX_SLOT_INDEX, OVERS};

/// One delivery position as the upstream names documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub innings: u32,
    pub over: u32,
    pub ball: u32,
}

impl Slot {
    pub const fn new(innings: u32, over: u32, ball: u32) -> Self {
        Self { innings, over, ball }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.innings, self.over, self.ball)
    }
}

/// Over-provisioned grid: there is no way to ask how many balls an over had,
/// so every over gets `balls` slots and the empty ones come back as no-data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotGrid {
    pub innings: RangeInclusive<u32>,
    pub overs: RangeInclusive<u32>,
    pub balls: RangeInclusive<u32>,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            innings: INNINGS.0..=INNINGS.1,
            overs: OVERS.0..=OVERS.1,
            balls: BALLS.0..=BALLS.1,
        }
    }
}

fn span(r: &RangeInclusive<u32>) -> usize {
    if r.is_empty() { 0 } else { (r.end() - r.start()) as usize + 1 }
}

impl SlotGrid {
    pub fn new(
        innings: RangeInclusive<u32>,
        overs: RangeInclusive<u32>,
        balls: RangeInclusive<u32>,
    ) -> Self {
        Self { innings, overs, balls }
    }

    /// Slot count, saturating at `usize::MAX` for absurd hand-built ranges.
    pub fn len(&self) -> usize {
        span(&self.innings)
            .saturating_mul(span(&self.overs))
            .saturating_mul(span(&self.balls))
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Slots in increasing (innings, over, ball) order. Each call starts over.
    pub fn iter(&self) -> Slots {
        let next = if self.is_empty() {
            None
        } else {
            Some(Slot::new(*self.innings.start(), *self.overs.start(), *self.balls.start()))
        };
        Slots { grid: self.clone(), next, remaining: self.len() }
    }
}

impl<'a> IntoIterator for &'a SlotGrid {
    type Item = Slot;
    type IntoIter = Slots;
    fn into_iter(self) -> Slots { self.iter() }
}

/// Lazy walk over a `SlotGrid`.
#[derive(Clone, Debug)]
pub struct Slots {
    grid: SlotGrid,
    next: Option<Slot>,
    remaining: usize,
}

impl Slots {
    fn advance(&self, s: Slot) -> Option<Slot> {
        let g = &self.grid;
        if s.ball < *g.balls.end() {
            return Some(Slot { ball: s.ball + 1, ..s });
        }
        if s.over < *g.overs.end() {
            return Some(Slot { over: s.over + 1, ball: *g.balls.start(), ..s });
        }
        if s.innings < *g.innings.end() {
            return Some(Slot::new(s.innings + 1, *g.overs.start(), *g.balls.start()));
        }
        None
    }
}

impl Iterator for Slots {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let cur = self.next?;
        self.next = self.advance(cur);
        self.remaining = self.remaining.saturating_sub(1);
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Slots {}

/// "3" → 3..=3, "1-20" → 1..=20. Bounds run from 1 to `MAX_SLOT_INDEX`.
pub fn parse_range(s: &str) -> Result<RangeInclusive<u32>, String> {
    let s = s.trim();
    let parse = |t: &str| t.trim().parse::<u32>().map_err(|e| format!("{t:?}: {e}"));
    let (a, b) = match s.split_once('-') {
        Some((a, b)) => (parse(a)?, parse(b)?),
        None => { let v = parse(s)?; (v, v) }
    };
    if a == 0 || a > b {
        return Err(format!("Invalid range: {s}"));
    }
    if b > MAX_SLOT_INDEX {
        return Err(format!("Range end {b} is past {MAX_SLOT_INDEX}"));
    }
    Ok(a..=b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_parsing() {
        assert_eq!(parse_range("1-20").unwrap(), 1..=20);
        assert_eq!(parse_range(" 2 ").unwrap(), 2..=2);
        assert!(parse_range("5-3").is_err());
        assert!(parse_range("0-3").is_err());
        assert!(parse_range("x").is_err());
        assert_eq!(parse_range("1-999").unwrap(), 1..=999);
        assert!(parse_range("1-1000").is_err());
        assert!(parse_range("1-4294967295").is_err());
    }

    #[test]
    fn huge_grid_len_saturates() {
        let g = SlotGrid::new(1..=u32::MAX, 1..=u32::MAX, 1..=u32::MAX);
        assert_eq!(g.len(), usize::MAX);
        assert!(!g.is_empty());
        assert_eq!(g.iter().next(), Some(Slot::new(1, 1, 1)));
    }
}
