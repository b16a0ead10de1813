// src/pitch/geometry.rs
//
// Pitch dimensions (meters) and the data → plot coordinate contract.
//
// Data: bounce_x = distance from the batting stumps, bounce_y = lateral offset.
// Plot: x = lateral, y = PITCH_LENGTH - bounce_x, so the batter sits at the top.

pub const PITCH_LENGTH: f64 = 20.12;
pub const PITCH_WIDTH: f64 = 3.05;

/// Popping crease distance from each set of stumps; also its half-span across.
pub const CREASE_OFFSET: f64 = 1.22;

/// Outer stump to outer stump.
pub const STUMP_SPREAD: f64 = 0.2286;
pub const STUMP_MARK: f64 = 0.1;

/// Lateral offset of the wide guide lines.
pub const WIDE_LINE: f64 = 0.89;

/// How far behind the stumps the full-toss band reaches.
pub const FULL_TOSS_DEPTH: f64 = 1.0;

pub const AXIS_MARGIN_X: f64 = 0.5;
pub const AXIS_MARGIN_Y: f64 = 1.0;
pub const TICK_STEP: f64 = 2.0;

/// (lateral, longitudinal) in data → (x, y) in plot space.
pub fn to_display(lateral: f64, longitudinal: f64) -> (f64, f64) {
    (lateral, PITCH_LENGTH - longitudinal)
}

/// Plot y back to meters from the batting stumps.
pub fn from_display_y(y: f64) -> f64 {
    PITCH_LENGTH - y
}

pub fn x_limits() -> (f64, f64) {
    (-PITCH_WIDTH / 2.0 - AXIS_MARGIN_X, PITCH_WIDTH / 2.0 + AXIS_MARGIN_X)
}

pub fn y_limits() -> (f64, f64) {
    (-AXIS_MARGIN_Y, PITCH_LENGTH + AXIS_MARGIN_Y)
}

pub fn stump_xs() -> [f64; 3] {
    [-STUMP_SPREAD / 2.0, 0.0, STUMP_SPREAD / 2.0]
}

/// Y ticks measured from the batting end: (plot y, label).
/// Labels run 0, 2, 4, … while the ticks themselves sit at `PITCH_LENGTH - label`.
pub fn y_ticks() -> Vec<(f64, String)> {
    let end = PITCH_LENGTH + TICK_STEP;
    let mut out = Vec::new();
    let mut i = 0u32;
    loop {
        let t = f64::from(i) * TICK_STEP;
        if t >= end { break; }
        out.push((PITCH_LENGTH - t, format!("{t:.0}")));
        i += 1;
    }
    out
}
