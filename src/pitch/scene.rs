// src/pitch/scene.rs
//
// A pitch map as a flat list of drawing primitives in plot coordinates.
// Renderers map plot space onto their canvas and paint in order.

use crate::data::PlotRow;

use super::color::Rgb;
use super::geometry::*;
use super::outcome::Outcome;
use super::taxonomy::Taxonomy;

pub type Pt = (f64, f64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Text ends at the point.
    RightCenter,
    LeftCenter,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Axis-aligned filled rectangle, corners in any order.
    Rect { min: Pt, max: Pt, color: Rgb, alpha: f32 },
    Line { from: Pt, to: Pt, width: f32, color: Rgb, alpha: f32, dashed: bool },
    Text { at: Pt, text: String, anchor: Anchor, size: f32, color: Rgb },
    Point { at: Pt, color: Rgb, alpha: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

#[derive(Clone, Debug)]
pub struct PitchScene {
    pub title: String,
    pub x_range: Pt,
    pub y_range: Pt,
    pub background: Rgb,
    pub primitives: Vec<Primitive>,
    pub legend: Vec<LegendEntry>,
    pub y_ticks: Vec<(f64, String)>,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

/// What goes on one pitch map.
pub struct Panel<'a> {
    pub batter: &'a str,
    pub caption: &'a str,
    pub taxonomy: &'static Taxonomy,
    pub wide_guides: bool,
    pub deliveries: &'a [PlotRow],
}

const BAND_ALPHA: f32 = 0.1;
const POINT_ALPHA: f32 = 0.6;
const GUIDE_ALPHA: f32 = 0.5;
const BAND_LABEL_SIZE: f32 = 8.0;

fn line(from: Pt, to: Pt, width: f32) -> Primitive {
    Primitive::Line { from, to, width, color: Rgb::BLACK, alpha: 1.0, dashed: false }
}

fn guide(x: f64, color: Rgb) -> Primitive {
    Primitive::Line {
        from: (x, 0.0),
        to: (x, PITCH_LENGTH),
        width: 1.0,
        color,
        alpha: GUIDE_ALPHA,
        dashed: true,
    }
}

/// Pitch outline, creases, stumps and guides. No deliveries.
pub fn pitch_outline(wide_guides: bool) -> Vec<Primitive> {
    let hw = PITCH_WIDTH / 2.0;
    let l = PITCH_LENGTH;
    let mut out = vec![
        Primitive::Rect { min: (-hw, 0.0), max: (hw, l), color: Rgb::WHITE, alpha: 1.0 },
        line((hw, 0.0), (hw, l), 1.0),
        line((-hw, 0.0), (-hw, l), 1.0),
        line((-hw, 0.0), (hw, 0.0), 1.0),
        line((-hw, l), (hw, l), 1.0),
        line((-CREASE_OFFSET, l - CREASE_OFFSET), (CREASE_OFFSET, l - CREASE_OFFSET), 1.0),
        line((-CREASE_OFFSET, CREASE_OFFSET), (CREASE_OFFSET, CREASE_OFFSET), 1.0),
    ];

    for x in stump_xs() {
        out.push(line((x, l - STUMP_MARK), (x, l + STUMP_MARK), 2.0));
        out.push(line((x, -STUMP_MARK), (x, STUMP_MARK), 2.0));
        out.push(guide(x, Rgb::BLACK));
    }

    if wide_guides {
        out.push(guide(-WIDE_LINE, Rgb::RED));
        out.push(guide(WIDE_LINE, Rgb::RED));
    }
    out
}

/// Shaded length bands with their labels, full width of the axes.
pub fn length_bands(taxonomy: &Taxonomy) -> Vec<Primitive> {
    let (x0, x1) = x_limits();
    let mut out = Vec::new();
    for r in taxonomy.regions(PITCH_LENGTH) {
        let (y0, y1) = r.display_span(PITCH_LENGTH);
        out.push(Primitive::Rect { min: (x0, y0), max: (x1, y1), color: r.color, alpha: BAND_ALPHA });
        out.push(Primitive::Text {
            at: (-PITCH_WIDTH / 2.0 + AXIS_MARGIN_X, (y0 + y1) / 2.0),
            text: s!(r.label),
            anchor: Anchor::RightCenter,
            size: BAND_LABEL_SIZE,
            color: Rgb::BLACK,
        });
    }
    out
}

/// Distinct outcomes in the order they first appear.
pub fn legend(deliveries: &[PlotRow]) -> Vec<LegendEntry> {
    let mut seen: Vec<Outcome> = Vec::new();
    for d in deliveries {
        let o = d.outcome();
        if !seen.contains(&o) { seen.push(o); }
    }
    seen.into_iter()
        .map(|o| LegendEntry { label: o.to_string(), color: o.color() })
        .collect()
}

pub fn title(batter: &str, caption: &str, n: usize) -> String {
    format!("{batter} vs {caption} ({n} balls)")
}

pub fn build(panel: &Panel<'_>) -> PitchScene {
    let mut primitives = pitch_outline(panel.wide_guides);

    for d in panel.deliveries {
        let at = to_display(d.lateral(), d.longitudinal());
        primitives.push(Primitive::Point { at, color: d.outcome().color(), alpha: POINT_ALPHA });
    }

    primitives.extend(length_bands(panel.taxonomy));

    PitchScene {
        title: title(panel.batter, panel.caption, panel.deliveries.len()),
        x_range: x_limits(),
        y_range: y_limits(),
        background: Rgb::GREEN,
        primitives,
        legend: legend(panel.deliveries),
        y_ticks: y_ticks(),
        x_label: "Width (m)",
        y_label: "Length (meters)",
    }
}
