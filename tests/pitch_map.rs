// tests/pitch_map.rs
use pitch_scrape::data::PlotRow;
use pitch_scrape::pitch::{
    self,
    geometry::{self, PITCH_LENGTH, PITCH_WIDTH, WIDE_LINE},
    LengthSummary, Outcome, Panel, Primitive, Rgb, TaxonomyKind, PACE, SPIN,
};

fn delivery(bounce_x: f64, bounce_y: f64, runs: i64) -> PlotRow {
    PlotRow {
        row: 0,
        batter: "A".into(),
        ball_type: "Seam".into(),
        bounce_x,
        bounce_y,
        runs,
    }
}

#[test]
fn pace_lengths() {
    let cases = [
        (-0.5, "full toss"),
        (0.0, "yorker"),
        (1.99, "yorker"),
        (2.0, "slot"),
        (5.0, "full"),
        (7.5, "good"),
        (9.0, "back of length"),
        (10.0, "short"),
        (15.0, "short"),
    ];
    for (y, want) in cases {
        assert_eq!(PACE.classify(y).label, want, "y = {y}");
    }
}

#[test]
fn spin_lengths() {
    let cases = [
        (-0.1, "full toss"),
        (3.0, "slot"),
        (5.0, "good"),
        (6.0, "back of length"),
        (6.99, "back of length"),
        (7.0, "short"),
    ];
    for (y, want) in cases {
        assert_eq!(SPIN.classify(y).label, want, "y = {y}");
    }
    assert!(SPIN.band("full").is_none());
}

#[test]
fn regions_tile_the_pitch() {
    for t in [&PACE, &SPIN] {
        let regions = t.regions(PITCH_LENGTH);
        assert_eq!(regions.len(), t.bands.len());
        assert_eq!(regions[0].lo, -1.0);
        assert_eq!(regions.last().unwrap().hi, PITCH_LENGTH);
        for w in regions.windows(2) {
            assert_eq!(w[0].hi, w[1].lo);
        }
        // In plot space the bands cover [0, L+1].
        assert_eq!(regions[0].display_span(PITCH_LENGTH).1, PITCH_LENGTH + 1.0);
        assert_eq!(regions.last().unwrap().display_span(PITCH_LENGTH).0, 0.0);
        // Region edges are the classifier thresholds.
        for (i, r) in regions.iter().enumerate().skip(1) {
            assert_eq!(r.lo, t.bands[i - 1].upper);
        }
        // Every sample lands in exactly the region the classifier names.
        for i in 0..200 {
            let y = -1.0 + f64::from(i) * 0.1;
            let hits: Vec<_> = regions.iter().filter(|r| r.contains(y)).collect();
            assert_eq!(hits.len(), 1, "y = {y}");
            assert_eq!(hits[0].label, t.classify(y).label);
        }
    }
}

#[test]
fn taxonomy_kind_parses() {
    assert_eq!("Spin".parse::<TaxonomyKind>().unwrap(), TaxonomyKind::Spin);
    assert_eq!("seam".parse::<TaxonomyKind>().unwrap(), TaxonomyKind::Pace);
    assert!("medium".parse::<TaxonomyKind>().is_err());
    assert_eq!(TaxonomyKind::Spin.taxonomy().kind, TaxonomyKind::Spin);
}

#[test]
fn outcome_colors() {
    assert_eq!(Outcome::from_runs(-1), Outcome::Wicket);
    assert_eq!(Outcome::Wicket.color(), Rgb::BROWN);
    assert_eq!(Outcome::from_runs(0).color(), Rgb::GREEN);
    assert_eq!(Outcome::from_runs(1).color(), Rgb::BLUE);
    assert_eq!(Outcome::from_runs(2).color(), Rgb::CYAN);
    assert_eq!(Outcome::from_runs(3).color(), Rgb::CYAN);
    assert_eq!(Outcome::from_runs(4).color(), Rgb::RED);
    assert_eq!(Outcome::from_runs(6).color(), Rgb::MAGENTA);
    assert_eq!(Outcome::from_runs(5).color(), Outcome::DEFAULT_COLOR);
    assert_eq!(Outcome::from_runs(-2).color(), Outcome::DEFAULT_COLOR);
    assert_eq!(Outcome::from_runs(-1).to_string(), "W");
}

#[test]
fn y_ticks_count_from_the_batting_end() {
    let ticks = geometry::y_ticks();
    assert_eq!(ticks.len(), 12);
    assert_eq!(ticks[0], (PITCH_LENGTH, "0".to_string()));
    assert_eq!(ticks[11].1, "22");
    assert!((ticks[11].0 - (PITCH_LENGTH - 22.0)).abs() < 1e-9);
}

#[test]
fn scene_places_points_and_guides() {
    let rows = vec![delivery(6.0, 0.2, 4), delivery(1.0, -0.3, -1), delivery(6.5, 0.0, 4)];
    let panel = Panel {
        batter: "A",
        caption: "SPIN",
        taxonomy: &SPIN,
        wide_guides: true,
        deliveries: &rows,
    };
    let scene = pitch::build(&panel);

    assert_eq!(scene.title, "A vs SPIN (3 balls)");
    assert_eq!(scene.x_range, (-PITCH_WIDTH / 2.0 - 0.5, PITCH_WIDTH / 2.0 + 0.5));
    assert_eq!(scene.y_range, (-1.0, PITCH_LENGTH + 1.0));

    let points: Vec<_> = scene
        .primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Point { at, color, .. } => Some((*at, *color)),
            _ => None,
        })
        .collect();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], ((0.2, PITCH_LENGTH - 6.0), Rgb::RED));
    assert_eq!(points[1], ((-0.3, PITCH_LENGTH - 1.0), Rgb::BROWN));

    let red_guides = scene
        .primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Line { from, dashed: true, color, .. }
            if *color == Rgb::RED && from.0.abs() == WIDE_LINE))
        .count();
    assert_eq!(red_guides, 2);

    // Legend in first-seen order, no duplicates.
    let legend: Vec<_> = scene.legend.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(legend, vec!["4", "W"]);
}

#[test]
fn pace_panel_has_no_wide_guides() {
    let rows = vec![delivery(6.0, 0.2, 0)];
    let panel = Panel { batter: "A", caption: "PACE", taxonomy: &PACE, wide_guides: false, deliveries: &rows };
    let scene = pitch::build(&panel);
    assert!(!scene.primitives.iter().any(|p| matches!(p, Primitive::Line { color, .. } if *color == Rgb::RED)));
}

#[test]
fn length_summary_tallies_bands() {
    let rows = vec![
        delivery(5.0, 0.0, 4),
        delivery(5.5, 0.0, 0),
        delivery(12.0, 0.0, -1),
        delivery(-0.5, 0.0, 1),
    ];
    let s = LengthSummary::tally(&PACE, &rows);
    assert_eq!(s.total, 4);
    assert_eq!(s.bands.len(), PACE.bands.len());

    let full = s.get("full").unwrap();
    assert_eq!(full.total, 2);
    assert_eq!(full.runs(), 4);
    assert_eq!(full.boundaries(), 1);
    assert_eq!(s.get("short").unwrap().wickets(), 1);
    assert_eq!(s.get("full toss").unwrap().total, 1);
    assert_eq!(s.get("good").unwrap().total, 0);
    assert!(s.to_string().contains("short"));
}
