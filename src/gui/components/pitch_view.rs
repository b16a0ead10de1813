// src/gui/components/pitch_view.rs
//
// Paints a PitchScene with the egui painter. Plot y grows upward.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use crate::gui::app::App;
use crate::pitch::{self, scene::Anchor, LengthSummary, Panel, PitchScene, Primitive, Rgb};

const AXIS_GUTTER: f32 = 28.0;
const POINT_RADIUS: f32 = 4.0;
const DASH: f32 = 6.0;
const GAP: f32 = 4.0;

fn color(c: Rgb, alpha: f32) -> Color32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(c.0, c.1, c.2, a)
}

/// Plot space → screen space inside `rect`.
struct Frame {
    rect: Rect,
    x: (f64, f64),
    y: (f64, f64),
}

impl Frame {
    fn fit(avail: Rect, x: (f64, f64), y: (f64, f64)) -> Self {
        let (dx, dy) = ((x.1 - x.0) as f32, (y.1 - y.0) as f32);
        let scale = (avail.width() / dx).min(avail.height() / dy).max(0.0);
        let size = Vec2::new(dx * scale, dy * scale);
        let rect = Rect::from_center_size(avail.center(), size);
        Self { rect, x, y }
    }

    fn pos(&self, (x, y): (f64, f64)) -> Pos2 {
        let fx = ((x - self.x.0) / (self.x.1 - self.x.0)) as f32;
        let fy = ((y - self.y.0) / (self.y.1 - self.y.0)) as f32;
        Pos2::new(
            self.rect.left() + fx * self.rect.width(),
            self.rect.bottom() - fy * self.rect.height(),
        )
    }
}

fn paint(painter: &egui::Painter, frame: &Frame, scene: &PitchScene) {
    painter.rect_filled(frame.rect, 0.0, color(scene.background, 1.0));

    for p in &scene.primitives {
        match p {
            Primitive::Rect { min, max, color: c, alpha } => {
                let r = Rect::from_two_pos(frame.pos(*min), frame.pos(*max));
                painter.rect_filled(r, 0.0, color(*c, *alpha));
            }
            Primitive::Line { from, to, width, color: c, alpha, dashed } => {
                let pts = [frame.pos(*from), frame.pos(*to)];
                let stroke = Stroke::new(*width, color(*c, *alpha));
                if *dashed {
                    painter.extend(Shape::dashed_line(&pts, stroke, DASH, GAP));
                } else {
                    painter.line_segment(pts, stroke);
                }
            }
            Primitive::Text { at, text, anchor, size, color: c } => {
                let align = match anchor {
                    Anchor::RightCenter => Align2::RIGHT_CENTER,
                    Anchor::LeftCenter => Align2::LEFT_CENTER,
                };
                painter.text(frame.pos(*at), align, text, FontId::proportional(*size + 2.0), color(*c, 1.0));
            }
            Primitive::Point { at, color: c, alpha } => {
                painter.circle_filled(frame.pos(*at), POINT_RADIUS, color(*c, *alpha));
            }
        }
    }

    // Length ticks down the left edge.
    let text = Color32::GRAY;
    for (y, label) in &scene.y_ticks {
        let p = frame.pos((frame.x.0, *y));
        painter.line_segment([p, p - Vec2::new(4.0, 0.0)], Stroke::new(1.0, text));
        painter.text(p - Vec2::new(6.0, 0.0), Align2::RIGHT_CENTER, label, FontId::proportional(10.0), text);
    }
}

fn legend(ui: &mut egui::Ui, scene: &PitchScene) {
    ui.horizontal_wrapped(|ui| {
        for e in &scene.legend {
            let (r, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().circle_filled(r.center(), 4.0, color(e.color, 1.0));
            ui.label(&e.label);
        }
    });
}

pub fn draw(ui: &mut egui::Ui, app: &App, ix: usize) {
    let Some(opts) = app.state.options.plot.panels.get(ix) else { return };

    let rows = match app.panel_rows(ix) {
        None => {
            ui.centered_and_justified(|ui| ui.label("Load a delivery table to draw pitch maps"));
            return;
        }
        Some(Err(e)) => {
            ui.heading(format!("{} vs {}", opts.batter, opts.caption));
            ui.centered_and_justified(|ui| ui.label(e.to_string()));
            return;
        }
        Some(Ok(rows)) => rows,
    };

    let panel = Panel {
        batter: &opts.batter,
        caption: &opts.caption,
        taxonomy: opts.taxonomy.taxonomy(),
        wide_guides: opts.wide_guides,
        deliveries: &rows,
    };
    let scene = pitch::build(&panel);

    ui.vertical_centered(|ui| ui.heading(&scene.title));
    legend(ui, &scene);

    let summary = LengthSummary::tally(panel.taxonomy, &rows);
    let summary_h = 18.0 * (summary.bands.len() as f32 + 1.0);

    let avail = ui.available_rect_before_wrap();
    let plot_area = Rect::from_min_max(
        avail.min + Vec2::new(AXIS_GUTTER, 0.0),
        Pos2::new(avail.max.x, (avail.max.y - summary_h).max(avail.min.y)),
    );
    let (_, painter) = ui.allocate_painter(plot_area.size() + Vec2::new(AXIS_GUTTER, 0.0), Sense::hover());
    let frame = Frame::fit(plot_area, scene.x_range, scene.y_range);
    paint(&painter, &frame, &scene);

    ui.small(format!("{} / {}", scene.y_label, scene.x_label));
    egui::Grid::new(("lengths", ix)).striped(true).show(ui, |ui| {
        for b in &summary.bands {
            ui.colored_label(color(b.color, 1.0), b.label);
            ui.label(format!("{} balls", b.total));
            ui.label(format!("{} runs", b.runs()));
            ui.label(format!("{} 4s/6s", b.boundaries()));
            ui.label(format!("{} W", b.wickets()));
            ui.end_row();
        }
    });
}
