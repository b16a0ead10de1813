// src/gui/components/controls.rs
//
// Per panel: input file, batter, ball type and length taxonomy.

use eframe::egui;

use crate::gui::app::App;
use crate::pitch::TaxonomyKind;

const SIDES: [&str; 2] = ["Left:", "Right:"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut load = None;

    for ix in 0..app.file_text.len() {
        ui.horizontal(|ui| {
            ui.label(SIDES[ix]);
            let hint = if ix == 0 { "out/match_<id>.csv" } else { "same as left" };
            let resp = ui.add(
                egui::TextEdit::singleline(&mut app.file_text[ix])
                    .font(egui::TextStyle::Monospace)
                    .desired_width(220.0)
                    .hint_text(hint),
            );
            let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Load").clicked() || enter {
                load = Some(ix);
            }

            let src = app.source(ix);
            let loaded = &app.loaded[src];
            let panel = &mut app.state.options.plot.panels[ix];

            ui.separator();
            egui::ComboBox::from_id_salt(("batter", ix))
                .selected_text(panel.batter.as_str())
                .width(180.0)
                .show_ui(ui, |ui| {
                    for b in &loaded.batters {
                        if ui.selectable_value(&mut panel.batter, b.clone(), b).changed() {
                            logf!("UI: {} batter → {}", SIDES[ix], panel.batter);
                        }
                    }
                });

            egui::ComboBox::from_id_salt(("ball_type", ix))
                .selected_text(panel.ball_type.as_str())
                .width(90.0)
                .show_ui(ui, |ui| {
                    for t in &loaded.ball_types {
                        ui.selectable_value(&mut panel.ball_type, t.clone(), t);
                    }
                });

            egui::ComboBox::from_id_salt(("taxonomy", ix))
                .selected_text(panel.taxonomy.to_string())
                .width(70.0)
                .show_ui(ui, |ui| {
                    for k in TaxonomyKind::ALL {
                        ui.selectable_value(&mut panel.taxonomy, k, k.to_string());
                    }
                });

            ui.checkbox(&mut panel.wide_guides, "Wide lines");
        });
    }

    ui.horizontal(|ui| {
        ui.checkbox(&mut app.state.gui.show_table, "Show table");
        if app.state.gui.show_table {
            ui.separator();
            ui.selectable_value(&mut app.state.gui.table_panel, 0, "Left");
            ui.selectable_value(&mut app.state.gui.table_panel, 1, "Right");
        }
    });

    if let Some(ix) = load {
        app.load_file(ix);
    }
}
