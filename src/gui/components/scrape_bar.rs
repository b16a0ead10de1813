// src/gui/components/scrape_bar.rs

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Match:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.match_text).desired_width(120.0))
            .changed()
        {
            let id = app.match_text.clone();
            app.set_match_id(&id);
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        ui.checkbox(&mut app.state.options.scrape.resume, "Resume");

        // SCRAPE
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        let button = egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong()).fill(red);
        if ui.add_enabled(!app.running(), button).clicked() {
            app.start_scrape();
        }
        if app.running() {
            ui.spinner();
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}
