// src/gui/components/data_table.rs
//
// Rows of the loaded table behind one panel's selection. Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const NARROW: f32 = 60.0;
const WIDE: f32 = 140.0;

/// Text-heavy columns get the wide default.
fn initial_width(header: &str) -> f32 {
    match header {
        "batting_team" | "bowling_team" | "batter" | "nonstriker" | "bowler" | "shot_type_additional" => WIDE,
        _ => NARROW,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let ix = app.state.gui.table_panel;
    let Some(sheet) = app.sheet_for(ix) else {
        ui.label("No table loaded");
        return;
    };
    let rows = match app.panel_rows(ix) {
        Some(Ok(rows)) => rows,
        Some(Err(e)) => {
            ui.label(e.to_string());
            return;
        }
        None => return,
    };

    let headers = &sheet.dataset.headers;
    let avail_h = ui.available_height();

    egui::ScrollArea::horizontal()
        .id_salt("delivery_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for h in headers {
                table = table.column(Column::initial(initial_width(h)).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in headers {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(h).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let Some(cells) = rows.get(row.index()).and_then(|r| sheet.dataset.rows.get(r.row)) else {
                            return;
                        };
                        for ci in 0..headers.len() {
                            let cell = cells.get(ci).map(String::as_str).unwrap_or("");
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                    ui.label(cell);
                                });
                            });
                        }
                    });
                });
        });
}
