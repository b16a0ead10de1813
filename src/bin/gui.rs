// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use pitch_scrape::{config::state::GuiState, gui};

const ICON: u32 = 64;

/// A green square with a light strip and two creases.
fn app_icon() -> IconData {
    let grass = Rgba([0, 128, 0, 255]);
    let strip = Rgba([222, 204, 150, 255]);
    let white = Rgba([255, 255, 255, 255]);

    let img = RgbaImage::from_fn(ICON, ICON, |x, y| {
        let on_strip = (24..40).contains(&x) && (4..60).contains(&y);
        let crease = (18..46).contains(&x) && (y == 12 || y == 51);
        if crease {
            white
        } else if on_strip {
            strip
        } else {
            grass
        }
    });
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gs.window_w as f32, gs.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
