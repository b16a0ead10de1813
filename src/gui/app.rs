// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{
        mpsc::{self, Receiver, TryRecvError},
        Arc, Mutex, PoisonError,
    },
    thread,
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::sanitize::same_name,
    data::{self, PlotRow},
    error::SelectError,
    scrape::{self, ScrapeSummary},
    store::{self, DeliverySheet},
};

use super::{components, progress::GuiProgress};

type ScrapeResult = Result<ScrapeSummary, crate::error::Error>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Pitch Scrape",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// A delivery table loaded for one panel, with the choices it offers.
#[derive(Default)]
pub struct Loaded {
    pub sheet: Option<DeliverySheet>,
    pub batters: Vec<String>,
    pub ball_types: Vec<String>,
}

impl Loaded {
    fn new(sheet: DeliverySheet) -> Self {
        Self {
            batters: data::batters(&sheet.deliveries),
            ball_types: data::ball_types(&sheet.deliveries),
            sheet: Some(sheet),
        }
    }
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // text fields mapped onto options on use
    pub match_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,
    /// One per panel. A blank right field follows the left table.
    pub file_text: [String; 2],

    // loaded delivery tables, one per panel
    pub loaded: [Loaded; 2],

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    scrape_rx: Option<Receiver<ScrapeResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.scrape.out_path().to_string_lossy().into_owned();
        logf!("Init: window={}x{}", state.gui.window_w, state.gui.window_h);
        Self {
            state,
            match_text: s!(),
            out_path_text,
            out_path_dirty: false,
            file_text: [s!(), s!()],
            loaded: Default::default(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            scrape_rx: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.scrape_rx.is_some()
    }

    /// Match id changed: follow it with the default output path unless the user typed one.
    pub fn set_match_id(&mut self, id: &str) {
        self.state.options.scrape.match_id = s!(id.trim());
        if !self.out_path_dirty {
            self.out_path_text = self.state.options.scrape.out_path().to_string_lossy().into_owned();
        }
    }

    /// Start a scrape on a worker thread. The UI polls for the result.
    pub fn start_scrape(&mut self) {
        if self.running() {
            return;
        }
        let opts = &mut self.state.options.scrape;
        opts.out = if self.out_path_dirty && !self.out_path_text.trim().is_empty() {
            Some(PathBuf::from(self.out_path_text.trim()))
        } else {
            None
        };
        if opts.match_id.is_empty() {
            self.status("Enter a match id first");
            return;
        }

        let opts = opts.clone();
        let status = self.status.clone();
        let (tx, rx) = mpsc::channel();

        logf!("Scrape: Begin (gui) match={}", opts.match_id);
        thread::spawn(move || {
            let mut prog = GuiProgress::new(status);
            let res = scrape::collect_match(&opts, Some(&mut prog));
            let _ = tx.send(res);
        });
        self.scrape_rx = Some(rx);
    }

    fn poll_scrape(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.scrape_rx else { return };
        match rx.try_recv() {
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            Err(TryRecvError::Disconnected) => {
                loge!("Scrape: worker ended without a result");
                self.status("Scrape aborted");
                self.scrape_rx = None;
            }
            Ok(res) => {
                self.scrape_rx = None;
                self.finish_scrape(res);
            }
        }
    }

    fn finish_scrape(&mut self, res: ScrapeResult) {
        match res {
            Ok(summary) => {
                let msg = format!(
                    "Wrote {} row(s) to {} ({} empty, {} unreachable, {} malformed)",
                    summary.written,
                    summary.out.display(),
                    summary.empty,
                    summary.skipped,
                    summary.failed.len()
                );
                logf!("Scrape: {msg}");
                if summary.written > 0 {
                    self.file_text[0] = summary.out.to_string_lossy().into_owned();
                    self.load_file(0);
                }
                self.status(msg);
            }
            Err(e) => {
                loge!("Scrape: Error: {e}");
                self.status(format!("Error: {e}"));
            }
        }
    }

    /// Which loaded table feeds panel `ix`.
    pub fn source(&self, ix: usize) -> usize {
        let follows_left = ix > 0
            && self.loaded.get(ix).is_some_and(|l| l.sheet.is_none())
            && self.file_text.get(ix).is_some_and(|t| t.trim().is_empty());
        if follows_left { 0 } else { ix }
    }

    pub fn loaded_for(&self, ix: usize) -> Option<&Loaded> {
        self.loaded.get(self.source(ix))
    }

    /// Load the delivery table named in panel `ix`'s file field.
    pub fn load_file(&mut self, ix: usize) {
        let Some(text) = self.file_text.get(ix) else { return };
        let path = PathBuf::from(text.trim());

        if ix > 0 && path.as_os_str().is_empty() {
            self.loaded[ix] = Loaded::default();
            self.sync_sources();
            self.status("Right panel follows the left table");
            return;
        }

        match store::load_sheet(&path) {
            Ok(sheet) => {
                self.status(format!(
                    "Loaded {} deliveries ({} unusable rows)",
                    sheet.deliveries.len(),
                    sheet.skipped
                ));
                self.loaded[ix] = Loaded::new(sheet);
                self.state.options.plot.panels[ix].file = path;
                self.sync_sources();
            }
            Err(e) => {
                loge!("Load: {e}");
                self.status(format!("Error: {e}"));
                self.loaded[ix] = Loaded::default();
            }
        }
    }

    /// Point a following panel at the left file, and keep every batter among
    /// the names its table offers. The right side prefers the left's batter.
    fn sync_sources(&mut self) {
        for ix in 0..self.loaded.len() {
            let src = self.source(ix);
            let left = &self.state.options.plot.panels[0];
            let (left_file, left_batter) = (left.file.clone(), left.batter.clone());

            let names = &self.loaded[src].batters;
            let panel = &mut self.state.options.plot.panels[ix];
            if src != ix {
                panel.file = left_file;
            }
            if names.iter().any(|b| same_name(b, &panel.batter)) {
                continue;
            }
            panel.batter = names
                .iter()
                .find(|b| ix > 0 && same_name(b, &left_batter))
                .or(names.first())
                .cloned()
                .unwrap_or_default();
        }
    }

    pub fn sheet_for(&self, ix: usize) -> Option<&DeliverySheet> {
        self.loaded_for(ix)?.sheet.as_ref()
    }

    /// Deliveries for panel `ix`, or why there are none.
    pub fn panel_rows(&self, ix: usize) -> Option<Result<Vec<PlotRow>, SelectError>> {
        let sheet = self.sheet_for(ix)?;
        let panel = self.state.options.plot.panels.get(ix)?;
        Some(data::select(&sheet.deliveries, panel.selection()))
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_scrape(ctx);

        egui::TopBottomPanel::top("scrape").show(ctx, |ui| {
            components::scrape_bar::draw(ui, self);
        });

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            components::controls::draw(ui, self);
        });

        if self.state.gui.show_table {
            egui::TopBottomPanel::bottom("table")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    components::data_table::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let app = &*self;
            ui.columns(2, |cols| {
                for (ix, col) in cols.iter_mut().enumerate() {
                    components::pitch_view::draw(col, app, ix);
                }
            });
        });
    }
}
