// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::core::sanitize::sanitize_file_stem;
use crate::data::Selection;
use crate::pitch::TaxonomyKind;
use crate::scrape::SlotGrid;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub plot: PlotOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Upstream match identifier, the last segment of the document name.
    pub match_id: String,
    pub base_url: String,
    pub grid: SlotGrid,
    /// Explicit output file. `None` → `out/match_<id>.csv`.
    pub out: Option<PathBuf>,
    /// Append to an existing table whose header matches instead of truncating it.
    pub resume: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            match_id: s!(),
            base_url: s!(BASE_URL),
            grid: SlotGrid::default(),
            out: None,
            resume: false,
        }
    }
}

impl ScrapeOptions {
    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            Some(p) => p.clone(),
            None => default_out_path(&self.match_id),
        }
    }
}

pub fn default_out_path(match_id: &str) -> PathBuf {
    let stem = sanitize_file_stem(&format!("{DEFAULT_FILE_PREFIX}{match_id}"), "match");
    PathBuf::from(DEFAULT_OUT_DIR).join(format!("{stem}.csv"))
}

/// One side of the pitch map: which deliveries to show and how to band them.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelOptions {
    /// Delivery table this side reads.
    pub file: PathBuf,
    pub batter: String,
    pub ball_type: String,
    pub taxonomy: TaxonomyKind,
    /// Shown after "vs" in the panel title.
    pub caption: String,
    /// Dashed guides at the wide lines.
    pub wide_guides: bool,
}

impl PanelOptions {
    pub fn pace() -> Self {
        Self {
            file: PathBuf::new(),
            batter: s!(),
            ball_type: s!(DEFAULT_PACE_BALL_TYPE),
            taxonomy: TaxonomyKind::Pace,
            caption: s!("PACE"),
            wide_guides: false,
        }
    }

    pub fn spin() -> Self {
        Self {
            file: PathBuf::new(),
            batter: s!(),
            ball_type: s!(DEFAULT_SPIN_BALL_TYPE),
            taxonomy: TaxonomyKind::Spin,
            caption: s!("SPIN"),
            wide_guides: true,
        }
    }

    pub fn selection(&self) -> Selection<'_> {
        Selection { batter: &self.batter, ball_type: &self.ball_type }
    }

    /// Same ball type, bands and guides as `base`, keeping this side's file and batter.
    pub fn restyle(&mut self, base: &PanelOptions) {
        self.ball_type = base.ball_type.clone();
        self.taxonomy = base.taxonomy;
        self.caption = base.caption.clone();
        self.wide_guides = base.wide_guides;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    pub panels: [PanelOptions; 2],
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { panels: [PanelOptions::pace(), PanelOptions::spin()] }
    }
}

impl PlotOptions {
    /// The right side reads the left side's file and batter unless given its own.
    pub fn inherit_source(&mut self) {
        let [left, right] = &mut self.panels;
        if right.file.as_os_str().is_empty() {
            right.file = left.file.clone();
        }
        if right.batter.trim().is_empty() {
            right.batter = left.batter.clone();
        }
    }
}
