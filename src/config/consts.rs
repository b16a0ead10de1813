// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://polls.iplt20.com";
pub const DATA_ENDPOINT: &str = "/widget/welcome/get_data";
pub const REQUEST_TIMEOUT_SECS: u64 = 100;
pub const USER_AGENT: &str = concat!("pitch_scrape/", env!("CARGO_PKG_VERSION"));

// Local store
pub const LOG_FILE: &str = ".store/debug.log";

// Scrape grid. Balls run past six to leave room for wides and no-balls.
pub const INNINGS: (u32, u32) = (1, 2);
pub const OVERS: (u32, u32) = (1, 20);
pub const BALLS: (u32, u32) = (1, 9);
pub const MAX_SLOT_INDEX: u32 = 999;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_PREFIX: &str = "match_";

// Plot
pub const DEFAULT_PACE_BALL_TYPE: &str = "Seam";
pub const DEFAULT_SPIN_BALL_TYPE: &str = "Spin";
