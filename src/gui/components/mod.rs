// src/gui/components/mod.rs
pub mod controls;
pub mod data_table;
pub mod pitch_view;
pub mod scrape_bar;
