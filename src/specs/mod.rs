// src/specs/mod.rs
//! # Document "specs"
//!
//! Where the ground truth lives in an upstream document, and how to lift it
//! into our own types.
//!
//! ## What lives here
//! - **Key paths** into the ball-tracking JSON (`match.delivery.trajectory…`).
//! - **The output schema**: the fixed, order-sensitive column list and the
//!   record → row projection.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`) and **iteration over slots** (`scrape`).
//! - **Writing** (`file::TableWriter`).
//!
//! ## Conventions & invariants
//! - Extraction is all-or-nothing. A document with holes yields one
//!   `ExtractError` naming every hole, never a partial record.
//! - `COLUMNS` order is a contract with downstream tooling; append-only.
pub mod columns;
pub mod delivery;

pub use columns::{COLUMNS, COLUMN_COUNT};
pub use delivery::{extract, ball_id, DeliveryRecord, DeliveryNumber, Hand};
