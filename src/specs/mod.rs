// src/specs/mod.rs
//! # Page “specs”
//!
//! Knowledge about *one* page lives here: which columns exist, what they have
//! been called over time, and the descriptive metadata that goes with them.
//! Nothing in this module touches the browser or the filesystem.
//!
//! - `leaderboard` – column synonym tables, the closed list of per-dataset WER
//!   columns, the fallback header row, and the benchmark's descriptive fields.
//!
//! Extraction (`scrape`) and shaping (`normalize`) consult these tables instead
//! of hardcoding header text, so a renamed column is a one-line change here.
pub mod leaderboard;
