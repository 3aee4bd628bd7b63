//! Folio library crate
//!
//! The catalog, the two state machines and the terminal UI. The binary in
//! `main.rs` is a thin CLI over these; benchmarks use them directly.

pub mod app;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod modal;
pub mod navigator;
pub mod opener;
pub mod ui;
