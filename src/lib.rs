//! Catalog TUI - a terminal client for the product catalog API
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod models;
pub mod prelude;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
