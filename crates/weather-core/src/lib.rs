//! Core domain types for the weatherman reporting tool.
//!
//! This crate holds everything the other layers share: the reading and
//! aggregate models, the error taxonomy, the command-line settings, and
//! small date formatting helpers. It performs no I/O of its own.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
