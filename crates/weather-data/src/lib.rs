//! Data ingestion and aggregation for weatherman.
//!
//! Discovers weather data files in a directory, parses their heterogeneous
//! row formats into [`weather_core::models::Reading`] values with per-record
//! error isolation, and aggregates the collected readings over yearly and
//! monthly windows for the report layer.

pub mod aggregate;
pub mod parser;
pub mod reader;

pub use weather_core as core;
