//! Text report rendering for weatherman.
//!
//! Turns aggregated weather views into the plain-text reports printed on
//! stdout: the yearly extremes summary, the monthly averages summary and the
//! per-day temperature bar chart. Colors are resolved here and nowhere else,
//! so everything upstream stays free of terminal concerns.

pub mod chart;
pub mod monthly;
pub mod style;
pub mod yearly;

pub use weather_core as core;
