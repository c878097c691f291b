//! nippo library
//!
//! This module exports the report generation pipeline of nippo for use in
//! integration tests and as a library.

pub mod app;
pub mod category;
pub mod config;
pub mod locale;
pub mod report;

pub use app::{ViewState, build_report, generate};
pub use category::{Achievement, Category};
pub use config::{Backend, Config, ConfigError};
pub use report::{DailyReport, generate_daily_report};
