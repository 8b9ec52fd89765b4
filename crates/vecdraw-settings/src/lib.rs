//! VecDraw Settings Crate
//!
//! Application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, HistorySettings, RecentFiles};
pub use error::{SettingsError, SettingsResult};
