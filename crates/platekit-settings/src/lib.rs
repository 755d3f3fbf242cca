//! PlateKit Settings Crate
//!
//! Handles application configuration: render and interaction settings,
//! display preferences and custom plate grades.

pub mod config;
pub mod error;

pub use config::{Config, CustomMaterial, DisplaySettings, MaterialSettings, RenderSettings};
pub use error::{SettingsError, SettingsResult};
