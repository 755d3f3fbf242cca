//! Configuration and settings management for PlateKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats, by file extension.
//!
//! Configuration is organized into logical sections:
//! - Render settings (canvas size, zoom range, layout spacing, hit region)
//! - Display preferences (currency symbol, decimals)
//! - Custom plate grades (name and density)
//!
//! Every section falls back to its defaults when absent from the file.

use crate::error::{SettingsError, SettingsResult};
use platekit_core::materials::{DensityTable, SteelGrade};
use platekit_core::units::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_DECIMALS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layout canvas and interaction settings.
///
/// Values suffixed `_px` are screen pixels; `vertical_gap_mm` is in layout
/// (content) millimetres and does not change with zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Logical canvas width
    pub canvas_width: u32,
    /// Logical canvas height
    pub canvas_height: u32,
    /// Scale (pixels per mm) when a layout is first shown
    pub default_scale: f64,
    /// Smallest allowed scale
    pub min_scale: f64,
    /// Largest allowed scale
    pub max_scale: f64,
    /// Scale change per zoom step
    pub zoom_step: f64,
    /// Gap between stacked plates
    pub vertical_gap_mm: f64,
    /// Left margin before the first plate
    pub margin_x_px: f64,
    /// Top margin before the first plate
    pub margin_y_px: f64,
    /// Spacing of the offcut cross-hatch
    pub hatch_spacing_px: f64,
    /// Upper bound on hatch lines per direction and plate
    pub max_hatch_lines: usize,
    /// Label font size
    pub font_size_px: f64,
    /// Outline stroke width
    pub stroke_width_px: f64,
    /// Width of the offcut hover region
    pub offcut_hit_width_px: f64,
    /// Tooltip position relative to the cursor
    pub tooltip_offset_px: (f64, f64),
    /// Tooltip box size
    pub tooltip_size_px: (f64, f64),
    /// Skip plates that lie outside the canvas
    pub cull_offscreen: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            default_scale: 0.05,
            min_scale: 0.01,
            max_scale: 0.10,
            zoom_step: 0.01,
            vertical_gap_mm: 400.0,
            margin_x_px: 100.0,
            margin_y_px: 50.0,
            hatch_spacing_px: 4.0,
            max_hatch_lines: 2000,
            font_size_px: 12.0,
            stroke_width_px: 2.0,
            offcut_hit_width_px: 150.0,
            tooltip_offset_px: (10.0, -20.0),
            tooltip_size_px: (100.0, 30.0),
            cull_offscreen: false,
        }
    }
}

/// Result display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Symbol printed before prices
    pub currency_symbol: String,
    /// Decimals for weights and prices
    pub decimal_places: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            decimal_places: DEFAULT_DECIMALS,
        }
    }
}

/// A plate grade added by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMaterial {
    /// Grade name shown in the material list
    pub name: String,
    /// Density in kg/mm³
    pub density_kg_per_mm3: f64,
}

/// Custom plate grades
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
    /// Grades appended to (or overriding) the standard table
    pub custom: Vec<CustomMaterial>,
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Canvas and interaction settings
    pub render: RenderSettings,
    /// Result display preferences
    pub display: DisplaySettings,
    /// Custom plate grades
    pub materials: MaterialSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform default location, `<config_dir>/platekit/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("platekit").join("config.toml"))
    }

    /// Load config from an explicit file, or from the default location if
    /// one exists there, or fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Self::format_of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Self::format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let r = &self.render;

        if r.canvas_width == 0 || r.canvas_height == 0 {
            return Err(SettingsError::invalid(
                "render.canvas_size",
                "canvas dimensions must be > 0",
            ));
        }

        if !(r.min_scale > 0.0 && r.min_scale <= r.max_scale && r.max_scale.is_finite()) {
            return Err(SettingsError::invalid(
                "render.scale_range",
                format!(
                    "need 0 < min_scale <= max_scale (got {}..{})",
                    r.min_scale, r.max_scale
                ),
            ));
        }

        if !(r.min_scale..=r.max_scale).contains(&r.default_scale) {
            return Err(SettingsError::invalid(
                "render.default_scale",
                format!(
                    "{} is outside {}..{}",
                    r.default_scale, r.min_scale, r.max_scale
                ),
            ));
        }

        let positive = [
            ("render.zoom_step", r.zoom_step),
            ("render.hatch_spacing_px", r.hatch_spacing_px),
            ("render.font_size_px", r.font_size_px),
            ("render.stroke_width_px", r.stroke_width_px),
            ("render.offcut_hit_width_px", r.offcut_hit_width_px),
            ("render.tooltip_width_px", r.tooltip_size_px.0),
            ("render.tooltip_height_px", r.tooltip_size_px.1),
        ];
        for (key, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(SettingsError::invalid(key, "must be > 0"));
            }
        }

        if !(r.vertical_gap_mm >= 0.0 && r.vertical_gap_mm.is_finite()) {
            return Err(SettingsError::invalid(
                "render.vertical_gap_mm",
                "must be >= 0",
            ));
        }

        if r.max_hatch_lines == 0 {
            return Err(SettingsError::invalid(
                "render.max_hatch_lines",
                "must be > 0",
            ));
        }

        for material in &self.materials.custom {
            if material.name.trim().is_empty() {
                return Err(SettingsError::invalid(
                    "materials.custom",
                    "grade name must not be empty",
                ));
            }
            let density = material.density_kg_per_mm3;
            if !(density > 0.0 && density.is_finite()) {
                return Err(SettingsError::invalid(
                    format!("materials.custom.{}", material.name),
                    "density must be > 0",
                ));
            }
        }

        Ok(())
    }

    /// Standard grades plus the custom grades of this config
    pub fn density_table(&self) -> DensityTable {
        let mut table = DensityTable::standard();
        for material in &self.materials.custom {
            table.insert(SteelGrade::new(
                material.name.clone(),
                material.density_kg_per_mm3,
            ));
        }
        table
    }

    fn format_of(path: &Path) -> SettingsResult<Format> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("(none)").to_string(),
            )),
        }
    }
}

enum Format {
    Json,
    Toml,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.render.canvas_width, 800);
        assert_eq!(config.render.canvas_height, 600);
        assert!(!config.render.cull_offscreen);
        assert_eq!(config.display.currency_symbol, "₹");
    }

    #[test]
    fn test_rejects_inverted_scale_range() {
        let mut config = Config::default();
        config.render.min_scale = 0.2;
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { key, .. }) if key == "render.scale_range"
        ));
    }

    #[test]
    fn test_rejects_default_scale_out_of_range() {
        let mut config = Config::default();
        config.render.default_scale = 0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_custom_density() {
        let mut config = Config::default();
        config.materials.custom.push(CustomMaterial {
            name: "LEAD".to_string(),
            density_kg_per_mm3: 0.0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_density_table_includes_custom() {
        let mut config = Config::default();
        config.materials.custom.push(CustomMaterial {
            name: "DUPLEX 2205".to_string(),
            density_kg_per_mm3: 7.8e-6,
        });
        let table = config.density_table();
        assert_eq!(table.density("DUPLEX 2205"), Ok(7.8e-6));
        assert!(table.contains("IS 2062 GR.B"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [display]
            currency_symbol = "$"
            "#,
        )
        .unwrap();
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.display.decimal_places, 2);
        assert_eq!(config.render, RenderSettings::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Config::default()
            .save_to_file(Path::new("settings.yaml"))
            .unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedFormat(ext) if ext == "yaml"));
    }
}
