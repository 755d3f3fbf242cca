//! # PlateKit
//!
//! Steel plate cutting layout for cylindrical pressure vessel shells:
//! - Developed length of a rolled course, courses per stock plate, plate count
//! - Used and offcut volume, weight and cost per steel grade
//! - Plate layout rendering with zoom, pan and offcut hover
//! - Shareable results location encoding the input record
//!
//! ## Architecture
//!
//! PlateKit is organized as a workspace with multiple crates:
//!
//! 1. **platekit-core** - Input records, density table, errors, form, shared-state codec
//! 2. **platekit-layout** - Layout calculation and memoized session
//! 3. **platekit-visualizer** - Renderer, view state, SVG export, results report
//! 4. **platekit-settings** - Configuration file handling
//! 5. **platekit** - Command line binary that integrates all crates

pub use platekit_core::{
    decode_location, results_location, DecodeError, DensityTable, Error, FormField, InputForm,
    InvalidInputError, LayoutInputs, PlateSpec, Result, SteelGrade, VesselSpec, DEFAULT_MATERIAL,
};

pub use platekit_layout::{
    compute_layout, LayoutResult, LayoutSession, PlateCut, PlateLayout, ShellLayoutCalculator,
    WeightCostSummary,
};

pub use platekit_visualizer::{
    render_layout, scene_to_svg, LayoutCanvas, ResultsReport, ResultsView, Scene, ViewState,
};

pub use platekit_settings::{Config, DisplaySettings, RenderSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Events go to stderr so command output on stdout stays clean.
/// - RUST_LOG environment variable support, `warn` when unset
/// - Pretty or JSON lines formatting
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
