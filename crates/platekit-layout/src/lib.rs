//! # PlateKit Layout
//!
//! Shell course layout calculation for cylindrical vessels.
//!
//! - **Shell Layout**: developed length, courses per plate, plate count and offcut
//! - **Weight and Cost**: total, used and offcut volume, weight and cost
//! - **Session**: memoized recomputation keyed on the input record

pub mod session;
pub mod shell_layout;

pub use session::LayoutSession;
pub use shell_layout::{
    compute_layout, developed_length, rolling_allowance, LayoutResult, MaterialShare, PlateCut,
    PlateLayout, ShellLayoutCalculator, WeightCostSummary, ALLOWANCE_THRESHOLD_MM,
};
