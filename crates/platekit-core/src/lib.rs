//! # PlateKit Core
//!
//! Core types and utilities for PlateKit.
//! Provides the input records, the steel grade density table, the error
//! taxonomy, the input form model and the shared-state parameter codec.

pub mod error;
pub mod form;
pub mod inputs;
pub mod materials;
pub mod share;
pub mod units;

pub use error::{DecodeError, Error, InvalidInputError, Result};
pub use form::{FormField, InputForm};
pub use inputs::{LayoutInputs, PlateSpec, VesselSpec};
pub use materials::{DensityTable, SteelGrade, DEFAULT_MATERIAL};
pub use share::{decode_location, encode_query, results_location, INPUTS_PARAM, RESULTS_PATH};
