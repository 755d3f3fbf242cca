//! Vessel and stock plate input records
//!
//! The serialized field names are the ones carried by the results link, so
//! links produced by earlier releases keep decoding.

use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};

/// Cylindrical vessel shell dimensions (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselSpec {
    /// Internal diameter of the shell
    #[serde(rename = "internalDia")]
    pub internal_diameter: f64,
    /// Overall shell length along the vessel axis
    #[serde(rename = "vesselLength")]
    pub vessel_length: f64,
    /// Shell plate thickness
    #[serde(rename = "plateThickness")]
    pub plate_thickness: f64,
}

/// Stock plate dimensions, grade and price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateSpec {
    /// Stock plate width (mm), laid along the vessel axis
    #[serde(rename = "plateWidth")]
    pub stock_plate_width: f64,
    /// Stock plate length (mm), laid around the circumference
    #[serde(rename = "plateLength")]
    pub stock_plate_length: f64,
    /// Grade name, resolved against a [`crate::DensityTable`]
    pub material: String,
    /// Price per kilogram
    #[serde(rename = "ratePerKg")]
    pub rate_per_mass: f64,
}

/// The complete input record for one layout run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInputs {
    #[serde(flatten)]
    pub vessel: VesselSpec,
    #[serde(flatten)]
    pub plate: PlateSpec,
}

impl LayoutInputs {
    /// Create a new input record
    pub fn new(vessel: VesselSpec, plate: PlateSpec) -> Self {
        Self { vessel, plate }
    }

    /// Numeric fields with their serialized names, in form order
    pub fn numeric_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("internalDia", self.vessel.internal_diameter),
            ("vesselLength", self.vessel.vessel_length),
            ("plateThickness", self.vessel.plate_thickness),
            ("plateWidth", self.plate.stock_plate_width),
            ("plateLength", self.plate.stock_plate_length),
            ("ratePerKg", self.plate.rate_per_mass),
        ]
    }

    /// Check that every numeric field is finite and strictly positive.
    ///
    /// Material resolution is left to the density table.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(InvalidInputError::NotFinite {
                    field: field.to_string(),
                });
            }
            if value <= 0.0 {
                return Err(InvalidInputError::NonPositive {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
