//! Steel grade density table
//!
//! This module provides:
//! - The standard set of plate grades offered by the input form
//! - Density lookup (kg/mm³) that fails on unknown grades
//! - Registration of custom grades from configuration

use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};

/// Density of carbon and low-alloy steel plate (kg/mm³)
pub const CARBON_STEEL_DENSITY: f64 = 7.85e-6;
/// Density of 304/304L austenitic stainless plate (kg/mm³)
pub const SS304_DENSITY: f64 = 7.93e-6;
/// Density of 316/316L austenitic stainless plate (kg/mm³)
pub const SS316_DENSITY: f64 = 7.98e-6;

/// Grade preselected by the input form
pub const DEFAULT_MATERIAL: &str = "IS 2062 GR.B";

/// A named plate grade and its density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelGrade {
    /// Display name, also the lookup key
    pub name: String,
    /// Density in kg/mm³
    pub density: f64,
}

impl SteelGrade {
    /// Create a new grade
    pub fn new(name: impl Into<String>, density: f64) -> Self {
        Self {
            name: name.into(),
            density,
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2e} kg/mm³)", self.name, self.density)
    }
}

/// Ordered mapping from grade name to density.
///
/// Order is the order grades are offered for selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DensityTable {
    grades: Vec<SteelGrade>,
}

impl DensityTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the table of standard plate grades
    pub fn standard() -> Self {
        let grades = [
            ("IS 2062 GR.A", CARBON_STEEL_DENSITY),
            ("IS 2062 GR.B", CARBON_STEEL_DENSITY),
            ("IS 2062 GR.C", CARBON_STEEL_DENSITY),
            ("SA 516 GR.60", CARBON_STEEL_DENSITY),
            ("SA 516 GR.70", CARBON_STEEL_DENSITY),
            ("SA 240 SS304", SS304_DENSITY),
            ("SA 240 SS304L", SS304_DENSITY),
            ("SA 240 SS316", SS316_DENSITY),
            ("SA 240 SS316L", SS316_DENSITY),
        ];

        Self {
            grades: grades
                .into_iter()
                .map(|(name, density)| SteelGrade::new(name, density))
                .collect(),
        }
    }

    /// Add a grade, replacing the density of an existing grade with the same name
    pub fn insert(&mut self, grade: SteelGrade) {
        match self.grades.iter_mut().find(|g| g.name == grade.name) {
            Some(existing) => existing.density = grade.density,
            None => self.grades.push(grade),
        }
    }

    /// Look up the density of a grade.
    ///
    /// Unknown names are an error; there is no fallback density.
    pub fn density(&self, material: &str) -> Result<f64, InvalidInputError> {
        self.get(material)
            .map(|g| g.density)
            .ok_or_else(|| InvalidInputError::UnknownMaterial {
                material: material.to_string(),
            })
    }

    /// Get a grade by name
    pub fn get(&self, material: &str) -> Option<&SteelGrade> {
        self.grades.iter().find(|g| g.name == material)
    }

    /// Check whether a grade is defined
    pub fn contains(&self, material: &str) -> bool {
        self.get(material).is_some()
    }

    /// Iterate over all grades in selection order
    pub fn grades(&self) -> impl Iterator<Item = &SteelGrade> {
        self.grades.iter()
    }

    /// Grade names in selection order
    pub fn names(&self) -> Vec<&str> {
        self.grades.iter().map(|g| g.name.as_str()).collect()
    }

    /// Number of grades
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}
