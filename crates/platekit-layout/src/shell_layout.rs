//! Shell course layout on stock plates
//!
//! Unrolls one cylindrical shell course to its developed length, fits as
//! many courses as possible along each stock plate and derives the plate
//! count, the offcut left on each plate, and the weight and cost split
//! between used material and offcut.

use platekit_core::{DensityTable, Error, InvalidInputError, LayoutInputs, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Thickest plate (mm) that takes a rolling allowance of one thickness
pub const ALLOWANCE_THRESHOLD_MM: f64 = 35.0;

/// Allowance factor applied above [`ALLOWANCE_THRESHOLD_MM`]
pub const THICK_PLATE_ALLOWANCE_FACTOR: f64 = 1.5;

/// Relative size below which a negative offcut volume is rounding noise
const VOLUME_NOISE: f64 = 1e-12;

/// Rolling and welding allowance added to the mid-wall circumference
pub fn rolling_allowance(plate_thickness: f64) -> f64 {
    if plate_thickness <= ALLOWANCE_THRESHOLD_MM {
        plate_thickness
    } else {
        THICK_PLATE_ALLOWANCE_FACTOR * plate_thickness
    }
}

/// Developed (unrolled) length of one shell course, rounded to whole mm.
///
/// ```text
/// developed = round((internal_diameter + thickness) * PI + allowance)
/// ```
pub fn developed_length(internal_diameter: f64, plate_thickness: f64) -> f64 {
    ((internal_diameter + plate_thickness) * PI + rolling_allowance(plate_thickness)).round()
}

/// Cuts on a single stock plate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateCut {
    /// Zero-based plate index
    pub index: u64,
    /// Courses cut from this plate
    pub units: u64,
    /// Length taken by the courses (mm)
    pub used_length: f64,
    /// Width taken by the courses (mm), the full plate width
    pub used_width: f64,
    /// Remaining length after the last course (mm)
    pub offcut_length: f64,
    /// Width of the remaining strip (mm)
    pub offcut_width: f64,
}

impl PlateCut {
    /// Check whether the plate leaves any offcut
    pub fn has_offcut(&self) -> bool {
        self.offcut_length > 0.0
    }
}

/// Course arrangement over the stock plates.
///
/// Plates are filled in order: every plate carries `units_per_plate`
/// courses except the last, which carries the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateLayout {
    /// Developed length of one course (mm)
    pub developed_length: f64,
    /// Courses that fit along one plate length
    pub units_per_plate: u64,
    /// Courses needed to cover the vessel length
    pub total_units_required: u64,
    /// Stock plates needed
    pub num_plates_required: u64,
    /// Offcut length on a fully used plate (mm)
    pub offcut_length: f64,
    /// Stock plate width (mm)
    pub plate_width: f64,
    /// Stock plate length (mm)
    pub plate_length: f64,
}

impl PlateLayout {
    /// Cuts on plate `index`, or `None` past the last plate
    pub fn plate(&self, index: u64) -> Option<PlateCut> {
        if index >= self.num_plates_required {
            return None;
        }
        let before = index.saturating_mul(self.units_per_plate);
        let units = self
            .units_per_plate
            .min(self.total_units_required.saturating_sub(before));
        let used_length = units as f64 * self.developed_length;

        Some(PlateCut {
            index,
            units,
            used_length,
            used_width: self.plate_width,
            offcut_length: self.plate_length - used_length,
            offcut_width: self.plate_width,
        })
    }

    /// Cuts on every plate, in order
    pub fn plates(&self) -> impl Iterator<Item = PlateCut> + '_ {
        (0..self.num_plates_required).filter_map(move |i| self.plate(i))
    }

    /// Courses on the last plate
    pub fn last_plate_units(&self) -> u64 {
        self.plate(self.num_plates_required.saturating_sub(1))
            .map_or(0, |p| p.units)
    }
}

/// Volume, weight and cost of one share of the plate material
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialShare {
    /// Volume (mm³)
    pub volume: f64,
    /// Weight (kg)
    pub weight: f64,
    /// Cost (currency)
    pub cost: f64,
}

impl MaterialShare {
    fn priced(volume: f64, density: f64, rate_per_mass: f64) -> Self {
        let weight = volume * density;
        Self {
            volume,
            weight,
            cost: weight * rate_per_mass,
        }
    }
}

/// Weight and cost of the purchased plates, split into used and offcut
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightCostSummary {
    pub total: MaterialShare,
    pub used: MaterialShare,
    pub offcut: MaterialShare,
}

/// Output of one layout calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub layout: PlateLayout,
    pub summary: WeightCostSummary,
    /// Material the weights were computed for
    pub material: String,
}

/// Calculator bound to a density table
#[derive(Debug, Clone)]
pub struct ShellLayoutCalculator {
    densities: DensityTable,
}

impl Default for ShellLayoutCalculator {
    fn default() -> Self {
        Self::new(DensityTable::standard())
    }
}

impl ShellLayoutCalculator {
    /// Create a calculator for the given grades
    pub fn new(densities: DensityTable) -> Self {
        Self { densities }
    }

    /// Grades known to this calculator
    pub fn densities(&self) -> &DensityTable {
        &self.densities
    }

    /// Lay out the shell courses for an input record
    pub fn calculate(&self, inputs: &LayoutInputs) -> Result<LayoutResult> {
        compute_layout(inputs, &self.densities)
    }
}

/// Lay out the shell courses for an input record.
///
/// Fails with [`InvalidInputError`] when a numeric field is not a positive
/// finite number, when the material has no density, or when the plate
/// cannot hold one course. A negative or non-finite volume is reported as
/// a calculation defect.
pub fn compute_layout(inputs: &LayoutInputs, densities: &DensityTable) -> Result<LayoutResult> {
    inputs.validate()?;
    let density = densities.density(&inputs.plate.material)?;

    let vessel = &inputs.vessel;
    let plate = &inputs.plate;
    let thickness = vessel.plate_thickness;
    let width = plate.stock_plate_width;
    let length = plate.stock_plate_length;

    let developed = developed_length(vessel.internal_diameter, thickness);
    // Vanishingly small shells round to zero length
    if developed <= 0.0 {
        return Err(InvalidInputError::NonPositive {
            field: "developedLength".to_string(),
            value: developed,
        }
        .into());
    }

    let units_per_plate = (length / developed).floor() as u64;
    if units_per_plate < 1 {
        return Err(InvalidInputError::PlateTooShort {
            plate_length: length,
            developed_length: developed,
        }
        .into());
    }

    let total_units_required = ((vessel.vessel_length / width).ceil() as u64).max(1);
    let num_plates_required = total_units_required.div_ceil(units_per_plate);
    let offcut_length = length - units_per_plate as f64 * developed;

    let total_volume = num_plates_required as f64 * length * width * thickness;
    let used_volume = total_units_required as f64 * developed * width * thickness;
    let mut offcut_volume = total_volume - used_volume;
    if !(total_volume.is_finite() && used_volume.is_finite() && offcut_volume.is_finite()) {
        return Err(Error::defect(format!(
            "volume overflow (total {} mm³, used {} mm³)",
            total_volume, used_volume
        )));
    }
    if offcut_volume < 0.0 {
        if -offcut_volume > total_volume * VOLUME_NOISE {
            return Err(Error::defect(format!(
                "offcut volume {} mm³ is negative (total {} mm³, used {} mm³)",
                offcut_volume, total_volume, used_volume
            )));
        }
        offcut_volume = 0.0;
    }

    let rate = plate.rate_per_mass;
    let summary = WeightCostSummary {
        total: MaterialShare::priced(total_volume, density, rate),
        used: MaterialShare::priced(used_volume, density, rate),
        offcut: MaterialShare::priced(offcut_volume, density, rate),
    };
    if !(summary.total.weight.is_finite() && summary.total.cost.is_finite()) {
        return Err(Error::defect(format!(
            "cost overflow (total {} kg at {} per kg)",
            summary.total.weight, rate
        )));
    }

    tracing::debug!(
        developed_length = developed,
        units_per_plate,
        total_units_required,
        num_plates_required,
        offcut_length,
        total_weight = summary.total.weight,
        "computed shell layout"
    );

    Ok(LayoutResult {
        layout: PlateLayout {
            developed_length: developed,
            units_per_plate,
            total_units_required,
            num_plates_required,
            offcut_length,
            plate_width: width,
            plate_length: length,
        },
        summary,
        material: plate.material.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowance_branches() {
        assert_eq!(rolling_allowance(20.0), 20.0);
        assert_eq!(rolling_allowance(35.0), 35.0);
        assert_eq!(rolling_allowance(40.0), 60.0);
    }

    #[test]
    fn test_developed_length_is_whole_mm() {
        let dl = developed_length(1234.5, 7.3);
        assert_eq!(dl, dl.round());
    }

    #[test]
    fn test_plate_past_end() {
        let layout = PlateLayout {
            developed_length: 100.0,
            units_per_plate: 3,
            total_units_required: 7,
            num_plates_required: 3,
            offcut_length: 50.0,
            plate_width: 1000.0,
            plate_length: 350.0,
        };
        assert_eq!(layout.plate(2).map(|p| p.units), Some(1));
        assert_eq!(layout.plate(3), None);
        assert_eq!(layout.last_plate_units(), 1);
        assert_eq!(layout.plates().map(|p| p.units).sum::<u64>(), 7);
    }
}
