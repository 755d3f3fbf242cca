#![allow(dead_code)]

use platekit_core::{DensityTable, LayoutInputs, PlateSpec, VesselSpec};
use platekit_layout::{compute_layout, PlateLayout};

/// D 2000, vessel 6000, t 20, plate 2500 x 13000, IS 2062 GR.B at 60/kg
pub fn sample_inputs() -> LayoutInputs {
    LayoutInputs::new(
        VesselSpec {
            internal_diameter: 2000.0,
            vessel_length: 6000.0,
            plate_thickness: 20.0,
        },
        PlateSpec {
            stock_plate_width: 2500.0,
            stock_plate_length: 13000.0,
            material: "IS 2062 GR.B".to_string(),
            rate_per_mass: 60.0,
        },
    )
}

pub fn layout_of(inputs: &LayoutInputs) -> PlateLayout {
    compute_layout(inputs, &DensityTable::standard())
        .unwrap()
        .layout
}

pub fn sample_layout() -> PlateLayout {
    layout_of(&sample_inputs())
}
