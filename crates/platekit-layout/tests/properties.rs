//! Quantified properties of the layout calculation

use platekit_core::{DensityTable, LayoutInputs, PlateSpec, VesselSpec};
use platekit_layout::compute_layout;
use proptest::prelude::*;

fn grade_names() -> Vec<String> {
    DensityTable::standard()
        .names()
        .into_iter()
        .map(String::from)
        .collect()
}

fn valid_inputs() -> impl Strategy<Value = LayoutInputs> {
    (
        100.0f64..5000.0,
        1.0f64..50_000.0,
        1.0f64..80.0,
        500.0f64..3000.0,
        1.0f64..4.0,
        prop::sample::select(grade_names()),
        1.0f64..500.0,
    )
        .prop_map(|(d, len, t, w, courses, material, rate)| {
            // Plate length between one and four developed lengths
            let developed = ((d + t) * std::f64::consts::PI + 1.5 * t).round() + 1.0;
            LayoutInputs::new(
                VesselSpec {
                    internal_diameter: d,
                    vessel_length: len,
                    plate_thickness: t,
                },
                PlateSpec {
                    stock_plate_width: w,
                    stock_plate_length: developed * courses,
                    material,
                    rate_per_mass: rate,
                },
            )
        })
}

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * b.abs().max(1e-9)
}

proptest! {
    #[test]
    fn used_plus_offcut_is_total(inputs in valid_inputs()) {
        let result = compute_layout(&inputs, &DensityTable::standard()).unwrap();
        let s = result.summary;
        prop_assert!(relative_eq(s.used.weight + s.offcut.weight, s.total.weight));
        prop_assert!(relative_eq(s.used.cost + s.offcut.cost, s.total.cost));
        prop_assert!(s.offcut.volume >= 0.0);
    }

    #[test]
    fn counts_are_at_least_one(inputs in valid_inputs()) {
        let layout = compute_layout(&inputs, &DensityTable::standard()).unwrap().layout;
        prop_assert!(layout.num_plates_required >= 1);
        prop_assert!(layout.units_per_plate >= 1);
        prop_assert!(layout.offcut_length >= 0.0);
        prop_assert!(layout.developed_length > 0.0);
    }

    #[test]
    fn plates_cover_every_course(inputs in valid_inputs()) {
        let layout = compute_layout(&inputs, &DensityTable::standard()).unwrap().layout;
        let units: u64 = layout.plates().map(|p| p.units).sum();
        prop_assert_eq!(units, layout.total_units_required);
        prop_assert_eq!(layout.plates().count() as u64, layout.num_plates_required);
        prop_assert!(layout.plates().all(|p| p.units >= 1 && p.offcut_length >= 0.0));
    }

    #[test]
    fn longer_vessel_never_needs_fewer_plates(inputs in valid_inputs(), extra in 0.0f64..20_000.0) {
        let table = DensityTable::standard();
        let base = compute_layout(&inputs, &table).unwrap().layout;

        let mut longer = inputs.clone();
        longer.vessel.vessel_length += extra;
        let grown = compute_layout(&longer, &table).unwrap().layout;

        prop_assert!(grown.num_plates_required >= base.num_plates_required);
    }

    #[test]
    fn identical_inputs_identical_output(inputs in valid_inputs()) {
        let table = DensityTable::standard();
        let first = compute_layout(&inputs, &table).unwrap();
        let second = compute_layout(&inputs.clone(), &table).unwrap();

        prop_assert_eq!(
            first.layout.developed_length.to_bits(),
            second.layout.developed_length.to_bits()
        );
        prop_assert_eq!(
            first.summary.total.cost.to_bits(),
            second.summary.total.cost.to_bits()
        );
        prop_assert_eq!(
            first.summary.offcut.weight.to_bits(),
            second.summary.offcut.weight.to_bits()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn plate_too_short_is_rejected(inputs in valid_inputs(), fraction in 0.05f64..0.95) {
        let table = DensityTable::standard();
        let developed = compute_layout(&inputs, &table).unwrap().layout.developed_length;

        let mut short = inputs.clone();
        short.plate.stock_plate_length = developed * fraction;
        prop_assert!(compute_layout(&short, &table).unwrap_err().is_invalid_input());
    }
}
