use platekit_core::share::{decode_location, encode_query, results_location};
use platekit_core::{LayoutInputs, PlateSpec, VesselSpec};
use proptest::prelude::*;

fn inputs_strategy() -> impl Strategy<Value = LayoutInputs> {
    (
        0.001f64..1.0e6,
        0.001f64..1.0e6,
        0.001f64..500.0,
        0.001f64..1.0e5,
        0.001f64..1.0e5,
        "[A-Za-z0-9 .&+=?#%/\"]{1,24}",
        0.001f64..1.0e4,
    )
        .prop_map(|(d, len, t, w, l, material, rate)| {
            LayoutInputs::new(
                VesselSpec {
                    internal_diameter: d,
                    vessel_length: len,
                    plate_thickness: t,
                },
                PlateSpec {
                    stock_plate_width: w,
                    stock_plate_length: l,
                    material,
                    rate_per_mass: rate,
                },
            )
        })
}

proptest! {
    #[test]
    fn location_round_trip(inputs in inputs_strategy()) {
        let location = results_location(&inputs).unwrap();
        prop_assert_eq!(decode_location(&location).unwrap(), inputs);
    }

    #[test]
    fn query_round_trip(inputs in inputs_strategy()) {
        let query = encode_query(&inputs).unwrap();
        prop_assert_eq!(decode_location(&query).unwrap(), inputs);
    }
}

#[test]
fn test_unicode_material_round_trip() {
    let inputs = LayoutInputs::new(
        VesselSpec {
            internal_diameter: 900.0,
            vessel_length: 2400.0,
            plate_thickness: 8.0,
        },
        PlateSpec {
            stock_plate_width: 1250.0,
            stock_plate_length: 6300.0,
            material: "Stahl S235 – Güte B".to_string(),
            rate_per_mass: 1.15,
        },
    );
    let location = results_location(&inputs).unwrap();
    assert_eq!(decode_location(&location).unwrap(), inputs);
}
