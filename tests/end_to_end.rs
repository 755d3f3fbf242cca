//! Form to results page to rendered layout, through the public API

use platekit::{
    decode_location, scene_to_svg, Config, FormField, InputForm, LayoutCanvas, LayoutSession,
    ResultsView,
};

fn filled_form() -> InputForm {
    let mut form = InputForm::new();
    form.set_text(FormField::InternalDiameter, "2000");
    form.set_text(FormField::VesselLength, "6000");
    form.set_text(FormField::PlateThickness, "20");
    form.set_text(FormField::PlateWidth, "2500");
    form.set_text(FormField::PlateLength, "13000");
    form.set_text(FormField::RatePerKg, "60");
    form
}

#[test]
fn test_submit_then_show_results() {
    let mut form = filled_form();
    let location = form.submit().unwrap();
    assert!(location.starts_with("/results?inputs="));

    let config = Config::default();
    let mut session = LayoutSession::new(config.density_table());
    let view = ResultsView::from_location(&location, &mut session, &config.display);
    let report = view.report().expect("ready");
    assert_eq!(report.result.layout.num_plates_required, 2);
    assert_eq!(report.result.layout.developed_length, 6366.0);
}

#[test]
fn test_incomplete_form_does_not_navigate() {
    let mut form = filled_form();
    form.set_text(FormField::PlateWidth, "");
    assert!(form.submit().is_err());
    assert_eq!(form.error(), Some("All fields must be filled out."));
}

#[test]
fn test_render_shared_location_to_svg_file() {
    let location = filled_form().submit().unwrap();
    let inputs = decode_location(&location).unwrap();

    let config = Config::default();
    let mut session = LayoutSession::new(config.density_table());
    let layout = session.recompute(&inputs).unwrap().layout;

    let mut canvas = LayoutCanvas::new(config.render.clone());
    canvas.set_layout(Some(layout));
    let svg = scene_to_svg(&canvas.render_export());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.svg");
    std::fs::write(&path, &svg).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Width: 2500 mm"));
    assert!(written.contains("Offcut: 268 mm"));
}

#[test]
fn test_exported_svg_has_a_row_per_plate() {
    let mut form = filled_form();
    form.set_text(FormField::VesselLength, "50000");
    let inputs = decode_location(&form.submit().unwrap()).unwrap();

    let config = Config::default();
    let mut session = LayoutSession::new(config.density_table());
    let layout = session.recompute(&inputs).unwrap().layout;
    assert_eq!(layout.num_plates_required, 10);

    let mut canvas = LayoutCanvas::new(config.render.clone());
    canvas.set_layout(Some(layout));
    let svg = scene_to_svg(&canvas.render_export());
    assert_eq!(svg.matches("Width: 2500 mm").count(), 10);
    assert_eq!(svg.matches("Developed Length: 6366 mm").count(), 10);
}

#[test]
fn test_custom_grade_from_config() {
    let config: Config = toml::from_str(
        r#"
        [[materials.custom]]
        name = "DUPLEX 2205"
        density_kg_per_mm3 = 7.8e-6
        "#,
    )
    .unwrap();

    let mut form = filled_form();
    form.set_material("DUPLEX 2205");
    let inputs = form.to_inputs().unwrap();

    let mut session = LayoutSession::new(config.density_table());
    let result = session.recompute(&inputs).unwrap();
    assert_eq!(result.material, "DUPLEX 2205");
    assert!((result.summary.total.weight - 1.3e9 * 7.8e-6).abs() < 1e-6);
}
