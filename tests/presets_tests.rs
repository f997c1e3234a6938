use regression_lab::LabError;
use regression_lab::core::presets::{LINEAR, NO_CORRELATION, SCATTERED};
use regression_lab::core::{Point, PresetCatalog};

#[test]
fn builtin_catalog_lists_presets_in_declaration_order() {
    let catalog = PresetCatalog::builtin();
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec![LINEAR, SCATTERED, NO_CORRELATION]);
    assert_eq!(catalog.len(), 3);
}

#[test]
fn each_builtin_preset_has_five_points() {
    let catalog = PresetCatalog::builtin();
    for name in [LINEAR, SCATTERED, NO_CORRELATION] {
        let preset = catalog.get(name).expect("builtin preset");
        assert_eq!(preset.name, name);
        assert_eq!(preset.points.len(), 5);
    }
}

#[test]
fn linear_preset_values_are_fixed() {
    let catalog = PresetCatalog::builtin();
    let preset = catalog.get("linear").expect("linear");
    assert_eq!(preset.points[0], Point::new(1.0, 2.0));
    assert_eq!(preset.points[4], Point::new(9.0, 10.0));
}

#[test]
fn unknown_preset_is_reported() {
    let catalog = PresetCatalog::builtin();
    let err = catalog.get("quadratic").expect_err("unknown preset");
    assert_eq!(err, LabError::UnknownPreset("quadratic".to_owned()));
    assert!(format!("{err}").contains("quadratic"));
}

#[test]
fn preset_lookup_is_case_sensitive() {
    let catalog = PresetCatalog::builtin();
    assert!(catalog.get("nocorrelation").is_err());
    assert!(catalog.get("noCorrelation").is_ok());
}
