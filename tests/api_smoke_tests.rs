use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use regression_lab::LabError;
use regression_lab::api::{LabConfig, RegressionLab, SEED_POINTS};
use regression_lab::core::{Degeneracy, FitStrength, Point, PresetCatalog};
use regression_lab::render::NullRenderer;

fn lab() -> RegressionLab<NullRenderer> {
    RegressionLab::new(NullRenderer::default(), LabConfig::default()).expect("lab init")
}

fn empty_lab() -> RegressionLab<NullRenderer> {
    let config = LabConfig::default().with_seed_initial_points(false);
    RegressionLab::new(NullRenderer::default(), config).expect("lab init")
}

#[test]
fn lab_smoke_flow() {
    let mut lab = lab();
    assert_eq!(lab.points(), &SEED_POINTS);
    assert_eq!(lab.fit().slope, 1.0);
    assert_eq!(lab.fit().intercept, 1.0);

    lab.add_point(Point::new(10.0, 2.0));
    assert_eq!(lab.points().len(), 5);
    assert!(lab.fit().slope < 1.0);
    assert!(lab.fit().r_squared < 1.0);

    lab.render().expect("render should succeed");
    let renderer = lab.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_data_point_count, 5);
    assert_eq!(renderer.last_row_count, lab.samples().len());
    assert!(renderer.last_line_drawn);
}

#[test]
fn every_mutation_recomputes_fit_and_samples() {
    let mut lab = empty_lab();
    assert_eq!(lab.fit().degeneracy, Some(Degeneracy::InsufficientPoints));
    assert!(lab.samples().is_empty());

    lab.add_point_at_position(2.2, 2.2);
    assert_eq!(lab.samples().len(), 1);
    assert_eq!(lab.samples()[0].fitted_y, None);

    lab.add_point_at_position(4.0, 6.0);
    assert_abs_diff_eq!(lab.fit().slope, 2.0, epsilon = 1e-12);
    assert!(lab.samples().iter().all(|row| row.fitted_y.is_some()));

    lab.update_point(1, 4.0, 2.0).expect("update");
    assert_eq!(lab.fit().degeneracy, Some(Degeneracy::ZeroYVariance));

    lab.remove_point(0).expect("remove");
    assert_eq!(lab.points(), &[Point::new(4.0, 2.0)]);
    assert_eq!(lab.samples().len(), 1);

    lab.clear_points();
    assert!(lab.points().is_empty());
    assert!(lab.samples().is_empty());
    assert_eq!(lab.fit().r_squared, 0.0);
}

#[test]
fn update_clamps_into_domain() {
    let mut lab = lab();
    lab.update_point(0, 20.0, -3.0).expect("update");
    assert_eq!(lab.points()[0], Point::new(15.0, 0.0));
}

#[test]
fn invalid_index_leaves_lab_unchanged() {
    let mut lab = lab();
    let before = lab.snapshot();
    let len = lab.points().len();

    let err = lab.remove_point(len).expect_err("index == len");
    assert_eq!(err, LabError::IndexOutOfRange { index: len, len });
    let err = lab.update_point(len, 1.0, 1.0).expect_err("index == len");
    assert_eq!(err, LabError::IndexOutOfRange { index: len, len });

    assert_eq!(lab.snapshot(), before);
}

#[test]
fn loading_presets_fully_replaces_points() {
    let mut lab = lab();
    let catalog = PresetCatalog::builtin();

    lab.load_preset("linear").expect("linear");
    assert_eq!(lab.points(), catalog.get("linear").expect("linear").points.as_slice());
    assert_eq!(lab.fit().strength(), FitStrength::Perfect);

    lab.load_preset("scattered").expect("scattered");
    assert_eq!(
        lab.points(),
        catalog.get("scattered").expect("scattered").points.as_slice()
    );
    assert_abs_diff_eq!(lab.fit().r_squared, 0.64, epsilon = 1e-12);
}

#[test]
fn unknown_preset_keeps_current_points() {
    let mut lab = lab();
    let err = lab.load_preset("cubic").expect_err("unknown preset");
    assert_eq!(err, LabError::UnknownPreset("cubic".to_owned()));
    assert_eq!(lab.points(), &SEED_POINTS);
}

#[test]
fn manual_entry_snaps_and_clamps() {
    let mut lab = empty_lab();
    let index = lab.add_manual_entry("3.3", " 20 ").expect("valid entry");
    assert_eq!(index, 0);
    assert_eq!(lab.points(), &[Point::new(3.5, 15.0)]);
}

#[test]
fn invalid_manual_entry_adds_nothing() {
    let mut lab = empty_lab();
    assert!(matches!(
        lab.add_manual_entry("", "4"),
        Err(LabError::InvalidInput(_))
    ));
    assert!(matches!(
        lab.add_manual_entry("4", "four"),
        Err(LabError::InvalidInput(_))
    ));
    assert!(lab.points().is_empty());
}

#[test]
fn random_points_land_on_grid_inside_range() {
    let mut lab = empty_lab();
    let mut rng = StdRng::seed_from_u64(2024);
    for expected_index in 0..20 {
        let index = lab.add_random_point(&mut rng);
        assert_eq!(index, expected_index);
    }

    for point in lab.points() {
        assert!((1.0..=13.0).contains(&point.x));
        assert!((1.0..=13.0).contains(&point.y));
        assert_eq!((point.x * 2.0).fract(), 0.0);
    }
}

#[test]
fn set_points_installs_verbatim() {
    let mut lab = empty_lab();
    lab.set_points(vec![Point::new(-1.0, 20.0), Point::new(2.0, 3.0)]);
    assert_eq!(lab.points(), &[Point::new(-1.0, 20.0), Point::new(2.0, 3.0)]);
}

#[test]
fn invalid_config_is_rejected() {
    let config = LabConfig::default().with_domain_max(f64::NAN);
    let result = RegressionLab::new(NullRenderer::default(), config);
    assert!(matches!(result, Err(LabError::InvalidConfig(_))));
}
