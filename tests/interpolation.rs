//! Part B 토크 외삽 테스트.
use engine_bench_toolbox::bench::interpolation::{extrapolate_torque, torque_slope};
use engine_bench_toolbox::bench::{InterpolationError, Scenario};
use engine_bench_toolbox::series::Series;
use engine_bench_toolbox::units::TorqueUnit;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "{label} expected {expected} got {actual}"
    );
}

#[test]
fn bench_anchors_extrapolate_to_2_25_at_125_percent() {
    let mut input = Scenario::VariableLoad.load().expect("part B");
    let load = input.load_fraction.clone().expect("load fractions");
    extrapolate_torque(&load, &mut input.torque).expect("extrapolate");
    let torque = input.torque.magnitudes(TorqueUnit::NewtonMeter).unwrap();
    let expected = [1.35, 1.8, 2.25, 2.7, 3.15, 3.6];
    for (i, (t, e)) in torque.iter().zip(expected).enumerate() {
        assert_close(&format!("torque[{i}]"), *t, e, 1e-12);
    }
    let hand = 1.8 + (1.8 - 1.35) / (1.0 - 0.75) * (1.25 - 1.0);
    assert_close("hand", torque[2], hand, 1e-12);
}

#[test]
fn slope_is_torque_per_unit_load() {
    let torque = Series::from_partial(
        "torque",
        &[Some(1.35), Some(1.8), None],
        TorqueUnit::NewtonMeter,
    );
    let slope = torque_slope(&[0.75, 1.0, 1.25], &torque).unwrap();
    assert_close("slope", slope.to(TorqueUnit::NewtonMeter).unwrap(), 1.8, 1e-12);
}

#[test]
fn measured_values_beyond_anchors_are_overwritten() {
    let mut torque = Series::from_values("torque", &[1.0, 2.0, 99.0], TorqueUnit::NewtonMeter);
    extrapolate_torque(&[0.0, 1.0, 2.0], &mut torque).unwrap();
    assert_close("torque[2]", torque.get(2).unwrap().value_si(), 3.0, 1e-12);
}

#[test]
fn coincident_anchor_loads_are_rejected() {
    let mut torque = Series::from_partial(
        "torque",
        &[Some(1.0), Some(2.0), None],
        TorqueUnit::NewtonMeter,
    );
    let err = extrapolate_torque(&[1.0, 1.0, 1.5], &mut torque).unwrap_err();
    assert_eq!(err, InterpolationError::CoincidentAnchors { load: 1.0 });
}

#[test]
fn missing_anchor_is_rejected() {
    let mut torque = Series::from_partial("torque", &[Some(1.0), None, None], TorqueUnit::NewtonMeter);
    let err = extrapolate_torque(&[0.5, 1.0, 1.5], &mut torque).unwrap_err();
    assert!(matches!(err, InterpolationError::MissingAnchor(_)));
}

#[test]
fn load_and_torque_lengths_must_agree() {
    let mut torque = Series::from_values("torque", &[1.0, 2.0], TorqueUnit::NewtonMeter);
    let err = extrapolate_torque(&[0.5, 1.0, 1.5], &mut torque).unwrap_err();
    assert_eq!(err, InterpolationError::LengthMismatch { loads: 3, torques: 2 });
}
