//! 표시 단위 변환이 가역적인지 확인한다.
use engine_bench_toolbox::bench::{run_scenario, EngineConstants, Scenario};
use engine_bench_toolbox::quantity::Quantity;
use engine_bench_toolbox::units::*;

fn assert_rel(label: &str, actual: f64, expected: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1e-12 * expected.abs().max(1e-30),
        "{label} expected {expected:e} got {actual:e}"
    );
}

fn roundtrip<U: Unit>(label: &str, q: Quantity, unit: U) {
    let shown = q.to(unit).expect("dimension");
    let back = Quantity::new(shown, unit);
    assert_rel(label, back.value_si(), q.value_si());
}

#[test]
fn derived_quantities_roundtrip_through_display_units() {
    let run = run_scenario(Scenario::VariableLoad, &EngineConstants::default()).unwrap();
    let d = &run.derived;
    for i in 0..run.input.len() {
        roundtrip("shaft", d.shaft_power.get(i).unwrap(), PowerUnit::Watt);
        roundtrip("fins", d.fins_heat.get(i).unwrap(), PowerUnit::Kilowatt);
        roundtrip("mep", d.mep.get(i).unwrap(), PressureUnit::KiloPascal);
        roundtrip(
            "bsfc",
            d.bsfc.get(i).unwrap(),
            SpecificFuelConsumptionUnit::GramPerWattHour,
        );
        roundtrip("efficiency", d.efficiency.get(i).unwrap(), RatioUnit::Percent);
        roundtrip("air", d.air_mass_flow.get(i).unwrap(), MassFlowUnit::KilogramPerHour);
    }
}

#[test]
fn known_conversion_factors() {
    assert_rel(
        "rpm",
        convert_angular_speed(60.0, AngularSpeedUnit::RevolutionPerMinute, AngularSpeedUnit::RevolutionPerSecond),
        1.0,
    );
    assert_rel("cc", convert_volume(100.0, VolumeUnit::CubicCentimeter, VolumeUnit::CubicMeter), 1e-4);
    assert_rel(
        "lhv",
        convert_heating_value(45.2, HeatingValueUnit::KilojoulePerGram, HeatingValueUnit::MegajoulePerKg),
        45.2,
    );
    assert_rel(
        "bsfc",
        convert_sfc(
            1.0,
            SpecificFuelConsumptionUnit::GramPerWattHour,
            SpecificFuelConsumptionUnit::GramPerKilowattHour,
        ),
        1000.0,
    );
    assert_rel("kpa", convert_pressure(1.0, PressureUnit::Bar, PressureUnit::KiloPascal), 100.0);
    assert_rel(
        "dT",
        convert_temperature_diff(9.0, TemperatureDiffUnit::Fahrenheit, TemperatureDiffUnit::Kelvin),
        5.0,
    );
    assert_rel(
        "cp",
        convert_specific_heat(1.006, SpecificHeatUnit::KilojoulePerKgK, SpecificHeatUnit::JoulePerKgK),
        1006.0,
    );
    assert_rel(
        "rho",
        convert_density(1.2, DensityUnit::KilogramPerCubicMeter, DensityUnit::GramPerCubicCentimeter),
        1.2e-3,
    );
    assert_rel("kg/h", convert_mass_flow(1.0, MassFlowUnit::KilogramPerSecond, MassFlowUnit::KilogramPerHour), 3600.0);
    assert_rel("hp", convert_power(1.0, PowerUnit::Horsepower, PowerUnit::Watt), 745.699_872);
    assert_rel("torque", convert_torque(1.0, TorqueUnit::PoundForceFoot, TorqueUnit::NewtonMeter), 1.355_818);
    assert_rel("ratio", convert_ratio(0.25, RatioUnit::Fraction, RatioUnit::Percent), 25.0);
}
