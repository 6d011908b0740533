//! 설정 파싱과 그로부터 만들어지는 엔진 상수 테스트.
use engine_bench_toolbox::bench::{run_scenario, EngineConstants, Scenario};
use engine_bench_toolbox::config::{self, Config};
use engine_bench_toolbox::units::{PressureUnit, VolumeUnit};

#[test]
fn default_config_reproduces_bench_constants() {
    let cfg = Config::default();
    assert_eq!(cfg.engine_constants(), EngineConstants::default());
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.display.decimals, 4);
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let cfg = config::from_toml_str(
        r#"
log_level = "debug"

[constants]
displacement = 100.0
displacement_unit = "CubicCentimeter"
"#,
    )
    .expect("parse");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.constants.displacement_unit, VolumeUnit::CubicCentimeter);
    assert_eq!(cfg.constants.air_density, 1.2);
    assert_eq!(cfg.display.decimals, 4);
    // 100 cc is the same engine as 1e-4 m³
    let a = cfg.engine_constants().displacement.value_si();
    assert!((a - 1e-4).abs() < 1e-18);
}

#[test]
fn larger_displacement_reading_scales_mep_down() {
    // the alternate `10e-4` literal means 1e-3 m³
    let cfg = config::from_toml_str("[constants]\ndisplacement = 10e-4\n").unwrap();
    let run = run_scenario(Scenario::VariableSpeed, &cfg.engine_constants()).unwrap();
    let mep = run.derived.mep.get(0).unwrap().to(PressureUnit::KiloPascal).unwrap();
    assert!((mep - 22.6195).abs() < 1e-3);
}

#[test]
fn unknown_unit_is_a_parse_error() {
    let err = config::from_toml_str("[constants]\ndisplacement_unit = \"Gallon\"\n").unwrap_err();
    assert!(matches!(err, config::ConfigError::Parse(_)));
}

#[test]
fn missing_file_yields_defaults_without_writing() {
    let path = std::env::temp_dir().join("engine_bench_missing_config_test.toml");
    let _ = std::fs::remove_file(&path);
    let cfg = config::load_or_default(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(!path.exists());
}

#[test]
fn saved_config_loads_back() {
    let path = std::env::temp_dir().join("engine_bench_saved_config_test.toml");
    let mut cfg = Config::default();
    cfg.display.decimals = 2;
    cfg.save(&path).unwrap();
    let loaded = config::load_or_default(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, cfg);
}
