//! 명령행 인자 파싱과 CLI 실행 경로.
use clap::Parser;

use engine_bench_toolbox::app::{self, AppError};
use engine_bench_toolbox::bench::Scenario;
use engine_bench_toolbox::config::{self, Config};
use engine_bench_toolbox::ui_cli::{CliArgs, ScenarioArg};

#[test]
fn defaults_run_both_scenarios() {
    let args = CliArgs::try_parse_from(["engine_bench_cli"]).unwrap();
    assert_eq!(args.scenario, ScenarioArg::All);
    assert_eq!(
        args.scenario.scenarios(),
        vec![Scenario::VariableSpeed, Scenario::VariableLoad]
    );
    assert_eq!(args.config.to_str(), Some(config::DEFAULT_CONFIG_PATH));
    assert!(!args.verbose);
    assert!(!args.save_config);
}

#[test]
fn scenario_b_selects_variable_load_only() {
    let args = CliArgs::try_parse_from(["engine_bench_cli", "--scenario", "b"]).unwrap();
    assert_eq!(args.scenario, ScenarioArg::B);
    assert_eq!(args.scenario.scenarios(), vec![Scenario::VariableLoad]);
}

#[test]
fn short_flags_are_accepted() {
    let args =
        CliArgs::try_parse_from(["engine_bench_cli", "-s", "a", "-c", "bench.toml", "-v", "--save-config"])
            .unwrap();
    assert_eq!(args.scenario.scenarios(), vec![Scenario::VariableSpeed]);
    assert_eq!(args.config.to_str(), Some("bench.toml"));
    assert!(args.verbose);
    assert!(args.save_config);
}

#[test]
fn unknown_scenario_is_rejected() {
    assert!(CliArgs::try_parse_from(["engine_bench_cli", "--scenario", "c"]).is_err());
}

#[test]
fn run_prints_and_resolves_charts_for_part_b() {
    app::run(&Config::default(), &[Scenario::VariableLoad]).unwrap();
}

#[test]
fn run_with_zero_displacement_stops_at_first_sample() {
    let mut cfg = Config::default();
    cfg.constants.displacement = 0.0;
    let err = app::run(&cfg, &[Scenario::VariableSpeed]).unwrap_err();
    assert!(matches!(err, AppError::Bench(_)), "{err}");
}

fn error_kind(err: &AppError) -> &'static str {
    match err {
        AppError::Config(_) => "config",
        AppError::Bench(_) => "bench",
        AppError::Chart(_) => "chart",
        AppError::Logger(_) => "logger",
    }
}

#[test]
fn config_io_failure_surfaces_as_config_error() {
    // 디렉터리는 존재하지만 파일로 읽을 수 없다
    let dir = std::env::temp_dir();
    let err: AppError = config::load_or_default(&dir).unwrap_err().into();
    assert!(matches!(err, AppError::Config(config::ConfigError::Io(_))), "{err}");
    assert_eq!(error_kind(&err), "config");
}
