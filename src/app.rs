use log::info;

use crate::bench::{self, BenchError, ChartError, Scenario};
use crate::config::{Config, ConfigError};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 시나리오 계산 오류
    Bench(BenchError),
    /// 차트 열 조회 오류
    Chart(ChartError),
    /// 로거가 이미 설치됨
    Logger(log::SetLoggerError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Bench(e) => write!(f, "계산 오류: {e}"),
            AppError::Chart(e) => write!(f, "차트 오류: {e}"),
            AppError::Logger(e) => write!(f, "로거 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<BenchError> for AppError {
    fn from(value: BenchError) -> Self {
        AppError::Bench(value)
    }
}

impl From<ChartError> for AppError {
    fn from(value: ChartError) -> Self {
        AppError::Chart(value)
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(value: log::SetLoggerError) -> Self {
        AppError::Logger(value)
    }
}

/// 선택한 시나리오를 순서대로 계산하고 결과표를 출력한다.
///
/// 하나라도 실패하면 전체 실행을 중단한다.
pub fn run(config: &Config, scenarios: &[Scenario]) -> Result<(), AppError> {
    let constants = config.engine_constants();
    for scenario in scenarios {
        let run = bench::run_scenario(*scenario, &constants)?;
        let table = bench::ResultTable::from_run(&run).map_err(BenchError::from)?;
        ui_cli::print_table(*scenario, &table, config.display.decimals);
        // 차트는 GUI 바이너리가 그린다. 여기서는 열 조회만 확인
        for spec in bench::charts_for(*scenario) {
            spec.resolve(&table)?;
        }
    }
    info!("finished {} scenario(s)", scenarios.len());
    Ok(())
}
