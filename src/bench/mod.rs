//! 엔진 벤치 시험 파이프라인. 입력 로드, 토크 외삽, 계산, 표 작성, 차트 순으로 진행한다.

pub mod calculator;
pub mod chart;
pub mod interpolation;
pub mod scenario;
pub mod table;

use std::fmt;

use log::info;

pub use calculator::{CalcError, DerivedSeries};
pub use chart::{charts_for, ChartData, ChartError, ChartSpec};
pub use interpolation::InterpolationError;
pub use scenario::{BenchInput, EngineConstants, Scenario, ScenarioError};
pub use table::ResultTable;

use crate::quantity::QuantityError;

/// 시나리오 실행을 중단시키는 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchError {
    /// 입력 시리즈 구성 실패
    Scenario(ScenarioError),
    /// 토크 외삽 실패
    Interpolation(InterpolationError),
    /// 파생량 계산 실패
    Calc(CalcError),
    /// 시리즈를 표로 만들지 못함
    Table(QuantityError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::Scenario(e) => write!(f, "입력 데이터 오류: {e}"),
            BenchError::Interpolation(e) => write!(f, "토크 외삽 오류: {e}"),
            BenchError::Calc(e) => write!(f, "계산 오류: {e}"),
            BenchError::Table(e) => write!(f, "결과표 작성 오류: {e}"),
        }
    }
}

impl std::error::Error for BenchError {}

impl From<ScenarioError> for BenchError {
    fn from(value: ScenarioError) -> Self {
        BenchError::Scenario(value)
    }
}

impl From<InterpolationError> for BenchError {
    fn from(value: InterpolationError) -> Self {
        BenchError::Interpolation(value)
    }
}

impl From<CalcError> for BenchError {
    fn from(value: CalcError) -> Self {
        BenchError::Calc(value)
    }
}

impl From<QuantityError> for BenchError {
    fn from(value: QuantityError) -> Self {
        BenchError::Table(value)
    }
}

/// 완료된 시나리오. 측정 입력(토크 채움)과 파생 시리즈를 담는다.
#[derive(Debug, Clone)]
pub struct BenchRun {
    pub input: BenchInput,
    pub derived: DerivedSeries,
}

impl BenchRun {
    pub fn scenario(&self) -> Scenario {
        self.input.scenario
    }
}

/// 시나리오를 파생 시리즈까지 끝까지 계산한다.
pub fn run_scenario(
    scenario: Scenario,
    constants: &EngineConstants,
) -> Result<BenchRun, BenchError> {
    info!("running {scenario}");
    let mut input = scenario.load()?;
    if let Some(load) = input.load_fraction.clone() {
        interpolation::extrapolate_torque(&load, &mut input.torque)?;
    }
    let derived = calculator::compute(&input, constants)?;
    info!("{} computed for {} samples", scenario.table_name(), input.len());
    Ok(BenchRun { input, derived })
}

/// 시나리오를 계산하고 결과를 표로 정리한다.
pub fn tabulate_scenario(
    scenario: Scenario,
    constants: &EngineConstants,
) -> Result<ResultTable, BenchError> {
    let run = run_scenario(scenario, constants)?;
    Ok(ResultTable::from_run(&run)?)
}
