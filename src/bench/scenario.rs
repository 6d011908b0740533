//! 벤치 시험 데이터와 계산에 쓰는 물리 상수.

use std::fmt;

use crate::quantity::Quantity;
use crate::series::Series;
use crate::units::{
    AngularSpeedUnit, DensityUnit, HeatingValueUnit, MassFlowUnit, SpecificHeatUnit,
    TemperatureDiffUnit, TorqueUnit, VolumeUnit,
};

/// 시나리오당 기록된 시험 조건 수.
pub const SAMPLE_COUNT: usize = 6;

/// 엔진에 수행한 두 가지 벤치 시험.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Part A: 가변 속도, 일정 부하
    VariableSpeed,
    /// Part B: 일정 속도(1500 RPM), 가변 부하
    VariableLoad,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::VariableSpeed, Scenario::VariableLoad];

    pub fn title(&self) -> &'static str {
        match self {
            Scenario::VariableSpeed => "Part A: Variable Speed, Constant Load Test",
            Scenario::VariableLoad => "Part B: Constant Speed (1500 RPM), Variable Load Test",
        }
    }

    pub fn table_name(&self) -> &'static str {
        match self {
            Scenario::VariableSpeed => "Table A",
            Scenario::VariableLoad => "Table B",
        }
    }

    /// 이 시나리오에서 벤치에 기록한 측정 시리즈를 반환한다.
    pub fn load(&self) -> Result<BenchInput, ScenarioError> {
        match self {
            Scenario::VariableSpeed => BenchInput::new(
                *self,
                None,
                Series::from_values(
                    "speed",
                    &[1500.0, 2000.0, 2500.0, 3000.0, 3500.0, 4000.0],
                    AngularSpeedUnit::RevolutionPerMinute,
                ),
                Series::from_values("torque", &[1.8; SAMPLE_COUNT], TorqueUnit::NewtonMeter),
                Series::from_values(
                    "fuel_mass_flow",
                    &[5.55e-5, 5.64e-5, 6.83e-5, 8.26e-5, 1.04e-4, 1.18e-4],
                    MassFlowUnit::KilogramPerSecond,
                ),
                Series::from_values(
                    "temperature_rise",
                    &[247.0, 247.0, 247.0, 291.0, 330.0, 350.0],
                    TemperatureDiffUnit::Kelvin,
                ),
            ),
            Scenario::VariableLoad => BenchInput::new(
                *self,
                Some(vec![0.75, 1.0, 1.25, 1.5, 1.75, 2.0]),
                Series::from_values(
                    "speed",
                    &[1500.0; SAMPLE_COUNT],
                    AngularSpeedUnit::RevolutionPerMinute,
                ),
                // 처음 두 부하만 측정, 나머지는 외삽
                Series::from_partial(
                    "torque",
                    &[Some(1.35), Some(1.8), None, None, None, None],
                    TorqueUnit::NewtonMeter,
                ),
                Series::from_values(
                    "fuel_mass_flow",
                    &[4.931e-5, 5.547e-5, 8.452e-5, 8.452e-5, 9.342e-5, 1.18e-4],
                    MassFlowUnit::KilogramPerSecond,
                ),
                Series::from_values(
                    "temperature_rise",
                    &[235.0, 247.0, 250.0, 288.0, 314.0, 345.0],
                    TemperatureDiffUnit::Kelvin,
                ),
            ),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// 시나리오 입력 시리즈 구성 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// 시리즈 샘플 수가 [`SAMPLE_COUNT`] 와 다름
    LengthMismatch {
        series: &'static str,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::LengthMismatch {
                series,
                expected,
                found,
            } => write!(
                f,
                "`{series}` 샘플 수 {found}개, {expected}개 필요"
            ),
        }
    }
}

impl std::error::Error for ScenarioError {}

/// 시나리오 하나의 측정 시리즈. 모두 길이가 같다.
#[derive(Debug, Clone)]
pub struct BenchInput {
    pub scenario: Scenario,
    /// 정격 부하 대비 부하율 (Part B 전용)
    pub load_fraction: Option<Vec<f64>>,
    pub speed: Series,
    pub torque: Series,
    pub fuel_mass_flow: Series,
    pub temperature_rise: Series,
}

impl BenchInput {
    /// 시리즈를 묶는다. 샘플 수가 [`SAMPLE_COUNT`] 가 아닌 시리즈가 있으면 거부한다.
    pub fn new(
        scenario: Scenario,
        load_fraction: Option<Vec<f64>>,
        speed: Series,
        torque: Series,
        fuel_mass_flow: Series,
        temperature_rise: Series,
    ) -> Result<Self, ScenarioError> {
        let expected = SAMPLE_COUNT;
        let mut lengths = vec![
            ("speed", speed.len()),
            ("torque", torque.len()),
            ("fuel_mass_flow", fuel_mass_flow.len()),
            ("temperature_rise", temperature_rise.len()),
        ];
        if let Some(load) = &load_fraction {
            lengths.push(("load_fraction", load.len()));
        }
        if let Some((series, found)) = lengths.into_iter().find(|(_, len)| *len != expected) {
            return Err(ScenarioError::LengthMismatch {
                series,
                expected,
                found,
            });
        }
        Ok(Self {
            scenario,
            load_fraction,
            speed,
            torque,
            fuel_mass_flow,
            temperature_rise,
        })
    }

    pub fn len(&self) -> usize {
        self.speed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speed.is_empty()
    }
}

/// 한 실행의 모든 샘플이 읽기 전용으로 공유하는 물리 상수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConstants {
    pub displacement: Quantity,
    pub air_density: Quantity,
    pub air_specific_heat: Quantity,
    pub fuel_heating_value: Quantity,
}

impl Default for EngineConstants {
    /// 가솔린을 쓰는 100 cc 단기통 4행정 엔진.
    fn default() -> Self {
        Self {
            displacement: Quantity::new(1.0e-4, VolumeUnit::CubicMeter),
            air_density: Quantity::new(1.2, DensityUnit::KilogramPerCubicMeter),
            air_specific_heat: Quantity::new(1.006, SpecificHeatUnit::KilojoulePerKgK),
            fuel_heating_value: Quantity::new(45.2, HeatingValueUnit::KilojoulePerGram),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_scenarios_load_six_samples() {
        for scenario in Scenario::ALL {
            let input = scenario.load().unwrap();
            assert_eq!(input.len(), SAMPLE_COUNT);
        }
    }

    #[test]
    fn only_part_b_has_load_and_placeholder_torque() {
        let a = Scenario::VariableSpeed.load().unwrap();
        assert!(a.load_fraction.is_none());
        assert!(a.torque.is_complete());
        let b = Scenario::VariableLoad.load().unwrap();
        assert_eq!(b.load_fraction.as_ref().map(Vec::len), Some(SAMPLE_COUNT));
        assert!(!b.torque.is_complete());
    }

    #[test]
    fn short_series_is_rejected() {
        let err = BenchInput::new(
            Scenario::VariableSpeed,
            None,
            Series::from_values("speed", &[1500.0; SAMPLE_COUNT], AngularSpeedUnit::RevolutionPerMinute),
            Series::from_values("torque", &[1.8; 5], TorqueUnit::NewtonMeter),
            Series::from_values("fuel_mass_flow", &[5.55e-5; SAMPLE_COUNT], MassFlowUnit::KilogramPerSecond),
            Series::from_values("temperature_rise", &[247.0; SAMPLE_COUNT], TemperatureDiffUnit::Kelvin),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ScenarioError::LengthMismatch {
                series: "torque",
                expected: SAMPLE_COUNT,
                found: 5
            }
        );
        assert_eq!(err.to_string(), "`torque` 샘플 수 5개, 6개 필요");
    }

    #[test]
    fn consistent_but_short_input_is_rejected() {
        let err = BenchInput::new(
            Scenario::VariableLoad,
            Some(vec![0.75, 1.0]),
            Series::from_values("speed", &[1500.0, 1500.0], AngularSpeedUnit::RevolutionPerMinute),
            Series::from_values("torque", &[1.35, 1.8], TorqueUnit::NewtonMeter),
            Series::from_values("fuel_mass_flow", &[4.931e-5, 5.547e-5], MassFlowUnit::KilogramPerSecond),
            Series::from_values("temperature_rise", &[235.0, 247.0], TemperatureDiffUnit::Kelvin),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ScenarioError::LengthMismatch {
                series: "speed",
                expected: SAMPLE_COUNT,
                found: 2
            }
        );
    }
}
