//! 측정 시리즈로부터 계산하는 파생 성능량.

use std::f64::consts::PI;
use std::fmt;

use log::{debug, warn};

use super::scenario::{BenchInput, EngineConstants};
use crate::quantity::{Quantity, QuantityError, QuantityKind};
use crate::series::Series;
use crate::units::PowerUnit;

/// 샘플 계산 중 발생한 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcError {
    /// 실패한 샘플(시험 조건)
    pub index: usize,
    pub source: QuantityError,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}번 샘플: {}", self.index, self.source)
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// 시나리오 하나에서 계산한 파생량. SI 로 저장한다.
#[derive(Debug, Clone)]
pub struct DerivedSeries {
    pub air_mass_flow: Series,
    pub exhaust_heat: Series,
    pub input_heat: Series,
    pub shaft_power: Series,
    pub fins_heat: Series,
    /// 열효율 (분수)
    pub efficiency: Series,
    pub bsfc: Series,
    pub mep: Series,
}

impl DerivedSeries {
    fn placeholders(len: usize) -> Self {
        Self {
            air_mass_flow: Series::placeholder(
                "air_mass_flow",
                QuantityKind::MassFlow.dimension(),
                len,
            ),
            exhaust_heat: Series::placeholder("exhaust_heat", QuantityKind::Power.dimension(), len),
            input_heat: Series::placeholder("input_heat", QuantityKind::Power.dimension(), len),
            shaft_power: Series::placeholder("shaft_power", QuantityKind::Power.dimension(), len),
            fins_heat: Series::placeholder("fins_heat", QuantityKind::Power.dimension(), len),
            efficiency: Series::placeholder("efficiency", QuantityKind::Ratio.dimension(), len),
            bsfc: Series::placeholder(
                "bsfc",
                QuantityKind::SpecificFuelConsumption.dimension(),
                len,
            ),
            mep: Series::placeholder("mep", QuantityKind::Pressure.dimension(), len),
        }
    }
}

/// 샘플 하나의 파생값.
#[derive(Debug, Clone, Copy)]
pub struct SamplePerformance {
    pub air_mass_flow: Quantity,
    pub exhaust_heat: Quantity,
    pub input_heat: Quantity,
    pub shaft_power: Quantity,
    pub fins_heat: Quantity,
    pub efficiency: Quantity,
    pub bsfc: Quantity,
    pub mep: Quantity,
}

/// 시험 조건 하나의 에너지 수지를 계산한다.
///
/// 4행정 엔진은 2회전마다 배기량 1회분의 공기를 흡입하므로 2 turn 으로 나눈다.
pub fn sample_performance(
    speed: Quantity,
    torque: Quantity,
    fuel_mass_flow: Quantity,
    temperature_rise: Quantity,
    constants: &EngineConstants,
) -> Result<SamplePerformance, QuantityError> {
    let air_mass_flow =
        constants.air_density * constants.displacement * speed / (Quantity::turn() * 2.0);
    air_mass_flow.expect_dimension(QuantityKind::MassFlow.dimension())?;

    let exhaust_heat = air_mass_flow * constants.air_specific_heat * temperature_rise;
    exhaust_heat.expect_dimension(QuantityKind::Power.dimension())?;

    let input_heat = fuel_mass_flow * constants.fuel_heating_value;
    input_heat.expect_dimension(QuantityKind::Power.dimension())?;

    let shaft_power = speed * torque;
    shaft_power.expect_dimension(QuantityKind::Power.dimension())?;

    // 측정값이 아니라 에너지 수지의 잔여분
    let fins_heat = input_heat
        .checked_sub(exhaust_heat)?
        .checked_sub(shaft_power)?;

    let efficiency = shaft_power.checked_div(input_heat, "efficiency")?;
    let bsfc = fuel_mass_flow.checked_div(shaft_power, "bsfc")?;
    let mep = torque.checked_div(constants.displacement, "mep")? * (4.0 * PI);
    mep.expect_dimension(QuantityKind::Pressure.dimension())?;

    Ok(SamplePerformance {
        air_mass_flow,
        exhaust_heat,
        input_heat,
        shaft_power,
        fins_heat,
        efficiency,
        bsfc,
        mep,
    })
}

/// 시나리오의 모든 성능 시리즈를 계산한다. 샘플은 서로 독립이며
/// 처음 실패한 샘플에서 중단한다.
pub fn compute(input: &BenchInput, constants: &EngineConstants) -> Result<DerivedSeries, CalcError> {
    let mut derived = DerivedSeries::placeholders(input.len());
    for index in 0..input.len() {
        let at = |source: QuantityError| CalcError { index, source };
        let perf = sample_performance(
            input.speed.get(index).map_err(at)?,
            input.torque.get(index).map_err(at)?,
            input.fuel_mass_flow.get(index).map_err(at)?,
            input.temperature_rise.get(index).map_err(at)?,
            constants,
        )
        .map_err(at)?;

        if perf.fins_heat.value_si() < 0.0 {
            warn!(
                "{}: sample {index} has a negative fins heat of {:.1} W, check the bench data",
                input.scenario.table_name(),
                perf.fins_heat.value_si()
            );
        }
        debug!(
            "{} sample {index}: shaft {:.2} W, input {:.2} W, exhaust {:.2} W, efficiency {:.2} %",
            input.scenario.table_name(),
            perf.shaft_power.to(PowerUnit::Watt).map_err(at)?,
            perf.input_heat.to(PowerUnit::Watt).map_err(at)?,
            perf.exhaust_heat.to(PowerUnit::Watt).map_err(at)?,
            perf.efficiency.value_si() * 100.0,
        );

        derived.air_mass_flow.set(index, perf.air_mass_flow).map_err(at)?;
        derived.exhaust_heat.set(index, perf.exhaust_heat).map_err(at)?;
        derived.input_heat.set(index, perf.input_heat).map_err(at)?;
        derived.shaft_power.set(index, perf.shaft_power).map_err(at)?;
        derived.fins_heat.set(index, perf.fins_heat).map_err(at)?;
        derived.efficiency.set(index, perf.efficiency).map_err(at)?;
        derived.bsfc.set(index, perf.bsfc).map_err(at)?;
        derived.mep.set(index, perf.mep).map_err(at)?;
    }
    Ok(derived)
}
