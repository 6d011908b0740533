//! 결과표. 샘플마다 한 행, 물리량마다 이름 붙은 한 열.

use prettytable::{format, Cell, Row, Table};

use super::BenchRun;
use crate::quantity::QuantityError;
use crate::series::Series;
use crate::units::{
    AngularSpeedUnit, MassFlowUnit, PowerUnit, PressureUnit, RatioUnit,
    SpecificFuelConsumptionUnit, TemperatureDiffUnit, TorqueUnit, Unit,
};

pub const COL_PERCENT_LOAD: &str = "Percent Load (%)";
pub const COL_SPEED: &str = "Speed (RPM)";
pub const COL_TORQUE: &str = "Torque (N * m)";
pub const COL_POWER_SHAFT: &str = "Power Shaft (W)";
pub const COL_POWER_INPUT: &str = "Power Input (W)";
pub const COL_EFFICIENCY: &str = "Efficiency (%)";
pub const COL_MEP: &str = "MEP (kPa)";
pub const COL_BSFC: &str = "BSFC (g/(W*h))";
pub const COL_EXHAUST_HEAT: &str = "Exhaust Heat (W)";
pub const COL_FINS_HEAT: &str = "Fins Heat (W)";
pub const COL_AIR_MASS_FLOW: &str = "Air Mass Flow (kg/s)";
pub const COL_FUEL_MASS_FLOW: &str = "Fuel Mass Flow (kg/s)";
pub const COL_DELTA_T: &str = "Delta T (delta_K)";

/// 이름이 붙은 값 열. 단위는 이름에 들어 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub label: String,
    pub values: Vec<f64>,
}

/// 시나리오 시리즈를 전치하고 단위를 뗀 표.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    columns: Vec<Column>,
}

impl ResultTable {
    /// 모든 측정/파생 시리즈를 표시 단위로 배치한다.
    pub fn from_run(run: &BenchRun) -> Result<Self, QuantityError> {
        let input = &run.input;
        let derived = &run.derived;
        let mut table = ResultTable::default();
        if let Some(load) = &input.load_fraction {
            table.push(COL_PERCENT_LOAD, load.clone());
        }
        table.push_series(
            COL_SPEED,
            &input.speed,
            AngularSpeedUnit::RevolutionPerMinute,
        )?;
        table.push_series(COL_TORQUE, &input.torque, TorqueUnit::NewtonMeter)?;
        table.push_series(COL_POWER_SHAFT, &derived.shaft_power, PowerUnit::Watt)?;
        table.push_series(COL_POWER_INPUT, &derived.input_heat, PowerUnit::Watt)?;
        table.push_series(COL_EFFICIENCY, &derived.efficiency, RatioUnit::Percent)?;
        table.push_series(COL_MEP, &derived.mep, PressureUnit::KiloPascal)?;
        table.push_series(
            COL_BSFC,
            &derived.bsfc,
            SpecificFuelConsumptionUnit::GramPerWattHour,
        )?;
        table.push_series(COL_EXHAUST_HEAT, &derived.exhaust_heat, PowerUnit::Watt)?;
        table.push_series(COL_FINS_HEAT, &derived.fins_heat, PowerUnit::Watt)?;
        table.push_series(
            COL_AIR_MASS_FLOW,
            &derived.air_mass_flow,
            MassFlowUnit::KilogramPerSecond,
        )?;
        table.push_series(
            COL_FUEL_MASS_FLOW,
            &input.fuel_mass_flow,
            MassFlowUnit::KilogramPerSecond,
        )?;
        table.push_series(
            COL_DELTA_T,
            &input.temperature_rise,
            TemperatureDiffUnit::Kelvin,
        )?;
        Ok(table)
    }

    pub fn push(&mut self, label: &str, values: Vec<f64>) {
        self.columns.push(Column {
            label: label.to_string(),
            values,
        });
    }

    fn push_series<U: Unit>(
        &mut self,
        label: &str,
        series: &Series,
        unit: U,
    ) -> Result<(), QuantityError> {
        let values = series.magnitudes(unit)?;
        self.push(label, values);
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// 이름으로 열 값을 찾는다.
    pub fn column(&self, label: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.values.as_slice())
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// `index` 번 샘플의 모든 열 값 (열 순서).
    pub fn row(&self, index: usize) -> Vec<f64> {
        self.columns
            .iter()
            .filter_map(|c| c.values.get(index).copied())
            .collect()
    }

    /// 터미널 출력용 표를 만든다.
    pub fn to_pretty_table(&self, decimals: usize) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(
            self.columns.iter().map(|c| Cell::new(&c.label)).collect(),
        ));
        for i in 0..self.row_count() {
            let cells = self
                .row(i)
                .into_iter()
                .map(|v| Cell::new(&format_value(v, decimals)))
                .collect();
            table.add_row(Row::new(cells));
        }
        table
    }
}

/// 일반 값은 고정 소수점, 아주 작은 유량은 지수 표기로 출력한다.
pub fn format_value(value: f64, decimals: usize) -> String {
    if value != 0.0 && value.abs() < 1e-2 {
        format!("{value:.prec$e}", prec = decimals.saturating_sub(1).max(1))
    } else {
        format!("{value:.decimals$}")
    }
}
