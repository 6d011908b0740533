//! 결과표 열을 이용한 꺾은선 차트 정의.
//!
//! 차트는 계산하지 않고 기존 열을 짝지을 뿐이다.

use std::fmt;

use super::scenario::Scenario;
use super::table::{
    ResultTable, COL_EXHAUST_HEAT, COL_FINS_HEAT, COL_FUEL_MASS_FLOW, COL_POWER_INPUT,
    COL_POWER_SHAFT, COL_SPEED, COL_TORQUE,
};

const LEGEND_INPUT: &str = "Input Power: Gasoline (chemical)";
const LEGEND_FINS: &str = "Output Power: Fins (heat)";
const LEGEND_EXHAUST: &str = "Output Power: Exhaust (heat)";
const LEGEND_SHAFT: &str = "Output Power: Shaft (mechanical)";

/// 차트 열 조회 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// 표에 없는 열을 참조함
    MissingColumn { chart: String, column: String },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::MissingColumn { chart, column } => {
                write!(f, "차트 `{chart}`에 필요한 열 `{column}`이 없음")
            }
        }
    }
}

impl std::error::Error for ChartError {}

/// 그릴 선 하나. 종속 열과 선택적 범례.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSpec {
    pub column: &'static str,
    pub legend: Option<&'static str>,
}

/// 어떤 열을 어떤 열에 대해 그리고 어떻게 표기할지 정의한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub x_column: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<SeriesSpec>,
}

/// 그릴 준비가 된 선.
#[derive(Debug, Clone, PartialEq)]
pub struct LineData {
    pub legend: Option<String>,
    pub points: Vec<[f64; 2]>,
}

/// 표에서 점을 찾아 채운 차트.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub lines: Vec<LineData>,
}

impl ChartData {
    pub fn has_legend(&self) -> bool {
        self.lines.iter().any(|l| l.legend.is_some())
    }
}

fn line(column: &'static str, legend: &'static str) -> SeriesSpec {
    SeriesSpec {
        column,
        legend: Some(legend),
    }
}

fn bare(column: &'static str) -> SeriesSpec {
    SeriesSpec {
        column,
        legend: None,
    }
}

impl ChartSpec {
    /// `table` 에서 x 열과 모든 시리즈 열을 찾는다.
    pub fn resolve(&self, table: &ResultTable) -> Result<ChartData, ChartError> {
        let lookup = |column: &str| {
            table.column(column).ok_or_else(|| ChartError::MissingColumn {
                chart: self.title.to_string(),
                column: column.to_string(),
            })
        };
        let xs = lookup(self.x_column)?;
        let lines = self
            .series
            .iter()
            .map(|s| {
                let ys = lookup(s.column)?;
                Ok(LineData {
                    legend: s.legend.map(str::to_string),
                    points: xs.iter().zip(ys).map(|(x, y)| [*x, *y]).collect(),
                })
            })
            .collect::<Result<Vec<_>, ChartError>>()?;
        Ok(ChartData {
            title: self.title.to_string(),
            x_label: self.x_label.to_string(),
            y_label: self.y_label.to_string(),
            lines,
        })
    }
}

/// 벤치 시험마다 그리는 세 차트.
pub fn charts_for(scenario: Scenario) -> Vec<ChartSpec> {
    match scenario {
        Scenario::VariableSpeed => vec![
            ChartSpec {
                title: "Engine Performance vs Speed (RPM)",
                x_column: COL_SPEED,
                x_label: "Speed (RPM)",
                y_label: "Power (W)",
                series: vec![
                    line(COL_POWER_INPUT, LEGEND_INPUT),
                    line(COL_FINS_HEAT, LEGEND_FINS),
                    line(COL_EXHAUST_HEAT, LEGEND_EXHAUST),
                    line(COL_POWER_SHAFT, LEGEND_SHAFT),
                ],
            },
            ChartSpec {
                title: "Fuel Mass Flow vs Speed (RPM)",
                x_column: COL_SPEED,
                x_label: "Speed (RPM)",
                y_label: "Fuel Mass Flow (kg/s)",
                series: vec![bare(COL_FUEL_MASS_FLOW)],
            },
            ChartSpec {
                title: "Engine Performance vs Fuel Mass Flow",
                x_column: COL_FUEL_MASS_FLOW,
                x_label: "Fuel Mass Flow (kg/s)",
                y_label: "Power (W)",
                series: vec![
                    line(COL_POWER_INPUT, "Power Input: Gasoline (chemical)"),
                    line(COL_POWER_SHAFT, "Power Output: Shaft (mechanical)"),
                ],
            },
        ],
        Scenario::VariableLoad => vec![
            ChartSpec {
                // 벤치 시트는 여기서도 Part A 제목을 쓴다
                title: "Engine Performance vs Speed (RPM)",
                x_column: COL_TORQUE,
                x_label: "Torque (N * m)",
                y_label: "Power (W)",
                series: vec![
                    line(COL_POWER_INPUT, LEGEND_INPUT),
                    line(COL_FINS_HEAT, LEGEND_FINS),
                    line(COL_POWER_SHAFT, LEGEND_SHAFT),
                    line(COL_EXHAUST_HEAT, LEGEND_EXHAUST),
                ],
            },
            ChartSpec {
                title: "Fuel Mass Flow vs Torque (N * m)",
                x_column: COL_TORQUE,
                x_label: "Torque (N * m)",
                y_label: "Fuel Mass Flow (kg/s)",
                series: vec![bare(COL_FUEL_MASS_FLOW)],
            },
            ChartSpec {
                title: "Torque vs Fuel Mass Flow",
                x_column: COL_FUEL_MASS_FLOW,
                x_label: "Fuel Mass Flow (kg/s)",
                y_label: "Torque (N m)",
                series: vec![line(COL_TORQUE, "Torque")],
            },
        ],
    }
}
