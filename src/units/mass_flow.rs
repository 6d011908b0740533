use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 질량 유량 단위. 내부 기준은 kg/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassFlowUnit {
    KilogramPerSecond,
    GramPerSecond,
    KilogramPerHour,
}

fn to_kg_per_s(value: f64, unit: MassFlowUnit) -> f64 {
    match unit {
        MassFlowUnit::KilogramPerSecond => value,
        MassFlowUnit::GramPerSecond => value / 1000.0,
        MassFlowUnit::KilogramPerHour => value / 3600.0,
    }
}

fn from_kg_per_s(value: f64, unit: MassFlowUnit) -> f64 {
    match unit {
        MassFlowUnit::KilogramPerSecond => value,
        MassFlowUnit::GramPerSecond => value * 1000.0,
        MassFlowUnit::KilogramPerHour => value * 3600.0,
    }
}

/// 질량 유량을 원하는 단위로 변환한다.
pub fn convert_mass_flow(value: f64, from: MassFlowUnit, to: MassFlowUnit) -> f64 {
    let base = to_kg_per_s(value, from);
    from_kg_per_s(base, to)
}

impl Unit for MassFlowUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::MassFlow.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_kg_per_s(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_kg_per_s(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            MassFlowUnit::KilogramPerSecond => "kg/s",
            MassFlowUnit::GramPerSecond => "g/s",
            MassFlowUnit::KilogramPerHour => "kg/h",
        }
    }
}
