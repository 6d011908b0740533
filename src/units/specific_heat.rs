use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 비열 단위. 내부 기준은 J/(kg·K)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificHeatUnit {
    JoulePerKgK,
    KilojoulePerKgK,
}

fn to_j_per_kgk(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::JoulePerKgK => value,
        SpecificHeatUnit::KilojoulePerKgK => value * 1000.0,
    }
}

fn from_j_per_kgk(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::JoulePerKgK => value,
        SpecificHeatUnit::KilojoulePerKgK => value / 1000.0,
    }
}

/// 비열을 원하는 단위로 변환한다.
pub fn convert_specific_heat(value: f64, from: SpecificHeatUnit, to: SpecificHeatUnit) -> f64 {
    let base = to_j_per_kgk(value, from);
    from_j_per_kgk(base, to)
}

impl Unit for SpecificHeatUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::SpecificHeat.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_j_per_kgk(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_j_per_kgk(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            SpecificHeatUnit::JoulePerKgK => "J/(kg*K)",
            SpecificHeatUnit::KilojoulePerKgK => "kJ/(kg*K)",
        }
    }
}
