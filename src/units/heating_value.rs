use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 연료 발열량(질량당 에너지) 단위. 내부 기준은 J/kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatingValueUnit {
    JoulePerKg,
    KilojoulePerGram,
    MegajoulePerKg,
}

fn to_j_per_kg(value: f64, unit: HeatingValueUnit) -> f64 {
    match unit {
        HeatingValueUnit::JoulePerKg => value,
        // kJ/g 와 MJ/kg 은 크기가 같다
        HeatingValueUnit::KilojoulePerGram | HeatingValueUnit::MegajoulePerKg => value * 1.0e6,
    }
}

fn from_j_per_kg(value: f64, unit: HeatingValueUnit) -> f64 {
    match unit {
        HeatingValueUnit::JoulePerKg => value,
        HeatingValueUnit::KilojoulePerGram | HeatingValueUnit::MegajoulePerKg => value / 1.0e6,
    }
}

/// 발열량을 원하는 단위로 변환한다.
pub fn convert_heating_value(value: f64, from: HeatingValueUnit, to: HeatingValueUnit) -> f64 {
    let base = to_j_per_kg(value, from);
    from_j_per_kg(base, to)
}

impl Unit for HeatingValueUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::HeatingValue.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_j_per_kg(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_j_per_kg(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            HeatingValueUnit::JoulePerKg => "J/kg",
            HeatingValueUnit::KilojoulePerGram => "kJ/g",
            HeatingValueUnit::MegajoulePerKg => "MJ/kg",
        }
    }
}
