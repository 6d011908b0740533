use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 밀도 단위. 내부 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
}

fn to_kg_per_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value * 1000.0,
    }
}

fn from_kg_per_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value / 1000.0,
    }
}

/// 밀도를 원하는 단위로 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    let base = to_kg_per_m3(value, from);
    from_kg_per_m3(base, to)
}

impl Unit for DensityUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::Density.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_kg_per_m3(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_kg_per_m3(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            DensityUnit::KilogramPerCubicMeter => "kg/m^3",
            DensityUnit::GramPerCubicCentimeter => "g/cm^3",
        }
    }
}
