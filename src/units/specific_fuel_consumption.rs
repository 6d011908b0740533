use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 제동 연료 소비율(BSFC) 단위. 내부 기준은 kg/J이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificFuelConsumptionUnit {
    KilogramPerJoule,
    GramPerWattHour,
    GramPerKilowattHour,
}

// 1 kg/J = 1000 g / (1/3600 W·h)
const G_PER_WH_PER_KG_PER_J: f64 = 1000.0 * 3600.0;

fn to_kg_per_joule(value: f64, unit: SpecificFuelConsumptionUnit) -> f64 {
    match unit {
        SpecificFuelConsumptionUnit::KilogramPerJoule => value,
        SpecificFuelConsumptionUnit::GramPerWattHour => value / G_PER_WH_PER_KG_PER_J,
        SpecificFuelConsumptionUnit::GramPerKilowattHour => {
            value / (G_PER_WH_PER_KG_PER_J * 1000.0)
        }
    }
}

fn from_kg_per_joule(value: f64, unit: SpecificFuelConsumptionUnit) -> f64 {
    match unit {
        SpecificFuelConsumptionUnit::KilogramPerJoule => value,
        SpecificFuelConsumptionUnit::GramPerWattHour => value * G_PER_WH_PER_KG_PER_J,
        SpecificFuelConsumptionUnit::GramPerKilowattHour => {
            value * G_PER_WH_PER_KG_PER_J * 1000.0
        }
    }
}

/// 연료 소비율을 원하는 단위로 변환한다.
pub fn convert_sfc(
    value: f64,
    from: SpecificFuelConsumptionUnit,
    to: SpecificFuelConsumptionUnit,
) -> f64 {
    let base = to_kg_per_joule(value, from);
    from_kg_per_joule(base, to)
}

impl Unit for SpecificFuelConsumptionUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::SpecificFuelConsumption.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_kg_per_joule(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_kg_per_joule(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            SpecificFuelConsumptionUnit::KilogramPerJoule => "kg/J",
            SpecificFuelConsumptionUnit::GramPerWattHour => "g/(W*h)",
            SpecificFuelConsumptionUnit::GramPerKilowattHour => "g/(kW*h)",
        }
    }
}
