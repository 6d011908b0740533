use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 동력(열유량 포함) 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    /// 기계식 마력
    Horsepower,
}

const W_PER_HP: f64 = 745.699_872;

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::Horsepower => value * W_PER_HP,
    }
}

fn from_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value / 1000.0,
        PowerUnit::Horsepower => value / W_PER_HP,
    }
}

/// 동력을 원하는 단위로 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let w = to_watt(value, from);
    from_watt(w, to)
}

impl Unit for PowerUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::Power.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_watt(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_watt(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Horsepower => "hp",
        }
    }
}
