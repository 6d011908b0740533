use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 압력 단위. 내부 기준은 Pa이다.
///
/// MEP 같은 압력차만 다루므로 게이지/절대압 구분은 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    Bar,
}

const PA_PER_BAR: f64 = 100_000.0;

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
    }
}

fn from_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value / 1000.0,
        PressureUnit::Bar => value / PA_PER_BAR,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}

impl Unit for PressureUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::Pressure.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_pascal(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_pascal(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Bar => "bar",
        }
    }
}
