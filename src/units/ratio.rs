use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::Dimension;

/// 무차원 비율 단위 (효율, 부하율).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatioUnit {
    Fraction,
    Percent,
}

fn to_fraction(value: f64, unit: RatioUnit) -> f64 {
    match unit {
        RatioUnit::Fraction => value,
        RatioUnit::Percent => value / 100.0,
    }
}

fn from_fraction(value: f64, unit: RatioUnit) -> f64 {
    match unit {
        RatioUnit::Fraction => value,
        RatioUnit::Percent => value * 100.0,
    }
}

/// 비율을 분수와 퍼센트 사이에서 변환한다.
pub fn convert_ratio(value: f64, from: RatioUnit, to: RatioUnit) -> f64 {
    let base = to_fraction(value, from);
    from_fraction(base, to)
}

impl Unit for RatioUnit {
    fn dimension(&self) -> Dimension {
        Dimension::DIMENSIONLESS
    }

    fn to_si(&self, value: f64) -> f64 {
        to_fraction(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_fraction(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            RatioUnit::Fraction => "-",
            RatioUnit::Percent => "%",
        }
    }
}
