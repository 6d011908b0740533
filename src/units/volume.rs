use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 체적 단위. 내부 기준은 m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    /// cc, 소형 엔진 배기량에 흔히 쓰는 단위
    CubicCentimeter,
}

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 1000.0,
        VolumeUnit::CubicCentimeter => value / 1_000_000.0,
    }
}

fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value * 1000.0,
        VolumeUnit::CubicCentimeter => value * 1_000_000.0,
    }
}

/// 체적을 원하는 단위로 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}

impl Unit for VolumeUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::Volume.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_cubic_meter(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_cubic_meter(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m^3",
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicCentimeter => "cc",
        }
    }
}
