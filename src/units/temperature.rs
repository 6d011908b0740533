use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 온도차 단위. 오프셋 없이 눈금 크기만 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

fn to_kelvin_diff(value: f64, unit: TemperatureDiffUnit) -> f64 {
    // K, °C 는 1:1, °F, R 은 1.8:1
    match unit {
        TemperatureDiffUnit::Kelvin | TemperatureDiffUnit::Celsius => value,
        TemperatureDiffUnit::Fahrenheit | TemperatureDiffUnit::Rankine => value * 5.0 / 9.0,
    }
}

fn from_kelvin_diff(value: f64, unit: TemperatureDiffUnit) -> f64 {
    match unit {
        TemperatureDiffUnit::Kelvin | TemperatureDiffUnit::Celsius => value,
        TemperatureDiffUnit::Fahrenheit | TemperatureDiffUnit::Rankine => value * 9.0 / 5.0,
    }
}

/// 온도차를 원하는 단위로 변환한다.
pub fn convert_temperature_diff(
    value: f64,
    from: TemperatureDiffUnit,
    to: TemperatureDiffUnit,
) -> f64 {
    let base_k = to_kelvin_diff(value, from);
    from_kelvin_diff(base_k, to)
}

impl Unit for TemperatureDiffUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::TemperatureDifference.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_kelvin_diff(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_kelvin_diff(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            TemperatureDiffUnit::Kelvin => "delta_K",
            TemperatureDiffUnit::Celsius => "delta_degC",
            TemperatureDiffUnit::Fahrenheit => "delta_degF",
            TemperatureDiffUnit::Rankine => "delta_R",
        }
    }
}
