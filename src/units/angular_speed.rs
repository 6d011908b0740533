use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 회전 속도 단위. 내부 기준은 rad/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngularSpeedUnit {
    RadianPerSecond,
    RevolutionPerMinute,
    RevolutionPerSecond,
}

fn to_rad_per_s(value: f64, unit: AngularSpeedUnit) -> f64 {
    match unit {
        AngularSpeedUnit::RadianPerSecond => value,
        AngularSpeedUnit::RevolutionPerMinute => value * TAU / 60.0,
        AngularSpeedUnit::RevolutionPerSecond => value * TAU,
    }
}

fn from_rad_per_s(value: f64, unit: AngularSpeedUnit) -> f64 {
    match unit {
        AngularSpeedUnit::RadianPerSecond => value,
        AngularSpeedUnit::RevolutionPerMinute => value * 60.0 / TAU,
        AngularSpeedUnit::RevolutionPerSecond => value / TAU,
    }
}

/// 회전 속도를 원하는 단위로 변환한다.
pub fn convert_angular_speed(value: f64, from: AngularSpeedUnit, to: AngularSpeedUnit) -> f64 {
    let base = to_rad_per_s(value, from);
    from_rad_per_s(base, to)
}

impl Unit for AngularSpeedUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::AngularSpeed.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_rad_per_s(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_rad_per_s(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            AngularSpeedUnit::RadianPerSecond => "rad/s",
            AngularSpeedUnit::RevolutionPerMinute => "RPM",
            AngularSpeedUnit::RevolutionPerSecond => "rev/s",
        }
    }
}
