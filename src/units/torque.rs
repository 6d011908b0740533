use serde::{Deserialize, Serialize};

use super::Unit;
use crate::quantity::{Dimension, QuantityKind};

/// 토크 단위. 내부 기준은 N·m이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TorqueUnit {
    NewtonMeter,
    PoundForceFoot,
}

const NM_PER_LBF_FT: f64 = 1.355_818;

fn to_newton_meter(value: f64, unit: TorqueUnit) -> f64 {
    match unit {
        TorqueUnit::NewtonMeter => value,
        TorqueUnit::PoundForceFoot => value * NM_PER_LBF_FT,
    }
}

fn from_newton_meter(value: f64, unit: TorqueUnit) -> f64 {
    match unit {
        TorqueUnit::NewtonMeter => value,
        TorqueUnit::PoundForceFoot => value / NM_PER_LBF_FT,
    }
}

/// 토크를 원하는 단위로 변환한다.
pub fn convert_torque(value: f64, from: TorqueUnit, to: TorqueUnit) -> f64 {
    let base = to_newton_meter(value, from);
    from_newton_meter(base, to)
}

impl Unit for TorqueUnit {
    fn dimension(&self) -> Dimension {
        QuantityKind::Torque.dimension()
    }

    fn to_si(&self, value: f64) -> f64 {
        to_newton_meter(value, *self)
    }

    fn from_si(&self, value_si: f64) -> f64 {
        from_newton_meter(value_si, *self)
    }

    fn symbol(&self) -> &'static str {
        match self {
            TorqueUnit::NewtonMeter => "N * m",
            TorqueUnit::PoundForceFoot => "lbf * ft",
        }
    }
}
