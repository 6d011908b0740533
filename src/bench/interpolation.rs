//! 가변 부하 시험의 토크 선형 외삽.
//!
//! 토크는 처음 두 부하에서만 측정했다. 나머지 샘플은 두 기준점 사이의
//! 기울기로 토크가 계속 증가한다고 가정한다.

use std::fmt;

use crate::quantity::{Quantity, QuantityError};
use crate::series::Series;

/// 토크 외삽 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// 샘플이 두 개 미만이라 기준점 쌍이 없음
    NotEnoughAnchors { len: usize },
    /// 부하와 토크 시리즈 길이가 다름
    LengthMismatch { loads: usize, torques: usize },
    /// 기준점 토크가 자리표시임
    MissingAnchor(QuantityError),
    /// 두 기준점의 부하가 같아 기울기가 정의되지 않음
    CoincidentAnchors { load: f64 },
    /// 외삽한 샘플 기록 실패
    Quantity(QuantityError),
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::NotEnoughAnchors { len } => {
                write!(f, "기준점 샘플 두 개가 필요하지만 {len}개뿐임")
            }
            InterpolationError::LengthMismatch { loads, torques } => {
                write!(f, "부하율 {loads}개, 토크 샘플 {torques}개로 길이가 다름")
            }
            InterpolationError::MissingAnchor(e) => write!(f, "기준점 토크 없음: {e}"),
            InterpolationError::CoincidentAnchors { load } => {
                write!(f, "두 기준점이 모두 부하 {load}에 있음")
            }
            InterpolationError::Quantity(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InterpolationError {}

impl From<QuantityError> for InterpolationError {
    fn from(value: QuantityError) -> Self {
        InterpolationError::Quantity(value)
    }
}

/// 기준점 0, 1 사이의 부하율 대비 토크 기울기 (부하율 1당 N·m).
pub fn torque_slope(load: &[f64], torque: &Series) -> Result<Quantity, InterpolationError> {
    if load.len() != torque.len() {
        return Err(InterpolationError::LengthMismatch {
            loads: load.len(),
            torques: torque.len(),
        });
    }
    if load.len() < 2 {
        return Err(InterpolationError::NotEnoughAnchors { len: load.len() });
    }
    let t0 = torque.get(0).map_err(InterpolationError::MissingAnchor)?;
    let t1 = torque.get(1).map_err(InterpolationError::MissingAnchor)?;
    let d_load = load[1] - load[0];
    if d_load == 0.0 {
        return Err(InterpolationError::CoincidentAnchors { load: load[0] });
    }
    let d_torque = t1.checked_sub(t0)?;
    Ok(d_torque / d_load)
}

/// 인덱스 2 이후의 모든 토크 샘플을
/// `slope * (load[i] - load[1]) + torque[1]` 로 덮어쓴다.
pub fn extrapolate_torque(load: &[f64], torque: &mut Series) -> Result<(), InterpolationError> {
    let slope = torque_slope(load, torque)?;
    let anchor = torque.get(1).map_err(InterpolationError::MissingAnchor)?;
    for (i, l) in load.iter().enumerate().skip(2) {
        let value = (slope * (l - load[1])).checked_add(anchor)?;
        torque.set(i, value)?;
        log::debug!("torque[{i}] extrapolated to {:.4} N*m at load {l}", value.value_si());
    }
    Ok(())
}
