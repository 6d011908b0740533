//! 샘플별 물리량 시리즈.

use crate::quantity::{Dimension, Quantity, QuantityError};
use crate::units::Unit;

/// 같은 차원을 공유하는 고정 길이 샘플 열.
///
/// 인덱스 *i* 는 한 실행의 모든 시리즈에서 같은 시험 조건을 가리킨다.
/// `None` 칸은 아직 측정되거나 계산되지 않은 자리표시이다.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: &'static str,
    dimension: Dimension,
    values_si: Vec<Option<f64>>,
}

impl Series {
    /// `unit` 단위로 주어진 측정값 시리즈.
    pub fn from_values<U: Unit>(name: &'static str, values: &[f64], unit: U) -> Self {
        Self {
            name,
            dimension: unit.dimension(),
            values_si: values.iter().map(|v| Some(unit.to_si(*v))).collect(),
        }
    }

    /// `None` 항목을 나중에 채울 자리표시로 두는 시리즈.
    pub fn from_partial<U: Unit>(name: &'static str, values: &[Option<f64>], unit: U) -> Self {
        Self {
            name,
            dimension: unit.dimension(),
            values_si: values.iter().map(|v| v.map(|v| unit.to_si(v))).collect(),
        }
    }

    /// 주어진 차원의 자리표시 `len` 개로 된 시리즈.
    pub fn placeholder(name: &'static str, dimension: Dimension, len: usize) -> Self {
        Self {
            name,
            dimension,
            values_si: vec![None; len],
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.values_si.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values_si.is_empty()
    }

    /// 모든 칸에 값이 있으면 true.
    pub fn is_complete(&self) -> bool {
        self.values_si.iter().all(Option::is_some)
    }

    /// `index` 번 샘플을 물리량으로 반환한다. 자리표시를 읽으면 오류.
    pub fn get(&self, index: usize) -> Result<Quantity, QuantityError> {
        let slot = self
            .values_si
            .get(index)
            .ok_or(QuantityError::IndexOutOfRange {
                series: self.name,
                index,
                len: self.values_si.len(),
            })?;
        let value = slot.ok_or(QuantityError::MissingSample {
            series: self.name,
            index,
        })?;
        Ok(Quantity::from_si(value, self.dimension))
    }

    /// `index` 번 샘플을 기록한다. `value` 의 차원이 시리즈와 같아야 한다.
    pub fn set(&mut self, index: usize, value: Quantity) -> Result<(), QuantityError> {
        value.expect_dimension(self.dimension)?;
        let len = self.values_si.len();
        let slot = self
            .values_si
            .get_mut(index)
            .ok_or(QuantityError::IndexOutOfRange {
                series: self.name,
                index,
                len,
            })?;
        *slot = Some(value.value_si());
        Ok(())
    }

    /// 모든 샘플을 `unit` 기준 크기로 반환한다. 자리표시가 있으면 실패.
    pub fn magnitudes<U: Unit>(&self, unit: U) -> Result<Vec<f64>, QuantityError> {
        (0..self.len())
            .map(|i| self.get(i).and_then(|q| q.to(unit)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AngularSpeedUnit, PowerUnit, TorqueUnit};
    use approx::assert_relative_eq;

    #[test]
    fn placeholder_read_is_missing_sample() {
        let torque = Series::from_partial("torque", &[Some(1.35), None], TorqueUnit::NewtonMeter);
        assert!(!torque.is_complete());
        assert_eq!(
            torque.get(1).unwrap_err(),
            QuantityError::MissingSample {
                series: "torque",
                index: 1
            }
        );
    }

    #[test]
    fn set_rejects_wrong_dimension() {
        let mut torque = Series::placeholder("torque", TorqueUnit::NewtonMeter.dimension(), 2);
        let err = torque
            .set(0, Quantity::new(100.0, PowerUnit::Watt))
            .unwrap_err();
        assert!(matches!(err, QuantityError::DimensionMismatch { .. }));
        torque
            .set(0, Quantity::new(2.0, TorqueUnit::NewtonMeter))
            .unwrap();
        assert_relative_eq!(torque.get(0).unwrap().value_si(), 2.0);
    }

    #[test]
    fn magnitudes_convert_back_to_display_unit() {
        let speed = Series::from_values(
            "speed",
            &[1500.0, 2000.0],
            AngularSpeedUnit::RevolutionPerMinute,
        );
        let rpm = speed.magnitudes(AngularSpeedUnit::RevolutionPerMinute).unwrap();
        assert_relative_eq!(rpm[0], 1500.0, epsilon = 1e-9);
        assert_relative_eq!(rpm[1], 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let speed = Series::from_values("speed", &[1.0], AngularSpeedUnit::RadianPerSecond);
        assert!(matches!(
            speed.get(3),
            Err(QuantityError::IndexOutOfRange { index: 3, len: 1, .. })
        ));
    }
}
