//! 차원 검사가 붙은 스칼라 물리량.
//!
//! 모든 값은 SI 기본 단위로 저장하고 물리 차원(질량, 길이, 시간, 온도의 지수)을
//! 함께 들고 다닌다. 각도는 무차원 rad 로 취급하므로 1 turn 은 `2π` 이다.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Div, Mul};

use crate::units::Unit;

/// 물리량을 구성하는 SI 기본 차원의 지수.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub mass: i8,
    pub length: i8,
    pub time: i8,
    pub temperature: i8,
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0);

    pub const fn new(mass: i8, length: i8, time: i8, temperature: i8) -> Self {
        Self {
            mass,
            length,
            time,
            temperature,
        }
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        Dimension::new(
            self.mass + rhs.mass,
            self.length + rhs.length,
            self.time + rhs.time,
            self.temperature + rhs.temperature,
        )
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        Dimension::new(
            self.mass - rhs.mass,
            self.length - rhs.length,
            self.time - rhs.time,
            self.temperature - rhs.temperature,
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let parts: Vec<String> = [
            ("kg", self.mass),
            ("m", self.length),
            ("s", self.time),
            ("K", self.temperature),
        ]
        .iter()
        .filter(|(_, exp)| *exp != 0)
        .map(|(sym, exp)| {
            if *exp == 1 {
                sym.to_string()
            } else {
                format!("{sym}^{exp}")
            }
        })
        .collect();
        write!(f, "{}", parts.join("·"))
    }
}

/// 벤치 시트에 등장하는 물리량 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    AngularSpeed,
    Torque,
    MassFlow,
    TemperatureDifference,
    Power,
    Pressure,
    SpecificFuelConsumption,
    Volume,
    Density,
    SpecificHeat,
    HeatingValue,
    Ratio,
}

impl QuantityKind {
    /// 해당 물리량의 SI 차원.
    pub const fn dimension(self) -> Dimension {
        match self {
            QuantityKind::AngularSpeed => Dimension::new(0, 0, -1, 0),
            QuantityKind::Torque => Dimension::new(1, 2, -2, 0),
            QuantityKind::MassFlow => Dimension::new(1, 0, -1, 0),
            QuantityKind::TemperatureDifference => Dimension::new(0, 0, 0, 1),
            QuantityKind::Power => Dimension::new(1, 2, -3, 0),
            QuantityKind::Pressure => Dimension::new(1, -1, -2, 0),
            // kg/J = s²/m²
            QuantityKind::SpecificFuelConsumption => Dimension::new(0, -2, 2, 0),
            QuantityKind::Volume => Dimension::new(0, 3, 0, 0),
            QuantityKind::Density => Dimension::new(1, -3, 0, 0),
            QuantityKind::SpecificHeat => Dimension::new(0, 2, -2, -1),
            QuantityKind::HeatingValue => Dimension::new(0, 2, -2, 0),
            QuantityKind::Ratio => Dimension::DIMENSIONLESS,
        }
    }
}

/// 차원 검사 연산과 시리즈 접근 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityError {
    /// 두 피연산자(또는 값과 변환 대상 단위)의 차원이 다름
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },
    /// 아직 채워지지 않은 자리표시 샘플을 읽음
    MissingSample { series: &'static str, index: usize },
    /// 0인 물리량으로 나눔
    DegenerateDivision { what: &'static str },
    /// 시리즈 길이를 벗어난 샘플 인덱스
    IndexOutOfRange {
        series: &'static str,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for QuantityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityError::DimensionMismatch { expected, found } => {
                write!(f, "차원 불일치: [{expected}] 필요, [{found}] 입력")
            }
            QuantityError::MissingSample { series, index } => {
                write!(f, "`{series}`의 {index}번 샘플에 아직 값이 없음")
            }
            QuantityError::DegenerateDivision { what } => {
                write!(f, "{what} 계산 중 0으로 나눔")
            }
            QuantityError::IndexOutOfRange { series, index, len } => {
                write!(f, "`{series}` 인덱스 {index} 범위 초과 (길이 {len})")
            }
        }
    }
}

impl std::error::Error for QuantityError {}

/// 차원 정보가 붙은 SI 기준 스칼라 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value_si: f64,
    dimension: Dimension,
}

impl Quantity {
    pub const fn from_si(value_si: f64, dimension: Dimension) -> Self {
        Self {
            value_si,
            dimension,
        }
    }

    /// `unit` 으로 표현된 값으로부터 물리량을 만든다.
    pub fn new<U: Unit>(value: f64, unit: U) -> Self {
        Self::from_si(unit.to_si(value), unit.dimension())
    }

    pub const fn dimensionless(value: f64) -> Self {
        Self::from_si(value, Dimension::DIMENSIONLESS)
    }

    /// 1회전, 즉 `2π` rad.
    pub const fn turn() -> Self {
        Self::dimensionless(TAU)
    }

    pub fn value_si(&self) -> f64 {
        self.value_si
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn expect_dimension(&self, expected: Dimension) -> Result<(), QuantityError> {
        if self.dimension == expected {
            Ok(())
        } else {
            Err(QuantityError::DimensionMismatch {
                expected,
                found: self.dimension,
            })
        }
    }

    /// 물리량을 `unit` 기준 크기로 반환한다.
    pub fn to<U: Unit>(&self, unit: U) -> Result<f64, QuantityError> {
        self.expect_dimension(unit.dimension())?;
        Ok(unit.from_si(self.value_si))
    }

    pub fn checked_add(self, rhs: Quantity) -> Result<Quantity, QuantityError> {
        rhs.expect_dimension(self.dimension)?;
        Ok(Quantity::from_si(self.value_si + rhs.value_si, self.dimension))
    }

    pub fn checked_sub(self, rhs: Quantity) -> Result<Quantity, QuantityError> {
        rhs.expect_dimension(self.dimension)?;
        Ok(Quantity::from_si(self.value_si - rhs.value_si, self.dimension))
    }

    /// 0으로 나누면 inf/NaN 대신 오류를 반환하는 나눗셈.
    pub fn checked_div(self, rhs: Quantity, what: &'static str) -> Result<Quantity, QuantityError> {
        if rhs.value_si == 0.0 {
            return Err(QuantityError::DegenerateDivision { what });
        }
        Ok(self / rhs)
    }
}

impl Mul for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity::from_si(self.value_si * rhs.value_si, self.dimension * rhs.dimension)
    }
}

impl Div for Quantity {
    type Output = Quantity;

    fn div(self, rhs: Quantity) -> Quantity {
        Quantity::from_si(self.value_si / rhs.value_si, self.dimension / rhs.dimension)
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::from_si(self.value_si * rhs, self.dimension)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::from_si(self.value_si / rhs, self.dimension)
    }
}
