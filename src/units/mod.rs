//! 단위 정의와 변환. 물리량 종류마다 모듈 하나를 둔다.
//!
//! 각 종류는 해당 차원의 SI 단위를 거쳐 변환하며, 이는
//! [`crate::quantity::Quantity`] 가 저장하는 표현과 같다.

pub mod angular_speed;
pub mod density;
pub mod heating_value;
pub mod mass_flow;
pub mod power;
pub mod pressure;
pub mod ratio;
pub mod specific_fuel_consumption;
pub mod specific_heat;
pub mod temperature;
pub mod torque;
pub mod volume;

use crate::quantity::Dimension;

pub use angular_speed::{convert_angular_speed, AngularSpeedUnit};
pub use density::{convert_density, DensityUnit};
pub use heating_value::{convert_heating_value, HeatingValueUnit};
pub use mass_flow::{convert_mass_flow, MassFlowUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use ratio::{convert_ratio, RatioUnit};
pub use specific_fuel_consumption::{convert_sfc, SpecificFuelConsumptionUnit};
pub use specific_heat::{convert_specific_heat, SpecificHeatUnit};
pub use temperature::{convert_temperature_diff, TemperatureDiffUnit};
pub use torque::{convert_torque, TorqueUnit};
pub use volume::{convert_volume, VolumeUnit};

/// SI 기준값과 상호 변환 가능한 측정 단위.
pub trait Unit: Copy {
    /// 단위가 측정하는 물리 차원.
    fn dimension(&self) -> Dimension;
    fn to_si(&self, value: f64) -> f64;
    fn from_si(&self, value_si: f64) -> f64;
    /// 표 머리글과 축 제목에 쓰는 짧은 표기.
    fn symbol(&self) -> &'static str;
}
