use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::bench::EngineConstants;
use crate::quantity::Quantity;
use crate::units::*;

/// 작업 디렉터리에서 찾는 기본 설정 파일.
pub const DEFAULT_CONFIG_PATH: &str = "engine_bench.toml";

/// 시험 엔진의 물리 상수와 각 단위.
///
/// 벤치 시트마다 배기량 표기가 `10**-4` 와 `10e-4` m³ 로 다르다. 기본값은
/// 1e-4 m³ (100 cc)이며, 다른 해석이 필요하면 여기서 덮어쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantsConfig {
    pub displacement: f64,
    pub displacement_unit: VolumeUnit,
    pub air_density: f64,
    pub air_density_unit: DensityUnit,
    pub air_specific_heat: f64,
    pub air_specific_heat_unit: SpecificHeatUnit,
    /// 연료 저위발열량
    pub fuel_lhv: f64,
    pub fuel_lhv_unit: HeatingValueUnit,
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            displacement: 1.0e-4,
            displacement_unit: VolumeUnit::CubicMeter,
            air_density: 1.2,
            air_density_unit: DensityUnit::KilogramPerCubicMeter,
            air_specific_heat: 1.006,
            air_specific_heat_unit: SpecificHeatUnit::KilojoulePerKgK,
            fuel_lhv: 45.2,
            fuel_lhv_unit: HeatingValueUnit::KilojoulePerGram,
        }
    }
}

impl ConstantsConfig {
    /// 설정값마다 단위를 붙여 엔진 상수로 만든다.
    pub fn to_constants(&self) -> EngineConstants {
        EngineConstants {
            displacement: Quantity::new(self.displacement, self.displacement_unit),
            air_density: Quantity::new(self.air_density, self.air_density_unit),
            air_specific_heat: Quantity::new(self.air_specific_heat, self.air_specific_heat_unit),
            fuel_heating_value: Quantity::new(self.fuel_lhv, self.fuel_lhv_unit),
        }
    }
}

/// 결과표 출력 형식.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 소수점 이하 자릿수
    pub decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { decimals: 4 }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `error`, `warn`, `info`, `debug`, `trace` 중 하나
    pub log_level: String,
    pub constants: ConstantsConfig,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            constants: ConstantsConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// TOML 문자열에서 설정을 파싱한다. 빠진 키는 기본값을 쓴다.
pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// `path` 가 있으면 로드하고, 없으면 내장 벤치 상수를 반환한다.
/// 파일은 쓰지 않는다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        from_toml_str(&content)
    } else {
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 TOML 로 `path` 에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn engine_constants(&self) -> EngineConstants {
        self.constants.to_constants()
    }
}
