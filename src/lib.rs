//! CLI 와 데스크톱 GUI 가 함께 쓰는 계산 코어.

pub mod app;
pub mod bench;
pub mod config;
pub mod logging;
pub mod quantity;
pub mod series;
pub mod ui_cli;
pub mod units;
