use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::bench::{ResultTable, Scenario};
use crate::config::DEFAULT_CONFIG_PATH;

/// 명령행에서 선택하는 시험 시나리오.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    /// Part A: 가변 속도, 일정 부하
    A,
    /// Part B: 일정 속도, 가변 부하
    B,
    /// A, B 순서로 모두 실행
    All,
}

impl ScenarioArg {
    pub fn scenarios(self) -> Vec<Scenario> {
        match self {
            ScenarioArg::A => vec![Scenario::VariableSpeed],
            ScenarioArg::B => vec![Scenario::VariableLoad],
            ScenarioArg::All => Scenario::ALL.to_vec(),
        }
    }
}

/// 엔진 벤치 시험 성능표를 계산한다.
#[derive(Debug, Parser)]
#[command(name = "engine_bench_cli", version)]
pub struct CliArgs {
    /// 계산할 벤치 시험
    #[arg(short, long, value_enum, default_value_t = ScenarioArg::All)]
    pub scenario: ScenarioArg,

    /// 엔진 상수를 덮어쓰는 TOML 파일
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// 샘플별 값까지 로그로 출력
    #[arg(short, long)]
    pub verbose: bool,

    /// 실행 전에 현재 설정을 `--config` 경로에 저장
    #[arg(long)]
    pub save_config: bool,
}

/// 시나리오 제목과 결과표를 출력한다.
pub fn print_table(scenario: Scenario, table: &ResultTable, decimals: usize) {
    println!("\n=== {} ===", scenario.title());
    println!("{}", scenario.table_name());
    table.to_pretty_table(decimals).printstd();
}
