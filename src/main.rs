use clap::Parser;
use log::{error, LevelFilter};

use engine_bench_toolbox::{app, config, logging, ui_cli::CliArgs};

/// 프로그램의 엔트리 포인트. 설정을 로드하고 로거를 설치한 뒤 벤치 시험을 계산한다.
fn main() {
    let args = CliArgs::parse();
    if let Err(err) = try_run(&args) {
        if log::max_level() > LevelFilter::Off {
            error!("{err}");
        } else {
            eprintln!("error: {err}");
        }
        std::process::exit(1);
    }
}

fn try_run(args: &CliArgs) -> Result<(), app::AppError> {
    let cfg = config::load_or_default(&args.config)?;
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        logging::parse_level(&cfg.log_level)
    };
    logging::init(level)?;
    if args.save_config {
        cfg.save(&args.config)?;
        log::info!("config written to {}", args.config.display());
    }
    app::run(&cfg, &args.scenario.scenarios())?;
    Ok(())
}
