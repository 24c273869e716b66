use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ev_charging_roi::app::{self, AppError, RunRequest};
use ev_charging_roi::config::{self, OutputFormat};
use tracing_subscriber::FmtSubscriber;

/// 전기차 충전소 투자 수익성(ROI, 회수기간, NPV, IRR)을 10년 기준으로 평가한다.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// 시나리오 TOML 파일 (생략 시 기본 시나리오)
    scenario: Option<PathBuf>,
    /// 설정 파일 경로
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
    /// 출력 형식 (설정값을 덮어씀)
    #[arg(long, short, value_enum)]
    format: Option<OutputFormat>,
    /// 기본 시나리오를 지정한 경로에 쓰고 종료
    #[arg(long)]
    write_template: Option<PathBuf>,
    /// 디버그 로그 출력
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 평가를 실행한다.
fn main() -> ExitCode {
    let args = Args::parse();
    match try_run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: Args) -> Result<String, AppError> {
    let cfg = config::load_or_default(&args.config)?;

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        cfg.log_level.into()
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    // 이미 설치된 구독자가 있으면 그대로 쓴다.
    let _ = tracing::subscriber::set_global_default(subscriber);

    app::run(
        &cfg,
        &RunRequest {
            scenario: args.scenario,
            format: args.format,
            write_template: args.write_template,
        },
    )
}
