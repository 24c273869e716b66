use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError, OutputFormat};
use crate::report::{self, TextReport};
use crate::scenario::{Scenario, ScenarioError};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 시나리오 로드/평가 오류
    #[error("{0}")]
    Scenario(#[from] ScenarioError),
    /// JSON 출력 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 한 번의 실행에 필요한 요청 내용.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// 평가할 시나리오 파일. 없으면 기본 시나리오.
    pub scenario: Option<PathBuf>,
    /// 설정의 출력 형식을 덮어쓴다.
    pub format: Option<OutputFormat>,
    /// 지정하면 기본 시나리오를 이 경로에 쓰고 평가 없이 끝낸다.
    pub write_template: Option<PathBuf>,
}

/// 요청을 처리해 출력할 문자열을 만든다.
pub fn run(config: &Config, request: &RunRequest) -> Result<String, AppError> {
    if let Some(path) = &request.write_template {
        Scenario::default().save(path)?;
        info!(path = %path.display(), "기본 시나리오를 저장했습니다");
        return Ok(format!("기본 시나리오를 {}에 저장했습니다.", path.display()));
    }

    let scenario = match &request.scenario {
        Some(path) => {
            info!(path = %path.display(), "시나리오를 읽습니다");
            Scenario::load(path)?
        }
        None => {
            info!("시나리오 파일이 없어 기본 시나리오를 사용합니다");
            Scenario::default()
        }
    };

    let rates = scenario.effective_rates(&config.default_rates);
    let result = scenario.evaluate(&config.default_rates)?;

    let output = match request.format.unwrap_or(config.output_format) {
        OutputFormat::Text => TextReport {
            result: &result,
            rates: &rates,
        }
        .to_string(),
        OutputFormat::Json => report::render_json(&result, &rates)?,
    };
    Ok(output)
}
