//! 평가 입력 4종(스테이션, 인프라 비용, 운영 조건, 성장률)을 하나의 TOML 문서로 다룬다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{OperationalData, ProjectionRates, Station};
use crate::financial_projection::FinancialProjectionResult;
use crate::roi::{self, InvalidInput};

/// 시나리오 로드/평가 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("시나리오 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 문법 오류 또는 엔티티 검증 실패
    #[error("시나리오 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("시나리오 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Input(#[from] InvalidInput),
}

/// 평가 한 건의 입력 묶음. 역직렬화 시 각 엔티티의 검증이 함께 수행된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// 인프라(전기 공사 등) 비용
    pub infrastructure_cost: f64,
    pub stations: Vec<Station>,
    pub operational: OperationalData,
    /// 생략하면 설정 파일의 기본 성장률을 쓴다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rates: Option<ProjectionRates>,
}

impl Default for Scenario {
    /// 50 kW 스테이션 1기, 인프라 비용 30,000.
    fn default() -> Self {
        Self {
            infrastructure_cost: 30_000.0,
            stations: vec![Station::default()],
            operational: OperationalData::default(),
            rates: Some(ProjectionRates::default()),
        }
    }
}

impl Scenario {
    /// TOML 문자열에서 시나리오를 읽는다.
    pub fn from_toml_str(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    /// 파일에서 시나리오를 읽는다.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ScenarioError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// 시나리오를 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ScenarioError> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// 시나리오의 성장률, 없으면 `fallback_rates`.
    pub fn effective_rates(&self, fallback_rates: &ProjectionRates) -> ProjectionRates {
        self.rates.unwrap_or(*fallback_rates)
    }

    /// 시나리오를 평가한다.
    pub fn evaluate(
        &self,
        fallback_rates: &ProjectionRates,
    ) -> Result<FinancialProjectionResult, ScenarioError> {
        let rates = self.effective_rates(fallback_rates);
        Ok(roi::evaluate(
            &self.stations,
            self.infrastructure_cost,
            &self.operational,
            &rates,
        )?)
    }
}
