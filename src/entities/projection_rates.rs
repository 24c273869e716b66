use serde::{Deserialize, Serialize};

use super::{require_non_negative, ValidationError};

/// 연간 성장률 가정 [%/년]. 상한은 두지 않는다(점유율 상한은 projection 단계에서 적용).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProjectionRatesRecord", into = "ProjectionRatesRecord")]
pub struct ProjectionRates {
    occupancy_growth: f64,
    cost_increase: f64,
    revenue_increase: f64,
}

/// 검증 전 성장률 입력값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRatesRecord {
    pub occupancy_growth: f64,
    pub cost_increase: f64,
    pub revenue_increase: f64,
}

impl ProjectionRates {
    pub fn new(
        occupancy_growth: f64,
        cost_increase: f64,
        revenue_increase: f64,
    ) -> Result<Self, ValidationError> {
        require_non_negative(
            "occupancy_growth",
            occupancy_growth,
            "점유율 증가율은 음수일 수 없습니다",
        )?;
        require_non_negative("cost_increase", cost_increase, "비용 증가율은 음수일 수 없습니다")?;
        require_non_negative(
            "revenue_increase",
            revenue_increase,
            "매출 증가율은 음수일 수 없습니다",
        )?;
        Ok(Self {
            occupancy_growth,
            cost_increase,
            revenue_increase,
        })
    }

    pub fn occupancy_growth(&self) -> f64 {
        self.occupancy_growth
    }

    pub fn cost_increase(&self) -> f64 {
        self.cost_increase
    }

    pub fn revenue_increase(&self) -> f64 {
        self.revenue_increase
    }
}

impl Default for ProjectionRates {
    /// 점유율 +5%, 비용 +8%, 매출 +12%.
    fn default() -> Self {
        Self {
            occupancy_growth: 5.0,
            cost_increase: 8.0,
            revenue_increase: 12.0,
        }
    }
}

impl TryFrom<ProjectionRatesRecord> for ProjectionRates {
    type Error = ValidationError;

    fn try_from(record: ProjectionRatesRecord) -> Result<Self, Self::Error> {
        ProjectionRates::new(
            record.occupancy_growth,
            record.cost_increase,
            record.revenue_increase,
        )
    }
}

impl From<ProjectionRates> for ProjectionRatesRecord {
    fn from(rates: ProjectionRates) -> Self {
        ProjectionRatesRecord {
            occupancy_growth: rates.occupancy_growth,
            cost_increase: rates.cost_increase,
            revenue_increase: rates.revenue_increase,
        }
    }
}
