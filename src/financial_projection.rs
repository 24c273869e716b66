//! 평가 결과 레코드와 결과로부터 파생되는 분류(투자 가치, 위험도, 손익분기 연도).

use serde::Serialize;

use crate::metrics::{self, RiskLevel};
use crate::projection::YearlyProjection;

/// 1개월차 비용 내역 [통화/월].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyCostBreakdown {
    /// 전력 구매비 (소비량 × 구매 단가)
    pub energy: f64,
    /// 플랫폼 이용료
    pub platform: f64,
    /// 결제대행 수수료 (매출 비율)
    pub payment_gateway: f64,
    /// 세금 (매출 비율)
    pub taxes: f64,
    pub maintenance: f64,
    /// 2교대 인건비
    pub staff: f64,
}

impl MonthlyCostBreakdown {
    pub fn total(&self) -> f64 {
        self.energy + self.platform + self.payment_gateway + self.taxes + self.maintenance + self.staff
    }
}

/// 회수기간에 대한 정성 평가.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaybackAssessment {
    /// 10년 내 회수 불가
    NotRecoverable,
    /// 36개월 이하
    Fast,
    /// 60개월 이하
    Moderate,
    Long,
}

/// IRR 수준에 대한 정성 평가.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitabilityAssessment {
    /// IRR ≥ 20%
    VeryHigh,
    /// IRR ≥ 15%
    Good,
    /// IRR ≥ 12% (할인율 수준)
    Minimum,
    Insufficient,
}

/// 투자 평가 결과. 평가 1회마다 새로 만들어지며 읽기 전용이다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialProjectionResult {
    pub(crate) total_initial_investment: f64,
    pub(crate) total_power_kw: f64,
    pub(crate) monthly_consumption_kwh: f64,
    pub(crate) monthly_revenue: f64,
    pub(crate) monthly_costs: MonthlyCostBreakdown,
    pub(crate) total_monthly_costs: f64,
    pub(crate) monthly_profit: f64,
    pub(crate) roi: f64,
    pub(crate) payback_months: f64,
    pub(crate) npv: f64,
    pub(crate) irr: f64,
    pub(crate) irr_converged: bool,
    pub(crate) projections: Vec<YearlyProjection>,
}

impl FinancialProjectionResult {
    /// 스테이션 단가 합계 + 인프라 비용
    pub fn total_initial_investment(&self) -> f64 {
        self.total_initial_investment
    }

    /// 스테이션 출력 합계 [kW]
    pub fn total_power_kw(&self) -> f64 {
        self.total_power_kw
    }

    /// 1개월차 충전량 [kWh]
    pub fn monthly_consumption_kwh(&self) -> f64 {
        self.monthly_consumption_kwh
    }

    pub fn monthly_revenue(&self) -> f64 {
        self.monthly_revenue
    }

    pub fn monthly_costs(&self) -> &MonthlyCostBreakdown {
        &self.monthly_costs
    }

    pub fn total_monthly_costs(&self) -> f64 {
        self.total_monthly_costs
    }

    pub fn monthly_profit(&self) -> f64 {
        self.monthly_profit
    }

    /// 10년 ROI [%]
    pub fn roi(&self) -> f64 {
        self.roi
    }

    /// 회수기간 [개월]. 회수 불가면 `f64::INFINITY`.
    pub fn payback_months(&self) -> f64 {
        self.payback_months
    }

    /// 12% 할인 NPV(VPL)
    pub fn npv(&self) -> f64 {
        self.npv
    }

    /// IRR(TIR) [%]. `irr_converged()`가 `false`면 추정값이므로 극단값에 주의한다.
    pub fn irr(&self) -> f64 {
        self.irr
    }

    pub fn irr_converged(&self) -> bool {
        self.irr_converged
    }

    /// 1..=10년 전망, 연도 오름차순.
    pub fn projections(&self) -> &[YearlyProjection] {
        &self.projections
    }

    pub fn is_viable(&self) -> bool {
        metrics::is_viable(self.npv, self.irr, self.payback_months)
    }

    pub fn risk_level(&self) -> RiskLevel {
        metrics::risk_level(self.irr, self.payback_months)
    }

    pub fn breakeven_year(&self) -> Option<u32> {
        metrics::breakeven_year(&self.projections)
    }

    pub fn payback_assessment(&self) -> PaybackAssessment {
        match self.payback_months {
            m if m.is_infinite() => PaybackAssessment::NotRecoverable,
            m if m <= 36.0 => PaybackAssessment::Fast,
            m if m <= 60.0 => PaybackAssessment::Moderate,
            _ => PaybackAssessment::Long,
        }
    }

    pub fn profitability_assessment(&self) -> ProfitabilityAssessment {
        match self.irr {
            r if r >= 20.0 => ProfitabilityAssessment::VeryHigh,
            r if r >= 15.0 => ProfitabilityAssessment::Good,
            r if r >= 12.0 => ProfitabilityAssessment::Minimum,
            _ => ProfitabilityAssessment::Insufficient,
        }
    }
}
