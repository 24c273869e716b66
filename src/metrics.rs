//! 연도별 전망으로부터 투자 지표(ROI, 회수기간, NPV, IRR, 위험도)를 계산한다.

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::projection::YearlyProjection;

/// NPV 할인율 (연 12%)
pub const DISCOUNT_RATE: f64 = 0.12;
/// IRR 뉴턴-랩슨 초기 추정값
pub const IRR_INITIAL_GUESS: f64 = 0.10;
/// IRR 수렴 판정 허용오차 [통화]
pub const IRR_TOLERANCE: f64 = 0.01;
/// IRR 최대 반복 횟수
pub const IRR_MAX_ITERATIONS: u32 = 100;
/// 이보다 작은 도함수로는 뉴턴 스텝을 밟지 않는다.
const MIN_DERIVATIVE: f64 = 1e-12;
/// 할인율 하한. (1 + r)이 양수로 남아야 한다.
const MIN_RATE: f64 = -0.99;

/// 10년 이익 합계.
pub fn total_profit(projections: &[YearlyProjection]) -> f64 {
    projections.iter().map(|p| p.profit).sum()
}

/// 10년 ROI [%]. 투자비는 0보다 크다고 가정한다.
pub fn roi_percent(projections: &[YearlyProjection], total_initial_investment: f64) -> f64 {
    (total_profit(projections) - total_initial_investment) / total_initial_investment * 100.0
}

/// 투자 회수기간 [개월].
///
/// 1개월차 이익이 양수면 투자비 / 월 이익으로 직선 외삽한다. 그렇지 않으면 연도별
/// 누적 순위치가 처음 0 이상이 되는 해를 찾아 `year * 12`를 돌려준다. 기간 내에
/// 회수되지 않으면 `f64::INFINITY`.
pub fn payback_months(
    monthly_profit: f64,
    projections: &[YearlyProjection],
    total_initial_investment: f64,
) -> f64 {
    if monthly_profit > 0.0 {
        return total_initial_investment / monthly_profit;
    }
    let mut position = -total_initial_investment;
    for p in projections {
        position += p.profit;
        if position >= 0.0 {
            return f64::from(p.year * 12);
        }
    }
    f64::INFINITY
}

/// 임의의 할인율 `rate`(소수)에서의 NPV.
pub fn npv_at(rate: f64, projections: &[YearlyProjection], total_initial_investment: f64) -> f64 {
    let discount = 1.0 + rate;
    projections.iter().fold(-total_initial_investment, |acc, p| {
        acc + p.profit / discount.powi(p.year as i32)
    })
}

/// 12% 할인율 기준 NPV(VPL).
pub fn npv(projections: &[YearlyProjection], total_initial_investment: f64) -> f64 {
    npv_at(DISCOUNT_RATE, projections, total_initial_investment)
}

/// NPV와 할인율에 대한 도함수를 함께 계산한다.
fn npv_with_derivative(
    rate: f64,
    projections: &[YearlyProjection],
    total_initial_investment: f64,
) -> (f64, f64) {
    let discount = 1.0 + rate;
    projections
        .iter()
        .fold((-total_initial_investment, 0.0), |(value, slope), p| {
            let factor = discount.powi(p.year as i32);
            (
                value + p.profit / factor,
                slope - f64::from(p.year) * p.profit / (factor * discount),
            )
        })
}

/// IRR 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IrrEstimate {
    /// IRR(TIR) [%]
    pub rate_percent: f64,
    /// |NPV| < 허용오차에 도달했는지 여부. `false`면 추정값이다.
    pub converged: bool,
    /// 수행한 뉴턴 스텝 수
    pub iterations: u32,
}

/// 뉴턴-랩슨으로 IRR을 찾는다.
///
/// 수렴하지 못해도 오류로 보지 않고 마지막 유한 추정값을 `converged = false`로 돌려준다.
pub fn irr(projections: &[YearlyProjection], total_initial_investment: f64) -> IrrEstimate {
    let mut rate = IRR_INITIAL_GUESS;
    let mut iterations = 0;

    while iterations < IRR_MAX_ITERATIONS {
        let (value, slope) = npv_with_derivative(rate, projections, total_initial_investment);
        if !value.is_finite() || !slope.is_finite() {
            break;
        }
        if value.abs() < IRR_TOLERANCE {
            return IrrEstimate {
                rate_percent: rate * 100.0,
                converged: true,
                iterations,
            };
        }
        if slope.abs() < MIN_DERIVATIVE {
            break;
        }
        let next = rate - value / slope;
        if !next.is_finite() {
            break;
        }
        rate = next.max(MIN_RATE);
        iterations += 1;
    }

    warn!(
        iterations,
        rate_percent = rate * 100.0,
        "IRR이 허용오차 내로 수렴하지 않아 마지막 추정값을 사용합니다"
    );
    IrrEstimate {
        rate_percent: rate * 100.0,
        converged: false,
        iterations,
    }
}

/// 투자 위험도 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        f.write_str(label)
    }
}

/// IRR[%]과 회수기간으로 위험도를 분류한다. 위에서부터 먼저 만족하는 등급.
pub fn risk_level(irr_percent: f64, payback_months: f64) -> RiskLevel {
    if irr_percent >= 20.0 && payback_months <= 36.0 {
        RiskLevel::Low
    } else if irr_percent >= 15.0 && payback_months <= 48.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// NPV > 0, IRR > 12%, 회수기간 60개월 이하를 모두 만족하면 투자 가치가 있다고 본다.
pub fn is_viable(npv: f64, irr_percent: f64, payback_months: f64) -> bool {
    npv > 0.0 && irr_percent > 12.0 && payback_months <= 60.0
}

/// 누적 순위치(투자비 포함)가 처음 0 이상이 되는 연도.
pub fn breakeven_year(projections: &[YearlyProjection]) -> Option<u32> {
    projections
        .iter()
        .find(|p| p.cumulative_profit_from_investment >= 0.0)
        .map(|p| p.year)
}
