//! 10년 연도별 점유율/매출/비용/이익 전망.

use serde::Serialize;

use crate::entities::ProjectionRates;

/// 전망 기간 [년]
pub const PROJECTION_YEARS: u32 = 10;
/// 점유율 상한 [%]. 실질적인 포화 수준.
pub const MAX_OCCUPANCY_PERCENT: f64 = 85.0;

/// 연도별 전망 1행.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyProjection {
    /// 1..=10
    pub year: u32,
    /// 점유율 [%], 85 이하
    pub occupancy: f64,
    /// 연 매출
    pub revenue: f64,
    /// 연 비용
    pub costs: f64,
    /// revenue - costs
    pub profit: f64,
    /// 1년차부터 해당 연도까지 이익 합계 (투자비 제외)
    pub cumulative_profit: f64,
    /// cumulative_profit - 초기 투자비
    pub cumulative_profit_from_investment: f64,
}

/// 전망 계산 입력.
#[derive(Debug, Clone)]
pub struct ProjectionInput {
    /// 1개월차 매출 [통화/월]
    pub initial_monthly_revenue: f64,
    /// 1개월차 비용 합계 [통화/월]
    pub initial_monthly_costs: f64,
    /// 1년차 점유율 [%]
    pub initial_occupancy: f64,
    pub rates: ProjectionRates,
    /// 초기 투자비 합계
    pub total_initial_investment: f64,
}

/// 성장률을 적용하기 전 한 해의 상태.
#[derive(Debug, Clone, Copy)]
struct YearState {
    occupancy: f64,
    revenue: f64,
    costs: f64,
}

impl YearState {
    /// 다음 해 상태. 매출은 점유율 상한과 무관하게 계속 복리로 증가한다.
    fn next(self, rates: &ProjectionRates) -> Self {
        Self {
            occupancy: (self.occupancy * growth_factor(rates.occupancy_growth()))
                .min(MAX_OCCUPANCY_PERCENT),
            revenue: self.revenue * growth_factor(rates.revenue_increase()),
            costs: self.costs * growth_factor(rates.cost_increase()),
        }
    }
}

fn growth_factor(percent: f64) -> f64 {
    1.0 + percent / 100.0
}

/// 10년 전망을 계산한다. 1년차는 월 값을 12배한 그대로이며 성장률은 2년차부터 적용한다.
///
/// 초기 점유율이 85%를 넘더라도 1년차부터 상한을 적용한다.
pub fn project(input: &ProjectionInput) -> Vec<YearlyProjection> {
    let first = YearState {
        occupancy: input.initial_occupancy.min(MAX_OCCUPANCY_PERCENT),
        revenue: input.initial_monthly_revenue * 12.0,
        costs: input.initial_monthly_costs * 12.0,
    };
    let rates = input.rates;
    let investment = input.total_initial_investment;

    std::iter::successors(Some(first), |state| Some(state.next(&rates)))
        .zip(1..=PROJECTION_YEARS)
        .scan(0.0_f64, |cumulative, (state, year)| {
            let profit = state.revenue - state.costs;
            *cumulative += profit;
            Some(YearlyProjection {
                year,
                occupancy: state.occupancy,
                revenue: state.revenue,
                costs: state.costs,
                profit,
                cumulative_profit: *cumulative,
                cumulative_profit_from_investment: *cumulative - investment,
            })
        })
        .collect()
}
