//! 충전소 투자 평가의 진입점. 전망 계산과 지표 계산을 묶어 결과 레코드를 만든다.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::entities::{OperationalData, ProjectionRates, Station};
use crate::financial_projection::{FinancialProjectionResult, MonthlyCostBreakdown};
use crate::metrics;
use crate::projection::{self, ProjectionInput};

/// 월 환산 일수
pub const DAYS_PER_MONTH: f64 = 30.0;
/// 운영 교대조 수 (고정)
pub const STAFF_SHIFTS: f64 = 2.0;

/// 엔티티 간 전제조건 위반.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// 스테이션 목록이 비어 있음
    #[error("잘못된 입력: 스테이션이 최소 1개 필요합니다")]
    NoStations,
    /// 인프라 비용이 음수이거나 유한하지 않음
    #[error("잘못된 입력: 인프라 비용은 0 이상이어야 합니다 (입력값 {0})")]
    InvalidInfrastructureCost(f64),
    /// 같은 ID의 스테이션이 둘 이상
    #[error("잘못된 입력: 스테이션 ID {0}이(가) 중복되었습니다")]
    DuplicateStationId(u32),
}

/// 1개월차 비용 내역을 계산한다.
pub fn monthly_costs(
    monthly_consumption_kwh: f64,
    monthly_revenue: f64,
    data: &OperationalData,
) -> MonthlyCostBreakdown {
    MonthlyCostBreakdown {
        energy: monthly_consumption_kwh * data.energy_cost(),
        platform: data.platform_fee(),
        payment_gateway: monthly_revenue * (data.payment_gateway_fee() / 100.0),
        taxes: monthly_revenue * (data.taxes() / 100.0),
        maintenance: data.monthly_maintenance(),
        staff: data.staff_cost_per_shift() * STAFF_SHIFTS,
    }
}

/// 스테이션 구성, 인프라 비용, 운영 조건, 성장률로 10년 투자 평가를 수행한다.
///
/// 엔티티는 이미 검증되어 있으므로 여기서는 엔티티 간 조건만 확인한다.
/// 같은 입력에는 항상 같은 결과를 돌려준다.
pub fn evaluate(
    stations: &[Station],
    infrastructure_cost: f64,
    operational: &OperationalData,
    rates: &ProjectionRates,
) -> Result<FinancialProjectionResult, InvalidInput> {
    if stations.is_empty() {
        return Err(InvalidInput::NoStations);
    }
    if !infrastructure_cost.is_finite() || infrastructure_cost < 0.0 {
        return Err(InvalidInput::InvalidInfrastructureCost(infrastructure_cost));
    }
    let mut seen = HashSet::with_capacity(stations.len());
    if let Some(dup) = stations.iter().find(|s| !seen.insert(s.id())) {
        return Err(InvalidInput::DuplicateStationId(dup.id()));
    }

    let total_initial_investment =
        stations.iter().map(Station::total_cost).sum::<f64>() + infrastructure_cost;
    let total_power_kw: f64 = stations.iter().map(Station::power_kw).sum();

    let monthly_consumption_kwh = total_power_kw
        * operational.daily_hours()
        * DAYS_PER_MONTH
        * (operational.initial_occupancy() / 100.0);
    let monthly_revenue = monthly_consumption_kwh * operational.kwh_price();
    let costs = monthly_costs(monthly_consumption_kwh, monthly_revenue, operational);
    let total_monthly_costs = costs.total();
    let monthly_profit = monthly_revenue - total_monthly_costs;
    debug!(
        total_initial_investment,
        total_power_kw,
        monthly_consumption_kwh,
        monthly_revenue,
        total_monthly_costs,
        monthly_profit,
        "1개월차 수지 계산 완료"
    );

    let projections = projection::project(&ProjectionInput {
        initial_monthly_revenue: monthly_revenue,
        initial_monthly_costs: total_monthly_costs,
        initial_occupancy: operational.initial_occupancy(),
        rates: *rates,
        total_initial_investment,
    });

    let roi = metrics::roi_percent(&projections, total_initial_investment);
    let payback_months =
        metrics::payback_months(monthly_profit, &projections, total_initial_investment);
    let npv = metrics::npv(&projections, total_initial_investment);
    let irr = metrics::irr(&projections, total_initial_investment);
    debug!(
        roi,
        payback_months,
        npv,
        irr = irr.rate_percent,
        irr_iterations = irr.iterations,
        "투자 지표 계산 완료"
    );

    Ok(FinancialProjectionResult {
        total_initial_investment,
        total_power_kw,
        monthly_consumption_kwh,
        monthly_revenue,
        monthly_costs: costs,
        total_monthly_costs,
        monthly_profit,
        roi,
        payback_months,
        npv,
        irr: irr.rate_percent,
        irr_converged: irr.converged,
        projections,
    })
}
