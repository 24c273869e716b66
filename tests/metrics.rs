//! 투자 지표(ROI, 회수기간, NPV, IRR, 위험도) 테스트.
use ev_charging_roi::metrics::{
    self, breakeven_year, irr, is_viable, npv, npv_at, payback_months, risk_level, roi_percent,
    RiskLevel, IRR_TOLERANCE,
};
use ev_charging_roi::projection::YearlyProjection;
use rstest::rstest;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

/// 연도별 이익 목록으로 전망 행을 만든다(점유율/매출/비용은 지표 계산에 쓰이지 않는다).
fn rows(profits: &[f64], investment: f64) -> Vec<YearlyProjection> {
    let mut cumulative = 0.0;
    profits
        .iter()
        .enumerate()
        .map(|(i, &profit)| {
            cumulative += profit;
            YearlyProjection {
                year: i as u32 + 1,
                occupancy: 50.0,
                revenue: profit.max(0.0),
                costs: (-profit).max(0.0),
                profit,
                cumulative_profit: cumulative,
                cumulative_profit_from_investment: cumulative - investment,
            }
        })
        .collect()
}

#[test]
fn roi_uses_ten_year_profit_sum() {
    let p = rows(&[20_000.0; 10], 100_000.0);
    assert_close("total", metrics::total_profit(&p), 200_000.0, 1e-12);
    assert_close("roi", roi_percent(&p, 100_000.0), 100.0, 1e-12);
}

#[test]
fn payback_divides_when_first_month_profitable() {
    let p = rows(&[-1.0; 10], 75_000.0);
    // 월 이익이 양수면 연도별 전망은 보지 않는다.
    assert_close("payback", payback_months(6_961.8, &p, 75_000.0), 10.773_075_9, 1e-8);
}

#[test]
fn payback_falls_back_to_first_recovered_year() {
    let p = rows(&[-10_000.0, 20_000.0, 40_000.0, 60_000.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 100_000.0);
    // -100k -10k +20k +40k = -50k, +60k = +10k → 4년차
    assert_eq!(payback_months(-500.0, &p, 100_000.0), 48.0);
    assert_eq!(payback_months(0.0, &p, 100_000.0), 48.0);
}

#[test]
fn payback_is_infinite_when_not_recovered() {
    let p = rows(&[1_000.0; 10], 100_000.0);
    assert!(payback_months(-1.0, &p, 100_000.0).is_infinite());
}

#[test]
fn npv_discounts_at_twelve_percent() {
    let p = rows(&[11_200.0, 12_544.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 15_000.0);
    // 11200/1.12 + 12544/1.12^2 = 10000 + 10000
    assert_close("npv", npv(&p, 15_000.0), 5_000.0, 1e-9);
    assert_close("npv@0", npv_at(0.0, &p, 15_000.0), 8_744.0, 1e-12);
}

#[test]
fn irr_round_trips_through_npv() {
    let investment = 75_000.0;
    let p = rows(
        &[-14_414.4, -11_938.75, -8_829.6, -4_984.0, -284.5, 5_402.7, 12_230.1, 20_371.1, 30_022.9, 41_409.6],
        investment,
    );
    let est = irr(&p, investment);
    assert!(est.converged);
    assert!(est.iterations <= 100);
    let residual = npv_at(est.rate_percent / 100.0, &p, investment);
    assert!(residual.abs() < IRR_TOLERANCE, "residual {residual}");
}

#[test]
fn irr_of_level_annuity() {
    // 투자 100, 10년간 매년 20 → IRR ≈ 15.098%
    let p = rows(&[20.0; 10], 100.0);
    let est = irr(&p, 100.0);
    assert!(est.converged);
    assert_close("irr", est.rate_percent, 15.098, 1e-3);
}

#[test]
fn irr_returns_finite_estimate_when_derivative_vanishes() {
    let p = rows(&[0.0; 10], 50_000.0);
    let est = irr(&p, 50_000.0);
    assert!(!est.converged);
    assert_eq!(est.iterations, 0);
    assert_close("fallback", est.rate_percent, 10.0, 1e-12);
}

#[test]
fn irr_without_root_is_flagged_and_finite() {
    let p = rows(&[-1_000.0; 10], 50_000.0);
    let est = irr(&p, 50_000.0);
    assert!(!est.converged);
    assert!(est.rate_percent.is_finite());
}

#[rstest]
#[case(25.0, 30.0, RiskLevel::Low)]
#[case(20.0, 36.0, RiskLevel::Low)]
#[case(25.0, 40.0, RiskLevel::Medium)]
#[case(15.0, 48.0, RiskLevel::Medium)]
#[case(19.9, 12.0, RiskLevel::Medium)]
#[case(14.9, 12.0, RiskLevel::High)]
#[case(30.0, 49.0, RiskLevel::High)]
#[case(30.0, f64::INFINITY, RiskLevel::High)]
fn risk_tiers(#[case] irr_pct: f64, #[case] payback: f64, #[case] expected: RiskLevel) {
    assert_eq!(risk_level(irr_pct, payback), expected);
}

#[test]
fn risk_level_displays_lowercase() {
    assert_eq!(RiskLevel::Low.to_string(), "low");
    assert_eq!(RiskLevel::Medium.to_string(), "medium");
    assert_eq!(RiskLevel::High.to_string(), "high");
}

#[rstest]
#[case(1.0, 12.1, 60.0, true)]
#[case(0.0, 30.0, 10.0, false)]
#[case(1.0, 12.0, 10.0, false)]
#[case(1.0, 30.0, 60.1, false)]
#[case(1.0, 30.0, f64::INFINITY, false)]
fn viability(#[case] npv: f64, #[case] irr_pct: f64, #[case] payback: f64, #[case] expected: bool) {
    assert_eq!(is_viable(npv, irr_pct, payback), expected);
}

#[test]
fn breakeven_is_first_non_negative_position() {
    let p = rows(&[40_000.0, 40_000.0, 20_000.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 100_000.0);
    assert_eq!(breakeven_year(&p), Some(3));
    let exact = rows(&[50_000.0, 50_000.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 100_000.0);
    assert_eq!(breakeven_year(&exact), Some(2));
    let never = rows(&[1.0; 10], 100_000.0);
    assert_eq!(breakeven_year(&never), None);
}
