//! 평가 결과를 텍스트 보고서 또는 JSON으로 출력한다.

use std::fmt;

use serde::Serialize;

use crate::entities::ProjectionRates;
use crate::financial_projection::{
    FinancialProjectionResult, PaybackAssessment, ProfitabilityAssessment,
};
use crate::metrics::RiskLevel;
use crate::projection::MAX_OCCUPANCY_PERCENT;

/// 금액을 천 단위 구분자와 소수 2자리로 표시한다. 예: `-1,201.20`
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// 회수기간 표시. 회수 불가면 별도 문구.
pub fn format_payback(months: f64) -> String {
    if months.is_finite() {
        format!("{months:.1} 개월")
    } else {
        "회수 불가".to_string()
    }
}

fn risk_label(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "낮음",
        RiskLevel::Medium => "보통",
        RiskLevel::High => "높음",
    }
}

fn payback_comment(a: PaybackAssessment) -> &'static str {
    match a {
        PaybackAssessment::NotRecoverable => "10년 내 투자비를 회수하지 못합니다",
        PaybackAssessment::Fast => "회수가 빠릅니다",
        PaybackAssessment::Moderate => "회수 속도가 보통입니다",
        PaybackAssessment::Long => "회수가 길어 재검토가 필요합니다",
    }
}

fn profitability_comment(a: ProfitabilityAssessment) -> &'static str {
    match a {
        ProfitabilityAssessment::VeryHigh => "수익성이 매우 높습니다",
        ProfitabilityAssessment::Good => "수익성이 양호합니다",
        ProfitabilityAssessment::Minimum => "최소 수익성 수준입니다",
        ProfitabilityAssessment::Insufficient => "수익성이 부족합니다",
    }
}

/// 터미널 출력용 텍스트 보고서.
pub struct TextReport<'a> {
    pub result: &'a FinancialProjectionResult,
    pub rates: &'a ProjectionRates,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "=== 충전소 투자 평가 ===")?;
        writeln!(f, "총 투자비: {}", format_amount(r.total_initial_investment()))?;
        writeln!(f, "총 출력: {:.1} kW", r.total_power_kw())?;

        writeln!(f, "\n-- 가정 --")?;
        writeln!(
            f,
            "연간 점유율 증가: {}% (최대 {MAX_OCCUPANCY_PERCENT}%)",
            self.rates.occupancy_growth()
        )?;
        writeln!(f, "연간 비용 증가: {}%", self.rates.cost_increase())?;
        writeln!(f, "연간 매출 증가: {}%", self.rates.revenue_increase())?;

        writeln!(f, "\n-- 1개월차 --")?;
        writeln!(f, "충전량: {:.0} kWh", r.monthly_consumption_kwh())?;
        writeln!(f, "매출: {}", format_amount(r.monthly_revenue()))?;
        let c = r.monthly_costs();
        writeln!(
            f,
            "비용: {} (전력 {}, 플랫폼 {}, 결제 {}, 세금 {}, 유지보수 {}, 인건비 {})",
            format_amount(r.total_monthly_costs()),
            format_amount(c.energy),
            format_amount(c.platform),
            format_amount(c.payment_gateway),
            format_amount(c.taxes),
            format_amount(c.maintenance),
            format_amount(c.staff)
        )?;
        writeln!(f, "이익: {}", format_amount(r.monthly_profit()))?;

        writeln!(f, "\n-- 투자 지표 --")?;
        writeln!(f, "ROI(10년): {}", format_percent(r.roi()))?;
        writeln!(f, "회수기간: {}", format_payback(r.payback_months()))?;
        writeln!(f, "NPV(12%): {}", format_amount(r.npv()))?;
        if r.irr_converged() {
            writeln!(f, "IRR: {}", format_percent(r.irr()))?;
        } else {
            writeln!(f, "IRR: {} (미수렴 추정값)", format_percent(r.irr()))?;
        }

        let verdict = if r.is_viable() {
            "투자 가치 있음"
        } else {
            "투자 가치 없음"
        };
        write!(f, "\n[{verdict}] [위험도: {}]", risk_label(r.risk_level()))?;
        if let Some(year) = r.breakeven_year() {
            write!(f, " [손익분기: {year}년차]")?;
        }
        writeln!(f)?;
        writeln!(f, "- 회수: {}", payback_comment(r.payback_assessment()))?;
        writeln!(f, "- 수익성: {}", profitability_comment(r.profitability_assessment()))?;

        writeln!(f, "\n-- 10년 전망 --")?;
        writeln!(
            f,
            "{:>4} {:>8} {:>16} {:>16} {:>16} {:>16}",
            "연도", "점유율", "매출", "비용", "이익", "누적 이익"
        )?;
        for p in r.projections() {
            writeln!(
                f,
                "{:>4} {:>8} {:>16} {:>16} {:>16} {:>16}",
                p.year,
                format_percent(p.occupancy),
                format_amount(p.revenue),
                format_amount(p.costs),
                format_amount(p.profit),
                format_amount(p.cumulative_profit)
            )?;
        }
        Ok(())
    }
}

/// JSON 출력 문서. 결과 레코드와 파생 분류를 함께 담는다.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub rates: &'a ProjectionRates,
    pub result: &'a FinancialProjectionResult,
    pub viable: bool,
    pub risk_level: RiskLevel,
    pub breakeven_year: Option<u32>,
    pub payback_assessment: PaybackAssessment,
    pub profitability_assessment: ProfitabilityAssessment,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a FinancialProjectionResult, rates: &'a ProjectionRates) -> Self {
        Self {
            rates,
            result,
            viable: result.is_viable(),
            risk_level: result.risk_level(),
            breakeven_year: result.breakeven_year(),
            payback_assessment: result.payback_assessment(),
            profitability_assessment: result.profitability_assessment(),
        }
    }
}

/// 결과를 들여쓰기된 JSON 문자열로 만든다. 회수 불가(무한대) 회수기간은 `null`이 된다.
pub fn render_json(
    result: &FinancialProjectionResult,
    rates: &ProjectionRates,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::new(result, rates))
}
