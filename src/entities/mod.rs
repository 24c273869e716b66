//! 계산 엔진에 들어가는 입력 엔티티 모음.
//! 모든 엔티티는 생성 시점에 도메인 제약을 검증하므로, 값이 존재하면 항상 유효하다.

pub mod operational_data;
pub mod projection_rates;
pub mod station;

pub use operational_data::{OperationalData, OperationalDataRecord};
pub use projection_rates::{ProjectionRates, ProjectionRatesRecord};
pub use station::{Station, StationRecord};

use thiserror::Error;

/// 엔티티 생성 시 제약 위반을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("입력 검증 오류 [{field}]: {rule}")]
pub struct ValidationError {
    /// 위반한 필드 이름
    pub field: &'static str,
    /// 위반한 규칙 설명
    pub rule: &'static str,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, rule: &'static str) -> Self {
        Self { field, rule }
    }
}

// NaN은 모든 비교가 거짓이므로 아래 검사들을 통과하지 못한다.

pub(crate) fn require_positive(
    field: &'static str,
    value: f64,
    rule: &'static str,
) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(field, rule))
    }
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: f64,
    rule: &'static str,
) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(field, rule))
    }
}

/// 백분율(0~100, 양 끝 포함) 검사.
pub(crate) fn require_percent(
    field: &'static str,
    value: f64,
    rule: &'static str,
) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, rule))
    }
}
