//! 전기차 충전소 투자 평가 엔진. 핵심 계산은 라이브러리에 두고 CLI는 입출력만 담당한다.
//!
//! 흐름: 엔티티 생성(검증) → [`roi::evaluate`] → 10년 전망 → 투자 지표 → 결과 레코드.

pub mod app;
pub mod config;
pub mod entities;
pub mod financial_projection;
pub mod metrics;
pub mod projection;
pub mod report;
pub mod roi;
pub mod scenario;

pub use entities::{OperationalData, ProjectionRates, Station, ValidationError};
pub use financial_projection::FinancialProjectionResult;
pub use roi::{evaluate, InvalidInput};
