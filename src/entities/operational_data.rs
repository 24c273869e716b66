use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_percent, require_positive, ValidationError};

/// 월 단위 운영 조건. 생성 후에는 읽기 전용이다.
///
/// 기본값은 기본 레코드와 같으며 모든 제약을 만족한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OperationalDataRecord", into = "OperationalDataRecord")]
pub struct OperationalData {
    record: OperationalDataRecord,
}

/// 검증 전 운영 조건 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalDataRecord {
    /// 전력 구매 단가(도매) [통화/kWh]
    pub energy_cost: f64,
    /// 일일 운영 시간 [h], (0, 24]
    pub daily_hours: f64,
    /// 1년차 점유율 [%]
    pub initial_occupancy: f64,
    /// 플랫폼 월 이용료 [통화/월]
    pub platform_fee: f64,
    /// 결제대행 수수료 [% of 매출]
    pub payment_gateway_fee: f64,
    /// 세금 [% of 매출]
    pub taxes: f64,
    /// 월 유지보수비 [통화/월]
    pub monthly_maintenance: f64,
    /// 교대조 1개당 인건비 [통화/월]
    pub staff_cost_per_shift: f64,
    /// 충전 판매 단가(소매) [통화/kWh]
    pub kwh_price: f64,
}

impl Default for OperationalDataRecord {
    fn default() -> Self {
        Self {
            energy_cost: 0.65,
            daily_hours: 12.0,
            initial_occupancy: 15.0,
            platform_fee: 299.0,
            payment_gateway_fee: 3.5,
            taxes: 8.5,
            monthly_maintenance: 800.0,
            staff_cost_per_shift: 2500.0,
            kwh_price: 2.80,
        }
    }
}

impl OperationalData {
    /// 레코드를 검증해 운영 조건을 만든다.
    pub fn new(record: OperationalDataRecord) -> Result<Self, ValidationError> {
        let r = &record;
        require_positive("energy_cost", r.energy_cost, "전력 구매 단가는 0보다 커야 합니다")?;
        let hours_in_range = r.daily_hours > 0.0 && r.daily_hours <= 24.0;
        if !hours_in_range {
            return Err(ValidationError::new(
                "daily_hours",
                "일일 운영 시간은 0 초과 24 이하여야 합니다",
            ));
        }
        require_percent(
            "initial_occupancy",
            r.initial_occupancy,
            "초기 점유율은 0%에서 100% 사이여야 합니다",
        )?;
        require_non_negative("platform_fee", r.platform_fee, "플랫폼 이용료는 음수일 수 없습니다")?;
        require_percent(
            "payment_gateway_fee",
            r.payment_gateway_fee,
            "결제 수수료는 0%에서 100% 사이여야 합니다",
        )?;
        require_percent("taxes", r.taxes, "세율은 0%에서 100% 사이여야 합니다")?;
        require_non_negative(
            "monthly_maintenance",
            r.monthly_maintenance,
            "유지보수비는 음수일 수 없습니다",
        )?;
        require_non_negative(
            "staff_cost_per_shift",
            r.staff_cost_per_shift,
            "인건비는 음수일 수 없습니다",
        )?;
        require_positive("kwh_price", r.kwh_price, "판매 단가는 0보다 커야 합니다")?;
        if r.kwh_price <= r.energy_cost {
            return Err(ValidationError::new(
                "kwh_price",
                "판매 단가는 전력 구매 단가보다 커야 합니다",
            ));
        }
        Ok(Self { record })
    }

    pub fn energy_cost(&self) -> f64 {
        self.record.energy_cost
    }

    pub fn daily_hours(&self) -> f64 {
        self.record.daily_hours
    }

    pub fn initial_occupancy(&self) -> f64 {
        self.record.initial_occupancy
    }

    pub fn platform_fee(&self) -> f64 {
        self.record.platform_fee
    }

    pub fn payment_gateway_fee(&self) -> f64 {
        self.record.payment_gateway_fee
    }

    pub fn taxes(&self) -> f64 {
        self.record.taxes
    }

    pub fn monthly_maintenance(&self) -> f64 {
        self.record.monthly_maintenance
    }

    pub fn staff_cost_per_shift(&self) -> f64 {
        self.record.staff_cost_per_shift
    }

    pub fn kwh_price(&self) -> f64 {
        self.record.kwh_price
    }

    /// kWh당 전력 마진 [통화/kWh]. 항상 양수.
    pub fn margin_per_kwh(&self) -> f64 {
        self.record.kwh_price - self.record.energy_cost
    }

    pub fn record(&self) -> &OperationalDataRecord {
        &self.record
    }
}

impl TryFrom<OperationalDataRecord> for OperationalData {
    type Error = ValidationError;

    fn try_from(record: OperationalDataRecord) -> Result<Self, Self::Error> {
        OperationalData::new(record)
    }
}

impl From<OperationalData> for OperationalDataRecord {
    fn from(data: OperationalData) -> Self {
        data.record
    }
}
