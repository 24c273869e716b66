use serde::{Deserialize, Serialize};

use super::{require_positive, ValidationError};

/// 충전 스테이션(충전기) 1기의 사양.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StationRecord", into = "StationRecord")]
pub struct Station {
    id: u32,
    name: String,
    power_kw: f64,
    unit_price: f64,
}

/// 검증 전 스테이션 입력값. 파일/폼과 주고받는 평문 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: u32,
    pub name: String,
    /// 정격 출력 [kW]
    pub power_kw: f64,
    /// 기기 단가 [통화]
    pub unit_price: f64,
}

impl Station {
    /// 값을 검증한 뒤 스테이션을 만든다. 출력, 단가, 이름 순으로 검사한다.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        power_kw: f64,
        unit_price: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        require_positive("power_kw", power_kw, "스테이션 출력은 0보다 커야 합니다")?;
        require_positive("unit_price", unit_price, "단가는 0보다 커야 합니다")?;
        if name.trim().is_empty() {
            return Err(ValidationError::new(
                "name",
                "스테이션 이름은 비어 있을 수 없습니다",
            ));
        }
        Ok(Self {
            id,
            name,
            power_kw,
            unit_price,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power_kw(&self) -> f64 {
        self.power_kw
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// 스테이션 1기의 투자비. 현재는 단가와 같다.
    pub fn total_cost(&self) -> f64 {
        self.unit_price
    }
}

impl Default for Station {
    /// 새로 추가하는 스테이션의 기본 사양: 50 kW, 단가 45,000.
    fn default() -> Self {
        Self {
            id: 1,
            name: "Station 1".into(),
            power_kw: 50.0,
            unit_price: 45_000.0,
        }
    }
}

impl TryFrom<StationRecord> for Station {
    type Error = ValidationError;

    fn try_from(record: StationRecord) -> Result<Self, Self::Error> {
        Station::new(record.id, record.name, record.power_kw, record.unit_price)
    }
}

impl From<Station> for StationRecord {
    fn from(station: Station) -> Self {
        StationRecord {
            id: station.id,
            name: station.name,
            power_kw: station.power_kw,
            unit_price: station.unit_price,
        }
    }
}
