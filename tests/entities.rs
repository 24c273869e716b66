//! 입력 엔티티 생성 검증 테스트.
use ev_charging_roi::entities::{
    OperationalData, OperationalDataRecord, ProjectionRates, Station, StationRecord,
};
use rstest::rstest;

#[test]
fn station_accepts_valid_values() {
    let s = Station::new(7, "Rápida 7", 150.0, 120_000.0).expect("valid station");
    assert_eq!(s.id(), 7);
    assert_eq!(s.name(), "Rápida 7");
    assert_eq!(s.power_kw(), 150.0);
    assert_eq!(s.total_cost(), 120_000.0);
}

#[rstest]
#[case(0.0, 45_000.0, "A", "power_kw")]
#[case(-5.0, 45_000.0, "A", "power_kw")]
#[case(f64::NAN, 45_000.0, "A", "power_kw")]
#[case(50.0, 0.0, "A", "unit_price")]
#[case(50.0, f64::INFINITY, "A", "unit_price")]
#[case(50.0, 45_000.0, "   ", "name")]
#[case(0.0, 0.0, "", "power_kw")]
fn station_rejects_invalid_values(
    #[case] power_kw: f64,
    #[case] unit_price: f64,
    #[case] name: &str,
    #[case] field: &str,
) {
    let err = Station::new(1, name, power_kw, unit_price).unwrap_err();
    assert_eq!(err.field, field);
}

#[test]
fn station_record_round_trip_keeps_values() {
    let record = StationRecord {
        id: 3,
        name: "Station 3".into(),
        power_kw: 22.0,
        unit_price: 18_000.0,
    };
    let station = Station::try_from(record.clone()).expect("valid record");
    assert_eq!(StationRecord::from(station), record);
}

#[test]
fn operational_default_is_valid() {
    let data = OperationalData::new(OperationalDataRecord::default()).expect("default record");
    assert_eq!(data, OperationalData::default());
    assert!((data.margin_per_kwh() - 2.15).abs() < 1e-12);
}

fn with(edit: impl FnOnce(&mut OperationalDataRecord)) -> OperationalDataRecord {
    let mut record = OperationalDataRecord::default();
    edit(&mut record);
    record
}

#[rstest]
#[case(with(|r| r.energy_cost = 0.0), "energy_cost")]
#[case(with(|r| r.daily_hours = 0.0), "daily_hours")]
#[case(with(|r| r.daily_hours = 24.5), "daily_hours")]
#[case(with(|r| r.daily_hours = f64::NAN), "daily_hours")]
#[case(with(|r| r.initial_occupancy = -1.0), "initial_occupancy")]
#[case(with(|r| r.initial_occupancy = 100.1), "initial_occupancy")]
#[case(with(|r| r.platform_fee = -0.01), "platform_fee")]
#[case(with(|r| r.payment_gateway_fee = 101.0), "payment_gateway_fee")]
#[case(with(|r| r.taxes = -2.0), "taxes")]
#[case(with(|r| r.monthly_maintenance = -800.0), "monthly_maintenance")]
#[case(with(|r| r.staff_cost_per_shift = -1.0), "staff_cost_per_shift")]
#[case(with(|r| r.kwh_price = 0.0), "kwh_price")]
#[case(with(|r| r.kwh_price = 0.65), "kwh_price")]
#[case(with(|r| r.kwh_price = 0.50), "kwh_price")]
fn operational_rejects_invalid_field(#[case] record: OperationalDataRecord, #[case] field: &str) {
    let err = OperationalData::new(record).unwrap_err();
    assert_eq!(err.field, field, "rule: {}", err.rule);
}

#[test]
fn operational_accepts_boundaries() {
    let record = with(|r| {
        r.daily_hours = 24.0;
        r.initial_occupancy = 0.0;
        r.platform_fee = 0.0;
        r.payment_gateway_fee = 100.0;
        r.taxes = 0.0;
        r.monthly_maintenance = 0.0;
        r.staff_cost_per_shift = 0.0;
    });
    assert!(OperationalData::new(record).is_ok());
}

#[test]
fn margin_error_names_kwh_price() {
    let err = OperationalData::new(with(|r| {
        r.energy_cost = 1.0;
        r.kwh_price = 1.0;
    }))
    .unwrap_err();
    assert_eq!(err.field, "kwh_price");
    assert!(err.to_string().contains("kwh_price"));
}

#[test]
fn projection_rates_have_no_upper_bound() {
    let rates = ProjectionRates::new(250.0, 0.0, 1_000.0).expect("large rates allowed");
    assert_eq!(rates.occupancy_growth(), 250.0);
    assert_eq!(rates.cost_increase(), 0.0);
    assert_eq!(rates.revenue_increase(), 1_000.0);
}

#[rstest]
#[case(-1.0, 0.0, 0.0, "occupancy_growth")]
#[case(0.0, -0.5, 0.0, "cost_increase")]
#[case(0.0, 0.0, f64::NAN, "revenue_increase")]
fn projection_rates_reject_negative(
    #[case] occupancy: f64,
    #[case] cost: f64,
    #[case] revenue: f64,
    #[case] field: &str,
) {
    let err = ProjectionRates::new(occupancy, cost, revenue).unwrap_err();
    assert_eq!(err.field, field);
}

#[test]
fn default_projection_rates() {
    let rates = ProjectionRates::default();
    assert_eq!(
        (rates.occupancy_growth(), rates.cost_increase(), rates.revenue_increase()),
        (5.0, 8.0, 12.0)
    );
}
