/// json state - serialization for storage and dashboards
use chrono::{Duration, TimeZone, Utc};
use device_financing_rs::{
    FinancingPlan, InstallmentEngine, Money, Payment, PaymentLedger, SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json state serialization ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    let plan = FinancingPlan::builder()
        .total_value(Money::from_major(1_000))
        .down_payment(Money::from_major(100))
        .quota_count(9)
        .initial_date(time.now().date_naive())
        .period_days(30)
        .build()?;

    // stage 1: the signed plan as stored
    println!("stage 1: signed plan");
    println!("--------------------");
    println!("{}\n", serde_json::to_string_pretty(&plan)?);

    let mut ledger = PaymentLedger::new();
    ledger.record(Payment::down_payment(plan.initial_date, Money::from_major(100))?);

    // stage 2: ledger after the down payment
    println!("stage 2: ledger after down payment");
    println!("----------------------------------");
    println!("{}\n", serde_json::to_string_pretty(&ledger)?);

    // stage 3: assessment two cycles in
    controller.advance(Duration::days(64));

    let engine = InstallmentEngine::new(&plan);
    let assessment = engine.assess_at(&ledger, &time)?;

    println!("stage 3: assessment on {}", time.now().format("%Y-%m-%d"));
    println!("--------------------------------");
    println!("{}\n", serde_json::to_string_pretty(&assessment)?);

    // a plan reloaded from storage matches the original
    let stored = serde_json::to_string(&plan)?;
    let restored: FinancingPlan = serde_json::from_str(&stored)?;
    assert_eq!(restored, plan);
    println!("plan round-trips through json unchanged");

    Ok(())
}
