/// collection cycle - a full plan lifecycle with controlled time
use chrono::{Duration, TimeZone, Utc};
use device_financing_rs::{
    FinancingPlan, InstallmentEngine, Money, Payment, PaymentKind, PaymentLedger,
    SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== collection cycle example ===\n");

    // create controlled time for the walkthrough
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    println!("signing date: {}", time.now().format("%Y-%m-%d"));

    let plan = FinancingPlan::builder()
        .total_value(Money::from_major(1_000))
        .down_payment(Money::from_major(100))
        .quota_count(9)
        .initial_date(time.now().date_naive())
        .period_days(30)
        .build()?;

    // down payment collected at signing
    let mut ledger = PaymentLedger::new();
    ledger.record(Payment::recorded_at(
        time.now(),
        Money::from_major(100),
        PaymentKind::DownPayment,
    )?);

    let engine = InstallmentEngine::new(&plan);
    let installment = engine.flat_installment_amount(&ledger)?;
    println!("installment amount: ${}\n", installment);

    // collect the first eight installments on their due dates
    for number in 1..=8 {
        controller.advance(Duration::days(30));

        let due = engine.effective_payment_date_at(&ledger, &time);
        ledger.record(Payment::installment(due, installment)?);
        println!("installment {} collected on {}", number, due);
    }

    // the client shows up ten days late for the last one
    controller.advance(Duration::days(40));
    println!("\nadvanced to: {}", time.now().format("%Y-%m-%d"));

    let assessment = engine.assess_at(&ledger, &time)?;
    println!("standing: {:?}", assessment.standing);
    println!("days since due: {}", assessment.days_since_due);
    println!("collect for: {}", assessment.effective_date);

    // the payment is still recorded against the open cycle's date
    ledger.record(Payment::installment(assessment.effective_date, installment)?);
    println!("installment 9 collected on {}", assessment.effective_date);

    let final_assessment = engine.assess_at(&ledger, &time)?;
    println!("\nfinal standing: {:?}", final_assessment.standing);
    println!("total paid: ${}", final_assessment.total_paid);
    println!("remaining balance: ${}", final_assessment.remaining_balance);

    Ok(())
}
