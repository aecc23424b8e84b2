/// schedule projection - the expected installment table for a plan
use chrono::NaiveDate;
use device_financing_rs::{FinancingPlan, Money, Payment, PaymentLedger, ScheduleProjection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== schedule projection example ===\n");

    let signing = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    // a price that divides evenly across the installments
    let plan = FinancingPlan::builder()
        .total_value(Money::from_major(1_000))
        .down_payment(Money::from_major(100))
        .quota_count(9)
        .initial_date(signing)
        .period_days(30)
        .build()?;

    let mut ledger = PaymentLedger::new();
    ledger.record(Payment::down_payment(signing, Money::from_major(100))?);

    let projection = ScheduleProjection::generate(&plan, &ledger)?;
    print_projection("$1,000 device, $100 down, 9 installments", &projection);

    // and one that leaves a rounding remainder
    let plan = FinancingPlan::builder()
        .total_value(Money::from_major(1_300))
        .down_payment(Money::from_major(300))
        .quota_count(3)
        .initial_date(signing)
        .period_days(30)
        .build()?;

    let mut ledger = PaymentLedger::new();
    ledger.record(Payment::down_payment(signing, Money::from_major(300))?);

    let projection = ScheduleProjection::generate(&plan, &ledger)?;
    print_projection("$1,300 device, $300 down, 3 installments", &projection);

    Ok(())
}

fn print_projection(title: &str, projection: &ScheduleProjection) {
    println!("{}", title);
    println!("financed value: ${}", projection.financed_value);

    for row in &projection.installments {
        println!(
            "  installment {:>2} due {}  ${}",
            row.installment_number, row.due_date, row.amount
        );
    }

    println!("  total scheduled: ${}\n", projection.total_scheduled);
}
