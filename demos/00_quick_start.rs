/// quick start - minimal example to get started
use chrono::NaiveDate;
use device_financing_rs::{FinancingPlan, InstallmentEngine, Money, Payment, PaymentLedger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== quick start ===\n");

    // finance a $1,000 device: $100 down, nine 30-day installments
    let plan = FinancingPlan::builder()
        .total_value(Money::from_major(1_000))
        .down_payment(Money::from_major(100))
        .quota_count(9)
        .initial_date_str("2024-01-01")
        .period_days(30)
        .build()?;

    println!("plan {} for device {}", plan.plan_id, plan.device_id);
    println!("financed after down payment: ${}", plan.expected_financed_value());
    println!("final installment due: {}", plan.maturity_date());

    // the shop records the down payment at signing
    let mut ledger = PaymentLedger::new();
    ledger.record(Payment::down_payment(plan.initial_date, Money::from_major(100))?);

    let engine = InstallmentEngine::new(&plan);
    let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();

    // what the collection screen pre-fills today
    println!("\ninstallment amount: ${}", engine.flat_installment_amount(&ledger)?);
    println!("collect for: {}", engine.effective_payment_date(&ledger, today));

    let assessment = engine.assess(&ledger, today)?;
    println!("standing: {:?}", assessment.standing);
    println!("days since due: {}", assessment.days_since_due);

    Ok(())
}
