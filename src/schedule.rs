use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::PeriodCalendar;
use crate::decimal::Money;
use crate::engine::InstallmentEngine;
use crate::errors::{PlanError, Result};
use crate::ledger::PaymentLedger;
use crate::plan::FinancingPlan;
use crate::types::PlanId;

/// scheduled installment in a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedInstallment {
    pub installment_number: u32,
    pub due_date: NaiveDate,
    pub amount: Money,
}

/// projected installment table for a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleProjection {
    pub plan_id: PlanId,
    /// amount left to collect after the recorded down payment
    pub financed_value: Money,
    pub installment_amount: Money,
    pub installments: Vec<ProjectedInstallment>,
    pub total_scheduled: Money,
}

impl ScheduleProjection {
    /// generate the installment table from the recorded down payment
    pub fn generate(plan: &FinancingPlan, ledger: &PaymentLedger) -> Result<Self> {
        let down_payment = ledger
            .down_payment()
            .ok_or(PlanError::MissingInitialPayment)?;

        let financed_value = plan.total_value - down_payment.value;

        let engine = InstallmentEngine::new(plan);
        let installment_amount = engine.flat_installment_amount(ledger)?;

        let calendar = PeriodCalendar::new(plan.period_days);
        let mut installments = Vec::with_capacity(plan.quota_count as usize);
        let mut scheduled = Money::ZERO;

        for (idx, due_date) in calendar
            .due_dates(plan.initial_date, plan.quota_count)
            .enumerate()
        {
            let installment_number = (idx + 1) as u32;

            // the final installment absorbs the rounding remainder
            let amount = if installment_number == plan.quota_count {
                financed_value - scheduled
            } else {
                installment_amount
            };

            scheduled += amount;
            installments.push(ProjectedInstallment {
                installment_number,
                due_date,
                amount,
            });
        }

        Ok(Self {
            plan_id: plan.plan_id,
            financed_value,
            installment_amount,
            installments,
            total_scheduled: scheduled,
        })
    }

    /// get the row for a specific installment number
    pub fn installment(&self, installment_number: u32) -> Option<&ProjectedInstallment> {
        if installment_number == 0 {
            return None;
        }

        self.installments.get((installment_number - 1) as usize)
    }

    /// rows still due strictly after the given date
    pub fn remaining_after(&self, date: NaiveDate) -> impl Iterator<Item = &ProjectedInstallment> {
        self.installments.iter().filter(move |i| i.due_date > date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Payment;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan_with_down_payment(
        total: i64,
        down: i64,
        quotas: u32,
    ) -> (FinancingPlan, PaymentLedger) {
        let plan = FinancingPlan::builder()
            .total_value(Money::from_major(total))
            .down_payment(Money::from_major(down))
            .quota_count(quotas)
            .initial_date(date(2024, 1, 1))
            .period_days(30)
            .build()
            .unwrap();

        let mut ledger = PaymentLedger::new();
        ledger.record(Payment::down_payment(date(2024, 1, 1), Money::from_major(down)).unwrap());

        (plan, ledger)
    }

    #[test]
    fn test_even_schedule() {
        let (plan, ledger) = plan_with_down_payment(1_000, 100, 9);

        let projection = ScheduleProjection::generate(&plan, &ledger).unwrap();

        assert_eq!(projection.financed_value, Money::from_major(900));
        assert_eq!(projection.installments.len(), 9);
        assert_eq!(projection.total_scheduled, Money::from_major(900));

        for row in &projection.installments {
            assert_eq!(row.amount, Money::from_major(100));
        }
    }

    #[test]
    fn test_last_installment_absorbs_remainder() {
        // 1000 over 3 installments does not divide evenly
        let (plan, ledger) = plan_with_down_payment(1_300, 300, 3);

        let projection = ScheduleProjection::generate(&plan, &ledger).unwrap();

        assert_eq!(projection.installment_amount, Money::from_str_exact("333.33").unwrap());
        assert_eq!(projection.installments[0].amount, Money::from_str_exact("333.33").unwrap());
        assert_eq!(projection.installments[1].amount, Money::from_str_exact("333.33").unwrap());
        assert_eq!(projection.installments[2].amount, Money::from_str_exact("333.34").unwrap());
        assert_eq!(projection.total_scheduled, Money::from_major(1_000));
    }

    #[test]
    fn test_due_dates_follow_cycle_length() {
        let (plan, ledger) = plan_with_down_payment(1_000, 100, 3);

        let projection = ScheduleProjection::generate(&plan, &ledger).unwrap();

        assert_eq!(projection.installments[0].due_date, date(2024, 1, 31));
        assert_eq!(projection.installments[1].due_date, date(2024, 3, 1));
        assert_eq!(projection.installments[2].due_date, date(2024, 3, 31));
    }

    #[test]
    fn test_schedule_uses_recorded_down_payment() {
        // client put down 250 instead of the agreed 100
        let plan = FinancingPlan::builder()
            .total_value(Money::from_major(1_000))
            .down_payment(Money::from_major(100))
            .quota_count(9)
            .initial_date(date(2024, 1, 1))
            .period_days(30)
            .build()
            .unwrap();

        let mut ledger = PaymentLedger::new();
        ledger.record(Payment::down_payment(date(2024, 1, 1), Money::from_major(250)).unwrap());

        let projection = ScheduleProjection::generate(&plan, &ledger).unwrap();

        assert_eq!(projection.financed_value, Money::from_major(750));
        assert_eq!(projection.total_scheduled, Money::from_major(750));
    }

    #[test]
    fn test_installment_lookup() {
        let (plan, ledger) = plan_with_down_payment(1_000, 100, 9);

        let projection = ScheduleProjection::generate(&plan, &ledger).unwrap();

        assert_eq!(projection.installment(1).unwrap().due_date, date(2024, 1, 31));
        assert_eq!(projection.installment(9).unwrap().installment_number, 9);
        assert!(projection.installment(0).is_none());
        assert!(projection.installment(10).is_none());
    }

    #[test]
    fn test_remaining_after_filters_past_rows() {
        let (plan, ledger) = plan_with_down_payment(1_000, 100, 9);

        let projection = ScheduleProjection::generate(&plan, &ledger).unwrap();
        let remaining: Vec<_> = projection.remaining_after(date(2024, 3, 1)).collect();

        assert_eq!(remaining.len(), 7);
        assert_eq!(remaining[0].due_date, date(2024, 3, 31));
    }

    #[test]
    fn test_empty_history_cannot_project() {
        let plan = FinancingPlan::builder()
            .total_value(Money::from_major(1_000))
            .quota_count(9)
            .initial_date(date(2024, 1, 1))
            .build()
            .unwrap();

        let result = ScheduleProjection::generate(&plan, &PaymentLedger::new());
        assert!(matches!(result, Err(PlanError::MissingInitialPayment)));
    }
}
