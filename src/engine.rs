use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{CycleBoundaries, PeriodCalendar};
use crate::decimal::{Money, Rate};
use crate::errors::{PlanError, Result};
use crate::ledger::PaymentLedger;
use crate::plan::FinancingPlan;
use crate::types::{PlanId, PlanStanding};

/// engine for deriving collection figures from a plan and its history
pub struct InstallmentEngine<'a> {
    plan: &'a FinancingPlan,
    calendar: PeriodCalendar,
}

impl<'a> InstallmentEngine<'a> {
    pub fn new(plan: &'a FinancingPlan) -> Self {
        Self {
            plan,
            calendar: PeriodCalendar::new(plan.period_days),
        }
    }

    /// date to pre-fill when collecting the next payment
    ///
    /// today while the plan has not started, the open cycle's start while
    /// that date is unpaid, and the following cycle's start once a payment
    /// lands exactly on it
    pub fn effective_payment_date(&self, ledger: &PaymentLedger, today: NaiveDate) -> NaiveDate {
        match self.calendar.cycle_boundaries(self.plan.initial_date, today) {
            None => today,
            Some(cycle) => {
                if ledger.has_payment_for(cycle.last_payment_date) {
                    cycle.next_payment_date
                } else {
                    cycle.last_payment_date
                }
            }
        }
    }

    /// effective payment date with a time provider
    pub fn effective_payment_date_at(
        &self,
        ledger: &PaymentLedger,
        time_provider: &SafeTimeProvider,
    ) -> NaiveDate {
        self.effective_payment_date(ledger, time_provider.now().date_naive())
    }

    /// effective payment date with system time
    pub fn effective_payment_date_now(&self, ledger: &PaymentLedger) -> NaiveDate {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.effective_payment_date_at(ledger, &time)
    }

    /// flat per-installment amount
    ///
    /// the financed remainder after the recorded down payment, split evenly
    /// across the agreed quota count and rounded to the cent
    pub fn flat_installment_amount(&self, ledger: &PaymentLedger) -> Result<Money> {
        let down_payment = ledger
            .down_payment()
            .ok_or(PlanError::MissingInitialPayment)?;

        let financed_value = self.plan.total_value - down_payment.value;

        let amount = if self.plan.quota_count > 0 {
            financed_value / Decimal::from(self.plan.quota_count)
        } else {
            Money::ZERO
        };

        Ok(amount)
    }

    /// full standing report for collection screens
    pub fn assess(&self, ledger: &PaymentLedger, today: NaiveDate) -> Result<PlanAssessment> {
        let installment_amount = self.flat_installment_amount(ledger)?;
        let cycle = self.calendar.cycle_boundaries(self.plan.initial_date, today);
        let effective_date = self.effective_payment_date(ledger, today);

        let installments_paid = ledger.installments_paid();
        let installments_remaining = self.plan.quota_count.saturating_sub(installments_paid);
        let total_paid = ledger.total_paid();
        let remaining_balance = (self.plan.total_value - total_paid).max(Money::ZERO);

        let paid_ratio = if self.plan.total_value.is_zero() {
            Rate::ZERO
        } else {
            Rate::from_decimal(total_paid.as_decimal() / self.plan.total_value.as_decimal())
        };

        let standing = match &cycle {
            None => PlanStanding::Pending,
            Some(c) => {
                if installments_remaining == 0 {
                    PlanStanding::Settled
                } else if ledger.has_payment_for(c.last_payment_date) {
                    PlanStanding::Current
                } else {
                    PlanStanding::Due
                }
            }
        };

        let days_since_due = match (standing, &cycle) {
            (PlanStanding::Due, Some(c)) => (today - c.last_payment_date).num_days() as u32,
            _ => 0,
        };

        Ok(PlanAssessment {
            plan_id: self.plan.plan_id,
            standing,
            cycle,
            effective_date,
            installment_amount,
            total_paid,
            remaining_balance,
            paid_ratio,
            installments_paid,
            installments_remaining,
            days_since_due,
        })
    }

    /// standing report with a time provider
    pub fn assess_at(
        &self,
        ledger: &PaymentLedger,
        time_provider: &SafeTimeProvider,
    ) -> Result<PlanAssessment> {
        self.assess(ledger, time_provider.now().date_naive())
    }

    /// standing report with system time
    pub fn assess_now(&self, ledger: &PaymentLedger) -> Result<PlanAssessment> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.assess_at(ledger, &time)
    }
}

/// snapshot of a plan's standing as of a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanAssessment {
    pub plan_id: PlanId,
    pub standing: PlanStanding,
    /// cycle containing the assessment day, None before the plan starts
    pub cycle: Option<CycleBoundaries>,
    pub effective_date: NaiveDate,
    pub installment_amount: Money,
    pub total_paid: Money,
    pub remaining_balance: Money,
    pub paid_ratio: Rate,
    pub installments_paid: u32,
    pub installments_remaining: u32,
    /// days the open cycle has gone unpaid, zero otherwise
    pub days_since_due: u32,
}
