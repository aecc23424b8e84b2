use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{PlanError, Result};
use crate::types::PaymentKind;

/// record of a collected payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub date: NaiveDate,
    pub value: Money,
    #[serde(default)]
    pub kind: PaymentKind,
}

impl Payment {
    /// record a payment, rejecting non-positive amounts
    pub fn new(date: NaiveDate, value: Money, kind: PaymentKind) -> Result<Self> {
        if value.is_zero() || value.is_negative() {
            return Err(PlanError::InvalidPaymentAmount { amount: value });
        }

        Ok(Self { date, value, kind })
    }

    pub fn down_payment(date: NaiveDate, value: Money) -> Result<Self> {
        Self::new(date, value, PaymentKind::DownPayment)
    }

    pub fn installment(date: NaiveDate, value: Money) -> Result<Self> {
        Self::new(date, value, PaymentKind::Installment)
    }

    /// record from a collection timestamp, keeping only the calendar date
    pub fn recorded_at(timestamp: DateTime<Utc>, value: Money, kind: PaymentKind) -> Result<Self> {
        Self::new(timestamp.date_naive(), value, kind)
    }
}

/// append-only payment history for one financing plan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLedger {
    payments: Vec<Payment>,
}

impl PaymentLedger {
    pub fn new() -> Self {
        Self {
            payments: Vec::new(),
        }
    }

    pub fn from_payments(payments: Vec<Payment>) -> Self {
        Self { payments }
    }

    /// append a payment; recorded entries are never altered
    pub fn record(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// check if any entry falls exactly on the given date
    pub fn has_payment_for(&self, date: NaiveDate) -> bool {
        self.payments.iter().any(|p| p.date == date)
    }

    /// total collected on a specific date
    pub fn total_for_date(&self, date: NaiveDate) -> Money {
        self.payments
            .iter()
            .filter(|p| p.date == date)
            .map(|p| p.value)
            .fold(Money::ZERO, |acc, v| acc + v)
    }

    /// total collected over the whole history, down payment included
    pub fn total_paid(&self) -> Money {
        self.payments
            .iter()
            .map(|p| p.value)
            .fold(Money::ZERO, |acc, v| acc + v)
    }

    /// the down payment: first entry tagged as such, else the oldest entry
    pub fn down_payment(&self) -> Option<&Payment> {
        self.payments
            .iter()
            .find(|p| p.kind == PaymentKind::DownPayment)
            .or_else(|| self.payments.first())
    }

    /// count of recorded installments, excluding the down payment
    pub fn installments_paid(&self) -> u32 {
        if self.payments.is_empty() {
            return 0;
        }

        (self.payments.len() - 1) as u32
    }
}
