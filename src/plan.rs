use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};
use crate::errors::{PlanError, Result};
use crate::types::{DeviceId, PlanId};

/// default billing cycle length in days
pub const DEFAULT_PERIOD_DAYS: u32 = 30;

/// agreed terms for one financed device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancingPlan {
    pub plan_id: PlanId,
    pub device_id: DeviceId,
    /// full device price, down payment included
    pub total_value: Money,
    /// down payment agreed at signing
    pub initial_payment_amount: Money,
    /// number of installments after the down payment
    pub quota_count: u32,
    /// anchor date all cycles are measured from
    pub initial_date: NaiveDate,
    pub period_days: u32,
}

impl FinancingPlan {
    /// create a validated plan with a fresh id
    pub fn new(
        device_id: DeviceId,
        total_value: Money,
        initial_payment_amount: Money,
        quota_count: u32,
        initial_date: NaiveDate,
        period_days: u32,
    ) -> Result<Self> {
        if quota_count == 0 {
            return Err(PlanError::InvalidQuotaCount { count: quota_count });
        }

        if period_days == 0 {
            return Err(PlanError::InvalidPeriodLength { days: period_days });
        }

        if total_value.is_zero() || total_value.is_negative() {
            return Err(PlanError::InvalidPlanValue { value: total_value });
        }

        if initial_payment_amount.is_negative() {
            return Err(PlanError::InvalidPaymentAmount {
                amount: initial_payment_amount,
            });
        }

        if initial_payment_amount > total_value {
            return Err(PlanError::DownPaymentExceedsTotal {
                total: total_value,
                down_payment: initial_payment_amount,
            });
        }

        Ok(Self {
            plan_id: Uuid::new_v4(),
            device_id,
            total_value,
            initial_payment_amount,
            quota_count,
            initial_date,
            period_days,
        })
    }

    /// builder for creating financing plans
    pub fn builder() -> FinancingPlanBuilder {
        FinancingPlanBuilder::new()
    }

    /// amount left to spread over installments after the agreed down payment
    pub fn expected_financed_value(&self) -> Money {
        self.total_value - self.initial_payment_amount
    }

    /// date the final installment falls due
    pub fn maturity_date(&self) -> NaiveDate {
        self.initial_date
            + Duration::days(i64::from(self.quota_count) * i64::from(self.period_days))
    }

    /// share of the device price paid at signing
    pub fn down_payment_share(&self) -> Rate {
        if self.total_value.is_zero() {
            return Rate::ZERO;
        }

        Rate::from_decimal(self.initial_payment_amount.as_decimal() / self.total_value.as_decimal())
    }
}

/// builder for financing plans
pub struct FinancingPlanBuilder {
    device_id: Option<DeviceId>,
    total_value: Option<Money>,
    initial_payment_amount: Option<Money>,
    quota_count: Option<u32>,
    initial_date: Option<NaiveDate>,
    initial_date_str: Option<String>,
    period_days: Option<u32>,
}

impl FinancingPlanBuilder {
    pub fn new() -> Self {
        Self {
            device_id: None,
            total_value: None,
            initial_payment_amount: None,
            quota_count: None,
            initial_date: None,
            initial_date_str: None,
            period_days: None,
        }
    }

    pub fn device_id(mut self, device_id: DeviceId) -> Self {
        self.device_id = Some(device_id);
        self
    }

    pub fn total_value(mut self, value: Money) -> Self {
        self.total_value = Some(value);
        self
    }

    pub fn down_payment(mut self, amount: Money) -> Self {
        self.initial_payment_amount = Some(amount);
        self
    }

    pub fn quota_count(mut self, count: u32) -> Self {
        self.quota_count = Some(count);
        self
    }

    pub fn initial_date(mut self, date: NaiveDate) -> Self {
        self.initial_date = Some(date);
        self
    }

    /// anchor date as an iso `YYYY-MM-DD` string, parsed at build time
    pub fn initial_date_str(mut self, date: impl Into<String>) -> Self {
        self.initial_date_str = Some(date.into());
        self
    }

    pub fn period_days(mut self, days: u32) -> Self {
        self.period_days = Some(days);
        self
    }

    pub fn build(self) -> Result<FinancingPlan> {
        let device_id = self.device_id.unwrap_or_else(Uuid::new_v4);

        let total_value = self.total_value.ok_or(PlanError::InvalidConfiguration {
            message: "Total value required".to_string(),
        })?;

        let initial_payment_amount = self.initial_payment_amount.unwrap_or(Money::ZERO);

        let quota_count = self.quota_count.ok_or(PlanError::InvalidConfiguration {
            message: "Quota count required".to_string(),
        })?;

        let initial_date = match (self.initial_date, self.initial_date_str) {
            (Some(date), _) => date,
            (None, Some(raw)) => parse_plan_date(&raw)?,
            (None, None) => {
                return Err(PlanError::InvalidConfiguration {
                    message: "Initial date required".to_string(),
                });
            }
        };

        let period_days = self.period_days.unwrap_or(DEFAULT_PERIOD_DAYS);

        FinancingPlan::new(
            device_id,
            total_value,
            initial_payment_amount,
            quota_count,
            initial_date,
            period_days,
        )
    }
}

/// parse an iso `YYYY-MM-DD` date as stored on plan contracts
pub fn parse_plan_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| PlanError::InvalidDate {
        message: format!("{}: {}", raw, e),
    })
}
