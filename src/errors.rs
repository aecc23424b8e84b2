use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("missing initial payment: payment history is empty")]
    MissingInitialPayment,

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("invalid quota count: {count}")]
    InvalidQuotaCount {
        count: u32,
    },

    #[error("invalid period length: {days} days")]
    InvalidPeriodLength {
        days: u32,
    },

    #[error("invalid plan value: {value}")]
    InvalidPlanValue {
        value: Money,
    },

    #[error("down payment exceeds total: total {total}, down payment {down_payment}")]
    DownPaymentExceedsTotal {
        total: Money,
        down_payment: Money,
    },

    #[error("invalid payment amount: {amount}")]
    InvalidPaymentAmount {
        amount: Money,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PlanError>;
