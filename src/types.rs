use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a financing plan
pub type PlanId = Uuid;

/// unique identifier for a financed device
pub type DeviceId = Uuid;

/// role of a recorded payment within a plan's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentKind {
    /// paid at signing, excluded from the installment divisor
    DownPayment,
    /// regular payment against a billing cycle
    #[default]
    Installment,
}

/// standing of a plan as of a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanStanding {
    /// plan signed but the first cycle has not started
    Pending,
    /// current cycle already has a payment on its due date
    Current,
    /// current cycle is still unpaid
    Due,
    /// all installments recorded
    Settled,
}
