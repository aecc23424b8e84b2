pub mod calendar;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod ledger;
pub mod plan;
pub mod schedule;
pub mod types;

// re-export key types
pub use calendar::{CycleBoundaries, PeriodCalendar};
pub use decimal::{Money, Rate};
pub use engine::{InstallmentEngine, PlanAssessment};
pub use errors::{PlanError, Result};
pub use ledger::{Payment, PaymentLedger};
pub use plan::{parse_plan_date, FinancingPlan, FinancingPlanBuilder, DEFAULT_PERIOD_DAYS};
pub use schedule::{ProjectedInstallment, ScheduleProjection};
pub use types::{DeviceId, PaymentKind, PlanId, PlanStanding};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
