use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// boundary dates of the billing cycle a given day falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleBoundaries {
    /// completed cycles between the anchor date and today
    pub cycles_passed: u32,
    /// start of the current cycle, the date the pending installment is due for
    pub last_payment_date: NaiveDate,
    /// start of the following cycle
    pub next_payment_date: NaiveDate,
}

impl CycleBoundaries {
    /// check if a date falls inside the current cycle
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.last_payment_date && date < self.next_payment_date
    }
}

/// engine for cycle date arithmetic anchored to a plan's start date
pub struct PeriodCalendar {
    pub period_days: u32,
}

impl PeriodCalendar {
    pub fn new(period_days: u32) -> Self {
        Self { period_days }
    }

    /// locate the cycle containing today
    ///
    /// returns None while today precedes the anchor date, so callers
    /// fall back to today itself. whole cycles only: the cycle count is
    /// the floor of elapsed days over the period length.
    pub fn cycle_boundaries(&self, start: NaiveDate, today: NaiveDate) -> Option<CycleBoundaries> {
        if self.period_days == 0 || today < start {
            return None;
        }

        let period = i64::from(self.period_days);
        let days_elapsed = (today - start).num_days();
        let cycles_passed = days_elapsed / period;
        let last_payment_date = start + Duration::days(cycles_passed * period);
        let next_payment_date = last_payment_date + Duration::days(period);

        Some(CycleBoundaries {
            cycles_passed: cycles_passed as u32,
            last_payment_date,
            next_payment_date,
        })
    }

    /// due dates for installments 1..=count, one period after the previous
    pub fn due_dates(&self, start: NaiveDate, count: u32) -> impl Iterator<Item = NaiveDate> {
        let period = i64::from(self.period_days);
        (1..=i64::from(count)).map(move |n| start + Duration::days(n * period))
    }
}
