//! Aggregate statistics for the dashboard and expiry notifications.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::models::contract::{Contract, ContractStatus};

const SECONDS_PER_DAY: i64 = 86_400;

/// Contracts at or below this many remaining days are flagged critical.
pub const CRITICAL_DAYS: i64 = 10;

/// Lookahead used by the notification menu when nothing else is configured.
pub const DEFAULT_EXPIRING_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub active: usize,
    pub pending: usize,
    pub expired: usize,
    pub concluded: usize,
}

impl StatusCounts {
    pub fn tally(contracts: &[Contract]) -> Self {
        let mut counts = Self::default();
        for contract in contracts {
            *counts.slot(contract.status) += 1;
        }
        counts
    }

    pub fn get(&self, status: ContractStatus) -> usize {
        match status {
            ContractStatus::Active => self.active,
            ContractStatus::Pending => self.pending,
            ContractStatus::Expired => self.expired,
            ContractStatus::Concluded => self.concluded,
        }
    }

    fn slot(&mut self, status: ContractStatus) -> &mut usize {
        match status {
            ContractStatus::Active => &mut self.active,
            ContractStatus::Pending => &mut self.pending,
            ContractStatus::Expired => &mut self.expired,
            ContractStatus::Concluded => &mut self.concluded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpiryUrgency {
    Critical,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpiringContract<'a> {
    pub contract: &'a Contract,
    pub days_remaining: i64,
    pub urgency: ExpiryUrgency,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContractStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub expired: usize,
    pub concluded: usize,
    pub total_value: f64,
    pub expiring_soon: usize,
}

impl ContractStats {
    pub fn compute(contracts: &[Contract], now: DateTime<Utc>, window_days: u32) -> Self {
        let counts = StatusCounts::tally(contracts);
        Self {
            total: contracts.len(),
            active: counts.active,
            pending: counts.pending,
            expired: counts.expired,
            concluded: counts.concluded,
            total_value: total_value(contracts),
            expiring_soon: expiring_soon(contracts, now, window_days).len(),
        }
    }
}

/// Everything the dashboard screen renders, derived in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary<'a> {
    pub stats: ContractStats,
    pub breakdown: Vec<(ContractStatus, usize)>,
    pub expiring: Vec<ExpiringContract<'a>>,
}

impl<'a> DashboardSummary<'a> {
    pub fn compute(contracts: &'a [Contract], now: DateTime<Utc>, window_days: u32) -> Self {
        Self {
            stats: ContractStats::compute(contracts, now, window_days),
            breakdown: status_breakdown(contracts),
            expiring: expiring_soon(contracts, now, window_days),
        }
    }
}

pub fn total_value(contracts: &[Contract]) -> f64 {
    contracts.iter().map(|c| c.value).sum()
}

/// Series behind the dashboard status chart. Concluded contracts are not
/// charted.
pub fn status_breakdown(contracts: &[Contract]) -> Vec<(ContractStatus, usize)> {
    let counts = StatusCounts::tally(contracts);
    [
        ContractStatus::Active,
        ContractStatus::Pending,
        ContractStatus::Expired,
    ]
    .into_iter()
    .map(|status| (status, counts.get(status)))
    .collect()
}

/// Start of `date` in UTC, the instant a contract's end date refers to.
pub fn end_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Whole days left until `end_date`, rounded up. Zero once past due.
pub fn days_remaining(end_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let left = end_instant(end_date) - now;
    if left <= Duration::zero() {
        return 0;
    }
    let whole_seconds = left.num_seconds() + i64::from(left.subsec_nanos() > 0);
    (whole_seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

pub fn urgency(days_remaining: i64) -> ExpiryUrgency {
    if days_remaining <= CRITICAL_DAYS {
        ExpiryUrgency::Critical
    } else {
        ExpiryUrgency::Warning
    }
}

/// Contracts whose end instant falls within `[now, now + window_days]`, in
/// collection order.
pub fn expiring_soon(
    contracts: &[Contract],
    now: DateTime<Utc>,
    window_days: u32,
) -> Vec<ExpiringContract<'_>> {
    // None when the window reaches past the representable range: no bound.
    let horizon = Duration::try_days(i64::from(window_days))
        .and_then(|window| now.checked_add_signed(window));
    contracts
        .iter()
        .filter(|c| {
            let end = end_instant(c.end_date);
            end >= now && horizon.is_none_or(|horizon| end <= horizon)
        })
        .map(|contract| {
            let days = days_remaining(contract.end_date, now);
            ExpiringContract {
                contract,
                days_remaining: days,
                urgency: urgency(days),
            }
        })
        .collect()
}
