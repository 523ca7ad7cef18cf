//! The compass: advisory tips
//!
//! Derives an ordered list of qualitative tips from a snapshot, the current
//! window and today's calendar position. Tips are text only; they never
//! block or mutate anything.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::engine::Snapshot;
use crate::models::{days_in_month, Window};

/// Tolerance band, in percentage points, between spending pace and
/// calendar pace before a tip flags the gap
const PACE_TOLERANCE: i64 = 10;

/// How a tip should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipSeverity {
    Good,
    Warning,
    Bad,
}

impl fmt::Display for TipSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Warning => write!(f, "warning"),
            Self::Bad => write!(f, "bad"),
        }
    }
}

/// A single advisory tip
#[derive(Debug, Clone, PartialEq)]
pub struct Tip {
    pub severity: TipSeverity,
    pub message: String,
}

impl Tip {
    fn good(message: impl Into<String>) -> Self {
        Self {
            severity: TipSeverity::Good,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: TipSeverity::Warning,
            message: message.into(),
        }
    }

    fn bad(message: impl Into<String>) -> Self {
        Self {
            severity: TipSeverity::Bad,
            message: message.into(),
        }
    }
}

/// Generate the ordered tip list for a window
pub fn generate(snapshot: &Snapshot, window: Window, today: NaiveDate) -> Vec<Tip> {
    let mut tips = Vec::new();

    let spent = snapshot.total_spent(Some(window));
    let left = snapshot.left_to_allocate(Some(window));

    // 1. Pace check: spending ratio vs calendar ratio
    let spend_ratio = if snapshot.salary.is_positive() {
        (spent.value() / snapshot.salary.value() * 100.0).round() as i64
    } else {
        0
    };
    let time_ratio = {
        let days = days_in_month(today.year(), today.month());
        (today.day() as f64 / days as f64 * 100.0).round() as i64
    };

    if spend_ratio > time_ratio + PACE_TOLERANCE {
        tips.push(Tip::bad(format!(
            "Overspending pace: {}% of salary spent at {}% of the month.",
            spend_ratio, time_ratio
        )));
    } else if spend_ratio < time_ratio - PACE_TOLERANCE {
        tips.push(Tip::good(format!(
            "Ahead of plan: only {}% of salary spent at {}% of the month.",
            spend_ratio, time_ratio
        )));
    } else {
        tips.push(Tip::warning(format!(
            "On pace ({}% spent, {}% of the month gone). Watch out for large known expenses still to come.",
            spend_ratio, time_ratio
        )));
    }

    // 2. Allocation check
    if left.is_positive() {
        tips.push(Tip::good(format!(
            "{} not yet assigned to an envelope. Consider splitting it between safety, leisure and projects.",
            left
        )));
    } else {
        tips.push(Tip::warning(
            "Nothing left to allocate: any further spending now cuts directly into theoretical savings.",
        ));
    }

    // 3. Near-goal check
    for envelope in snapshot.savings.iter().filter(|s| s.near_target()) {
        tips.push(Tip::good(format!(
            "Envelope '{}' is close to its goal.",
            envelope.name
        )));
    }

    // 4. Over-budget guard: structural, independent of this month's spending
    let budgets = snapshot.sum_category_budgets();
    if snapshot.salary.is_positive() && budgets > snapshot.salary {
        let excess = budgets - snapshot.salary;
        tips.push(Tip::bad(format!(
            "Category budgets exceed salary by {}. The plan does not balance even before spending.",
            excess
        )));
    }

    tips
}
