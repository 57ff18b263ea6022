use crate::models::{GestationalProgress, Trimester};
use chrono::{Duration, NaiveDate};

/// Fixed 40-week gestation assumption: conception start is 280 days before
/// the due date.
pub const GESTATION_DAYS: i64 = 280;
pub const FULL_TERM_WEEKS: u32 = 40;

pub fn compute_progress(due_date: NaiveDate, today: NaiveDate) -> GestationalProgress {
    let start_date = due_date - Duration::days(GESTATION_DAYS);

    // A due date far in the future puts today before the conception start;
    // gestational age is never negative.
    let days_passed = (today - start_date).num_days().max(0);
    let weeks = (days_passed / 7) as u32;
    let days = (days_passed % 7) as u32;

    let days_remaining = (due_date - today).num_days().max(0);
    let percentage = (f64::from(weeks) / f64::from(FULL_TERM_WEEKS) * 100.0).min(100.0);

    GestationalProgress {
        weeks,
        days,
        trimester: trimester_for_week(weeks),
        days_remaining,
        percentage,
        due_date,
        start_date,
    }
}

fn trimester_for_week(weeks: u32) -> Trimester {
    if weeks <= 12 {
        Trimester::First
    } else if weeks <= 27 {
        Trimester::Second
    } else {
        Trimester::Third
    }
}
