//! Recurrence and exception evaluation.
//!
//! Pure and total: no shared state, no error conditions. Safe to call
//! repeatedly with the same inputs.

use chrono::{Datelike, NaiveDate};

use crate::alarm::Alarm;

/// Weekday index for a date, 0=Sunday .. 6=Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// True iff the alarm rings on the given date: enabled, weekday matches,
/// and the date is not an exception.
pub fn is_due_on(alarm: &Alarm, date: NaiveDate) -> bool {
    alarm.enabled
        && alarm.days.contains(&weekday_index(date))
        && !alarm.disabled_dates.contains(&date)
}

/// All alarms due on `date`, in the same relative order as the input.
pub fn due_on(alarms: &[Alarm], date: NaiveDate) -> Vec<&Alarm> {
    alarms.iter().filter(|a| is_due_on(a, date)).collect()
}
