//! Pre-holiday notification gate.
//!
//! Decides, on demand, whether to surface a "tomorrow is a holiday,
//! disable this alarm?" prompt. This is a gate, not a scheduler: the
//! caller invokes it on view entry and it is deterministic in its
//! inputs, so the demo scenario and tests swap in a fixed `now` and
//! calendar without a separate code path.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::alarm::Alarm;
use crate::holiday::HolidayCalendar;
use crate::recurrence::due_on;

/// Earliest local hour at which the prompt may appear (7:00 PM).
pub const PROMPT_HOUR: u32 = 19;

/// Dates whose prompt has already been answered this runtime, whether
/// the user disabled the alarm or kept it. Prevents re-prompting for
/// the same target date.
#[derive(Debug, Clone, Default)]
pub struct ResolvedDates {
    dates: BTreeSet<NaiveDate>,
}

impl ResolvedDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the prompt for `date` has been answered. The mark is
    /// visible to any evaluation that follows in the same pass.
    pub fn mark(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn is_resolved(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

/// A prompt the presentation layer should show: the first alarm due on
/// the holiday, paired with that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayPrompt {
    pub alarm: Alarm,
    pub target_date: NaiveDate,
}

/// The notification gate. Stateless; the dedupe record is injected.
pub struct NotificationGate;

impl NotificationGate {
    /// Evaluate whether a prompt is warranted at `now` (device-local
    /// wall-clock time).
    ///
    /// Returns a prompt iff all of the following hold:
    /// - it is `PROMPT_HOUR` o'clock or later,
    /// - tomorrow is a holiday according to `calendar`,
    /// - tomorrow's prompt has not already been resolved,
    /// - at least one alarm is due tomorrow.
    pub fn evaluate(
        now: NaiveDateTime,
        alarms: &[Alarm],
        calendar: &dyn HolidayCalendar,
        resolved: &ResolvedDates,
    ) -> Option<HolidayPrompt> {
        if now.hour() < PROMPT_HOUR {
            return None;
        }
        let tomorrow = now.date().checked_add_days(Days::new(1))?;
        if !calendar.is_holiday(tomorrow) {
            return None;
        }
        if resolved.is_resolved(tomorrow) {
            return None;
        }
        let due = due_on(alarms, tomorrow);
        due.first().map(|&alarm| HolidayPrompt {
            alarm: alarm.clone(),
            target_date: tomorrow,
        })
    }
}
