//! Holiday notification demo scenario.
//!
//! The prototype ships a fixed scenario to demonstrate the prompt UX
//! without waiting for a real pre-holiday evening: "now" is pinned to
//! the evening threshold and "tomorrow" is treated as a holiday. The
//! scenario only supplies inputs - evaluation goes through the exact
//! same [`NotificationGate`] path as production, so demo behavior and
//! real behavior can never drift apart.

use chrono::{NaiveDate, NaiveDateTime};

use crate::alarm::Alarm;
use crate::gate::{HolidayPrompt, NotificationGate, ResolvedDates, PROMPT_HOUR};
use crate::holiday::StaticHolidayCalendar;

/// For UI: label that this is a simulated example.
pub const DEMO_LABEL: &str = "Example: holiday notification (simulated)";

// Tuesday evening; the following Wednesday matches the seeded alarm.
const DEMO_DAY_BEFORE: (i32, u32, u32) = (2026, 1, 20);
const DEMO_HOLIDAY: (i32, u32, u32) = (2026, 1, 21);

/// Fixed demo scenario: pinned clock plus a one-date holiday calendar.
#[derive(Debug, Clone)]
pub struct HolidayDemo {
    now: NaiveDateTime,
    calendar: StaticHolidayCalendar,
}

impl HolidayDemo {
    pub fn new() -> Self {
        let (y, m, d) = DEMO_DAY_BEFORE;
        let now = NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(PROMPT_HOUR, 0, 0))
            .unwrap_or_default();
        let (y, m, d) = DEMO_HOLIDAY;
        let calendar =
            StaticHolidayCalendar::from_dates(NaiveDate::from_ymd_opt(y, m, d));
        Self { now, calendar }
    }

    /// The pinned "now": the day before the demo holiday, at the prompt
    /// threshold hour.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn calendar(&self) -> &StaticHolidayCalendar {
        &self.calendar
    }

    /// Run the real gate against the demo inputs.
    pub fn evaluate(&self, alarms: &[Alarm], resolved: &ResolvedDates) -> Option<HolidayPrompt> {
        NotificationGate::evaluate(self.now, alarms, &self.calendar, resolved)
    }
}

impl Default for HolidayDemo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::{AlarmTime, Sound};
    use chrono::Timelike;
    use std::collections::BTreeSet;

    fn wednesday_alarm() -> Alarm {
        Alarm::new(AlarmTime::new(6, 30), BTreeSet::from([1, 3]), Sound::Sea, true)
    }

    #[test]
    fn demo_clock_sits_at_the_threshold() {
        let demo = HolidayDemo::new();
        assert_eq!(demo.now().hour(), PROMPT_HOUR);
    }

    #[test]
    fn demo_prompts_for_the_seeded_alarm() {
        let demo = HolidayDemo::new();
        let alarms = [wednesday_alarm()];
        let prompt = demo
            .evaluate(&alarms, &ResolvedDates::new())
            .expect("demo scenario should prompt");
        assert_eq!(prompt.target_date, NaiveDate::from_ymd_opt(2026, 1, 21).unwrap());
    }

    #[test]
    fn demo_respects_the_dedupe_record() {
        let demo = HolidayDemo::new();
        let alarms = [wednesday_alarm()];
        let mut resolved = ResolvedDates::new();
        resolved.mark(NaiveDate::from_ymd_opt(2026, 1, 21).unwrap());
        assert!(demo.evaluate(&alarms, &resolved).is_none());
    }
}
