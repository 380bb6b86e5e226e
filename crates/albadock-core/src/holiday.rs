//! Holiday calendar lookup.
//!
//! The calendar is a seam: production uses the built-in static table,
//! tests and the demo scenario inject their own dates through the same
//! trait, so there is no forked evaluation path.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Answers "is this date a non-working day?".
pub trait HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Built-in holiday table (Mexico plus a few international dates).
/// Placeholder for a real calendar service.
const BUILTIN_HOLIDAYS: &[(i32, u32, u32)] = &[
    // 2025
    (2025, 1, 1),   // Año nuevo
    (2025, 2, 3),   // Día de la Constitución (lunes)
    (2025, 3, 17),  // Natalicio de Benito Juárez (lunes)
    (2025, 5, 1),   // Día del trabajo
    (2025, 9, 16),  // Día de la Independencia
    (2025, 11, 3),  // Día de Muertos
    (2025, 11, 17), // Revolución Mexicana (lunes)
    (2025, 12, 25), // Navidad
    // 2026
    (2026, 1, 1),
    (2026, 2, 2),
    (2026, 3, 16),
    (2026, 5, 1),
    (2026, 9, 16),
    (2026, 11, 2),
    (2026, 11, 16),
    (2026, 12, 25),
];

/// Set-backed calendar.
#[derive(Debug, Clone)]
pub struct StaticHolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl StaticHolidayCalendar {
    /// Calendar over an explicit set of dates.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl Default for StaticHolidayCalendar {
    /// The built-in table.
    fn default() -> Self {
        Self::from_dates(
            BUILTIN_HOLIDAYS
                .iter()
                .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        )
    }
}

impl HolidayCalendar for StaticHolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn builtin_table_contains_known_holidays() {
        let cal = StaticHolidayCalendar::default();
        assert!(cal.is_holiday(date("2025-12-25")));
        assert!(cal.is_holiday(date("2026-01-01")));
        assert!(!cal.is_holiday(date("2025-12-24")));
    }

    #[test]
    fn injected_dates_behave_like_builtin_ones() {
        let cal = StaticHolidayCalendar::from_dates([date("2030-07-04")]);
        assert!(cal.is_holiday(date("2030-07-04")));
        assert!(!cal.is_holiday(date("2025-12-25")));
    }
}
