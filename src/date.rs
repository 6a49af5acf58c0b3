use serde::{Deserialize, Serialize};

/// A calendar date in the proleptic Gregorian calendar.
///
/// The engine does no timezone or time-of-day math; schedule inputs
/// arrive as whole days and all offset math runs on day numbers
/// relative to 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Days since 1970-01-01 (Howard Hinnant's civil-from-days family).
    pub fn day_number(self) -> i64 {
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let m = i64::from(self.month);
        let d = i64::from(self.day);
        let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719468
    }

    pub fn from_day_number(days: i64) -> Self {
        let z = days + 719468;
        let era = if z >= 0 { z } else { z - 146096 } / 146097;
        let doe = z - era * 146097;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
        let y = yoe + era * 400;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let d = doy - (153 * mp + 2) / 5 + 1;
        let m = mp + if mp < 10 { 3 } else { -9 };
        Self {
            year: (y + i64::from(m <= 2)) as i32,
            month: m as u32,
            day: d as u32,
        }
    }

    pub fn add_days(self, days: i64) -> Self {
        Self::from_day_number(self.day_number() + days)
    }

    /// Calendar-aware month shift. The day of month is clamped to the
    /// target month's length, so Jan 31 + 1 month = Feb 28 (or 29).
    pub fn add_months(self, months: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + months;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        let day = self.day.min(days_in_month(year, month));
        Self::new(year, month, day)
    }

    pub fn add_years(self, years: i32) -> Self {
        let year = self.year + years;
        Self::new(year, self.month, self.day.min(days_in_month(year, self.month)))
    }

    pub fn format_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_number_round_trips() {
        let dates = [
            CivilDate::new(1970, 1, 1),
            CivilDate::new(2000, 2, 29),
            CivilDate::new(2025, 1, 6),
            CivilDate::new(1899, 12, 31),
        ];
        for date in dates {
            assert_eq!(CivilDate::from_day_number(date.day_number()), date);
        }
        assert_eq!(CivilDate::new(1970, 1, 1).day_number(), 0);
    }

    #[test]
    fn month_arithmetic_clamps_day() {
        let jan31 = CivilDate::new(2025, 1, 31);
        assert_eq!(jan31.add_months(1), CivilDate::new(2025, 2, 28));
        assert_eq!(jan31.add_months(13), CivilDate::new(2026, 2, 28));
        let dec = CivilDate::new(2024, 12, 15);
        assert_eq!(dec.add_months(1), CivilDate::new(2025, 1, 15));
        assert_eq!(dec.add_months(-12), CivilDate::new(2023, 12, 15));
    }

    #[test]
    fn year_arithmetic_handles_leap_day() {
        let leap = CivilDate::new(2024, 2, 29);
        assert_eq!(leap.add_years(1), CivilDate::new(2025, 2, 28));
        assert_eq!(leap.add_years(4), CivilDate::new(2028, 2, 29));
    }

    #[test]
    fn iso_formatting() {
        assert_eq!(CivilDate::new(2025, 1, 6).format_iso(), "2025-01-06");
        assert_eq!(CivilDate::new(800, 12, 1).format_iso(), "0800-12-01");
    }
}
