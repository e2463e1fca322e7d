use crate::bucketing::date_key;
use crate::models::{CalendarCell, CalendarDayCount};
use chrono::{Datelike, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Month grid starting on Sunday, flagging the current local day.
pub fn build_month_grid(year: i32, month: u32, day_counts: &[CalendarDayCount]) -> Vec<CalendarCell> {
    build_month_grid_with(
        year,
        month,
        day_counts,
        Weekday::Sun,
        Local::now().date_naive(),
    )
}

/// Leading blanks up to the weekday of the 1st, then one cell per day.
///
/// Days missing from `day_counts` get a count of 0. An out-of-range month
/// yields an empty grid.
pub fn build_month_grid_with(
    year: i32,
    month: u32,
    day_counts: &[CalendarDayCount],
    week_start: Weekday,
    today: NaiveDate,
) -> Vec<CalendarCell> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let Some(days) = days_in_month(year, month) else {
        return Vec::new();
    };

    let mut counts: HashMap<&str, u64> = HashMap::new();
    for entry in day_counts {
        let slot = counts.entry(entry.date.as_str()).or_default();
        *slot = slot.saturating_add(entry.count);
    }

    let leading = leading_blanks(first.weekday(), week_start);
    let mut cells = Vec::with_capacity((leading + days) as usize);
    cells.extend((0..leading).map(|_| CalendarCell::Blank));

    for date in first.iter_days().take(days as usize) {
        let key = date_key(date);
        let count = counts.get(key.as_str()).copied().unwrap_or(0);
        cells.push(CalendarCell::Day {
            day: date.day(),
            date: key,
            count,
            is_today: date == today,
        });
    }

    cells
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

fn leading_blanks(first: Weekday, week_start: Weekday) -> u32 {
    (7 + first.num_days_from_sunday() - week_start.num_days_from_sunday()) % 7
}

/// A displayed (year, month) with wrap-around navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day_cells(cells: &[CalendarCell]) -> usize {
        cells.iter().filter(|cell| !cell.is_blank()).count()
    }

    fn leading(cells: &[CalendarCell]) -> usize {
        cells.iter().take_while(|cell| cell.is_blank()).count()
    }

    #[test]
    fn leap_february_has_29_days() {
        let cells = build_month_grid_with(2024, 2, &[], Weekday::Sun, date(2024, 1, 1));
        assert_eq!(day_cells(&cells), 29);
        // 2024-02-01 is a Thursday
        assert_eq!(leading(&cells), 4);
        assert_eq!(cells.len(), 33);
    }

    #[test]
    fn days_in_month_follows_the_gregorian_rules() {
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2100, 2), Some(28));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn week_start_shifts_leading_blanks() {
        let today = date(2024, 1, 1);
        // 2024-09-01 is a Sunday
        let sunday = build_month_grid_with(2024, 9, &[], Weekday::Sun, today);
        let monday = build_month_grid_with(2024, 9, &[], Weekday::Mon, today);
        assert_eq!(leading(&sunday), 0);
        assert_eq!(leading(&monday), 6);
        assert_eq!(day_cells(&sunday), 30);
        assert_eq!(day_cells(&monday), 30);
    }

    #[test]
    fn counts_are_attached_and_missing_days_are_zero() {
        let counts = vec![
            CalendarDayCount {
                date: "2024-02-10".to_string(),
                count: 3,
            },
            CalendarDayCount {
                date: "2024-03-01".to_string(),
                count: 9,
            },
        ];
        let cells = build_month_grid_with(2024, 2, &counts, Weekday::Sun, date(2024, 2, 10));
        let days: Vec<_> = cells
            .iter()
            .filter_map(|cell| match cell {
                CalendarCell::Day {
                    day,
                    count,
                    is_today,
                    ..
                } => Some((*day, *count, *is_today)),
                CalendarCell::Blank => None,
            })
            .collect();
        assert_eq!(days[9], (10, 3, true));
        assert_eq!(days[0], (1, 0, false));
        assert_eq!(days.iter().map(|d| d.1).sum::<u64>(), 3);
        assert_eq!(days.last().map(|d| d.0), Some(29));
    }

    #[test]
    fn invalid_month_yields_empty_grid() {
        assert!(build_month_grid(2024, 0, &[]).is_empty());
        assert!(build_month_grid(2024, 13, &[]).is_empty());
    }

    #[test]
    fn cursor_wraps_across_years() {
        let december = MonthCursor::new(2024, 12).unwrap();
        assert_eq!(december.next(), MonthCursor { year: 2025, month: 1 });
        assert_eq!(december.next().previous(), december);
        assert_eq!(
            MonthCursor::new(2024, 1).unwrap().previous(),
            MonthCursor { year: 2023, month: 12 }
        );
        assert_eq!(MonthCursor::new(2024, 13), None);
        assert_eq!(
            MonthCursor::containing(date(2024, 7, 31)),
            MonthCursor { year: 2024, month: 7 }
        );
    }
}
