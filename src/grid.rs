use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::split_date;
use crate::{HolidayEntry, Month, days_in_month};

/// One position in a rendered month: either a real day of the month or a
/// leading placeholder (`day == 0`) that pads the 1st under its weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day:          u8,
    pub is_holiday:   bool,
    pub holiday_name: Option<String>,
    pub is_today:     bool,
    pub is_weekend:   bool,
}

impl DayCell {
    /// A padding cell with every flag cleared
    pub const fn placeholder() -> Self {
        Self {
            day:          0,
            is_holiday:   false,
            holiday_name: None,
            is_today:     false,
            is_weekend:   false,
        }
    }

    pub const fn is_placeholder(&self) -> bool {
        self.day == 0
    }
}

/// Lays out the month containing `date` as a Sunday-first grid.
///
/// The result starts with one placeholder per weekday before the 1st,
/// followed by one cell per day of the month. `holidays` is the holiday
/// list for `date`'s year (empty when the year has no table); only entries
/// for `date`'s month are consulted. When several entries cover the same
/// day, the first one in table order names the cell.
///
/// `today` marks the matching cell, compared by calendar date only.
/// Dates outside years 1-9999 produce an empty grid.
pub fn build_month_grid(date: NaiveDate, today: NaiveDate, holidays: &[HolidayEntry]) -> Vec<DayCell> {
    let (Some((year, month, _)), Some(first)) = (split_date(&date), date.with_day(1)) else {
        tracing::warn!("No grid for {}: year outside the supported range", date);
        return Vec::new();
    };

    let in_month = month_holidays(holidays, month);
    let leading = (0..first.weekday().num_days_from_sunday()).map(|_| DayCell::placeholder());
    let days = (1..=days_in_month(year, month))
        .zip(first.iter_days())
        .map(|(day, current)| {
            let holiday = in_month.iter().find(|entry| entry.covers(day));
            DayCell {
                day,
                is_holiday: holiday.is_some(),
                holiday_name: holiday.map(|entry| entry.name().to_owned()),
                is_today: current == today,
                is_weekend: matches!(current.weekday(), Weekday::Sat | Weekday::Sun),
            }
        });

    leading.chain(days).collect()
}

/// Entries falling in `month`, in table order. This is the list shown next
/// to the grid.
pub fn month_holidays(holidays: &[HolidayEntry], month: Month) -> Vec<&HolidayEntry> {
    holidays.iter().filter(|entry| entry.month() == month).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{builtin, date, month};

    const NEW_YEAR: &str = "နိုင်ငံတကာနှစ်သစ်ကူး";
    const LABOUR_DAY: &str = "အလုပ်သမားနေ့";

    fn real_days(cells: &[DayCell]) -> Vec<&DayCell> {
        cells.iter().filter(|c| !c.is_placeholder()).collect()
    }

    fn cell(cells: &[DayCell], day: u8) -> &DayCell {
        cells.iter().find(|c| c.day == day).unwrap()
    }

    #[test]
    fn test_grid_shape_matches_calendar() {
        for y in 2024..=2026 {
            for m in 1..=12 {
                let first = date(y, m, 1);
                let cells = build_month_grid(first, date(2000, 1, 1), &[]);

                let leading = first.weekday().num_days_from_sunday() as usize;
                let length = first
                    .checked_add_months(chrono::Months::new(1))
                    .unwrap()
                    .signed_duration_since(first)
                    .num_days() as usize;

                assert_eq!(cells.len(), leading + length, "{y}-{m:02}");
                assert!(cells[..leading].iter().all(|c| *c == DayCell::placeholder()));
                let days: Vec<u8> = cells[leading..].iter().map(|c| c.day).collect();
                assert_eq!(days, (1..=length as u8).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_february_lengths() {
        struct TestCase {
            year:     i32,
            expected: usize,
        }

        let cases = [
            TestCase {
                year:     2024,
                expected: 29,
            },
            TestCase {
                year:     2025,
                expected: 28,
            },
            TestCase {
                year:     2026,
                expected: 28,
            },
        ];

        for case in &cases {
            let cells = build_month_grid(date(case.year, 2, 10), date(2000, 1, 1), &[]);
            assert_eq!(real_days(&cells).len(), case.expected, "February {}", case.year);
        }
    }

    #[test]
    fn test_leading_placeholders() {
        // 2026-02-01 is a Sunday, 2025-11-01 a Saturday
        let feb = build_month_grid(date(2026, 2, 1), date(2000, 1, 1), &[]);
        assert_eq!(feb[0].day, 1);

        let nov = build_month_grid(date(2025, 11, 30), date(2000, 1, 1), &[]);
        assert_eq!(nov.iter().take_while(|c| c.is_placeholder()).count(), 6);
        assert_eq!(nov.len(), 36);
    }

    #[test]
    fn test_days_land_under_their_weekday() {
        struct TestCase {
            date:    NaiveDate,
            weekday: Weekday,
        }

        let cases = [
            TestCase {
                date:    date(2024, 1, 1),
                weekday: Weekday::Mon,
            },
            TestCase {
                date:    date(2024, 2, 29),
                weekday: Weekday::Thu,
            },
            TestCase {
                date:    date(2026, 1, 1),
                weekday: Weekday::Thu,
            },
            TestCase {
                date:    date(2026, 2, 1),
                weekday: Weekday::Sun,
            },
            TestCase {
                date:    date(2025, 11, 1),
                weekday: Weekday::Sat,
            },
            TestCase {
                date:    date(2000, 1, 1),
                weekday: Weekday::Sat,
            },
        ];

        for case in &cases {
            let cells = build_month_grid(case.date, date(1999, 1, 1), &[]);
            let day = u8::try_from(case.date.day()).unwrap();
            let column = cells.iter().position(|c| c.day == day).unwrap() % 7;
            assert_eq!(column as u32, case.weekday.num_days_from_sunday(), "{}", case.date);
            assert_eq!(
                cell(&cells, day).is_weekend,
                matches!(case.weekday, Weekday::Sat | Weekday::Sun),
                "{}",
                case.date
            );
        }
    }

    #[test]
    fn test_weekends() {
        // January 2026: the 3rd is a Saturday, the 4th a Sunday, the 5th a Monday
        let cells = build_month_grid(date(2026, 1, 15), date(2000, 1, 1), &[]);
        assert!(cell(&cells, 3).is_weekend);
        assert!(cell(&cells, 4).is_weekend);
        assert!(!cell(&cells, 5).is_weekend);
        assert_eq!(real_days(&cells).iter().filter(|c| c.is_weekend).count(), 9);
    }

    #[test]
    fn test_today_marks_one_cell() {
        let cells = build_month_grid(date(2026, 1, 1), date(2026, 1, 20), &[]);
        let today: Vec<u8> = cells.iter().filter(|c| c.is_today).map(|c| c.day).collect();
        assert_eq!(today, vec![20]);

        // Same day-of-month in another month is not today
        let cells = build_month_grid(date(2026, 2, 1), date(2026, 1, 20), &[]);
        assert!(cells.iter().all(|c| !c.is_today));

        // Same month in another year is not today either
        let cells = build_month_grid(date(2025, 1, 1), date(2026, 1, 20), &[]);
        assert!(cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_january_2026_holidays() {
        let cells = build_month_grid(date(2026, 1, 1), date(2000, 1, 1), builtin(2026).holidays());

        let first = cell(&cells, 1);
        assert!(first.is_holiday);
        assert_eq!(first.holiday_name.as_deref(), Some(NEW_YEAR));

        let fifth = cell(&cells, 5);
        assert!(!fifth.is_holiday);
        assert_eq!(fifth.holiday_name, None);

        let marked: Vec<u8> = cells.iter().filter(|c| c.is_holiday).map(|c| c.day).collect();
        assert_eq!(marked, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_overlapping_entries_first_match_wins() {
        // March 2026: two entries both cover the 27th and 28th
        let holidays = builtin(2026).holidays();
        let cells = build_month_grid(date(2026, 3, 1), date(2000, 1, 1), holidays);
        let march = month_holidays(holidays, month(3));

        assert_eq!(cell(&cells, 27).holiday_name.as_deref(), Some(march[0].name()));
        assert_eq!(cell(&cells, 28).holiday_name.as_deref(), Some(march[0].name()));
        assert_eq!(cell(&cells, 29).holiday_name.as_deref(), Some(march[1].name()));
    }

    #[test]
    fn test_membership_ignores_authored_day_order() {
        // The May 2026 entry is authored as ["1", "30", "2", "3"]. Marking the
        // grid treats the list as a set; the next-holiday scan does not (see
        // upcoming::tests::test_scan_follows_authored_day_order).
        let cells = build_month_grid(date(2026, 5, 1), date(2000, 1, 1), builtin(2026).holidays());
        for day in [1, 2, 3, 30] {
            let c = cell(&cells, day);
            assert!(c.is_holiday, "May {day}");
            assert_eq!(c.holiday_name.as_deref(), Some(LABOUR_DAY));
        }
        assert!(!cell(&cells, 4).is_holiday);
        assert!(!cell(&cells, 29).is_holiday);
    }

    #[test]
    fn test_empty_holidays_still_builds_grid() {
        let cells = build_month_grid(date(2030, 6, 1), date(2030, 6, 3), &[]);
        assert_eq!(real_days(&cells).len(), 30);
        assert!(cells.iter().all(|c| !c.is_holiday && c.holiday_name.is_none()));
        assert!(cell(&cells, 3).is_today);
    }

    #[test]
    fn test_other_years_table_is_filtered_by_month_only() {
        // The grid trusts the caller to pass the right year's table
        let cells = build_month_grid(date(2026, 12, 1), date(2000, 1, 1), builtin(2026).holidays());
        let marked: Vec<u8> = cells.iter().filter(|c| c.is_holiday).map(|c| c.day).collect();
        assert_eq!(marked, vec![4, 5, 6, 25, 26, 27]);
    }

    #[test]
    fn test_grid_is_idempotent() {
        let holidays = builtin(2025).holidays();
        let a = build_month_grid(date(2025, 4, 9), date(2025, 4, 14), holidays);
        let b = build_month_grid(date(2025, 4, 9), date(2025, 4, 14), holidays);
        assert_eq!(a, b);
    }

    #[test]
    fn test_month_holidays() {
        let holidays = builtin(2024).holidays();
        let november: Vec<&str> = month_holidays(holidays, month(11))
            .into_iter()
            .map(HolidayEntry::name)
            .collect();
        assert_eq!(november, vec!["တန်ဆောင်မုန်းလပြည့်နေ့", "အမျိုးသားနေ့"]);
        assert!(month_holidays(holidays, month(8)).is_empty());
    }

    #[test]
    fn test_grid_out_of_range_year() {
        let ancient = NaiveDate::from_ymd_opt(-1, 1, 1).unwrap();
        assert!(build_month_grid(ancient, date(2026, 1, 1), &[]).is_empty());
    }
}
