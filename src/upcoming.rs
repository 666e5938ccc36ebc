use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::consts::{LOOKAHEAD_MONTHS, MILLIS_PER_DAY};
use crate::types::split_date;
use crate::{HolidaySource, shift_month};

/// The first holiday day found after "now", for the countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextHoliday {
    pub name:       String,
    pub date:       NaiveDate,
    /// Whole days until the holiday starts, rounded up. Always >= 1.
    pub days_until: i64,
}

/// Finds the next holiday day starting strictly after `now`.
///
/// Scans the current month and the twelve after it. Each scanned month is
/// looked up in its own year's table, so a scan that crosses New Year
/// continues into the next year's holidays, or finds nothing there if
/// `source` has no table for it.
///
/// Within a month the scan goes entry by entry, and within an entry through
/// the day numbers in the order they were authored. The first candidate
/// later than `now` wins, even if a later entry or a later-listed day is
/// chronologically earlier.
pub fn find_next_holiday<S>(now: NaiveDateTime, source: &S) -> Option<NextHoliday>
where
    S: HolidaySource + ?Sized,
{
    let (year, month, _) = split_date(&now.date())?;

    for offset in 0..=LOOKAHEAD_MONTHS {
        let Some((scan_year, scan_month)) = shift_month(year, month, i32::from(offset)) else {
            break;
        };
        let Some(dataset) = source.dataset_for_year(scan_year) else {
            continue;
        };

        for entry in dataset.entries_for(scan_month) {
            for day in entry.days() {
                let Some(candidate) = NaiveDate::from_ymd_opt(
                    scan_year.civil(),
                    u32::from(scan_month.get()),
                    u32::from(day.get()),
                ) else {
                    continue;
                };

                let starts = candidate.and_time(NaiveTime::MIN);
                if starts > now {
                    let millis = starts.signed_duration_since(now).num_milliseconds();
                    return Some(NextHoliday {
                        name:       entry.name().to_owned(),
                        date:       candidate,
                        days_until: (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY,
                    });
                }
            }
        }
    }

    None
}

/// [`find_next_holiday`] from the local wall clock.
pub fn find_next_holiday_from_now<S>(source: &S) -> Option<NextHoliday>
where
    S: HolidaySource + ?Sized,
{
    find_next_holiday(Local::now().naive_local(), source)
}
