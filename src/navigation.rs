//! Moving the selected date around. These are caller-side policies layered
//! on the pure engine: whole-month steps, jumping to a year and keeping the
//! selection inside the years the catalog knows about.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::types::split_date;
use crate::consts::{DECEMBER, JANUARY};
use crate::{HolidayCatalog, Month, Year, days_in_month};

/// Same day next month, clamped to that month's length (Jan 31 -> Feb 28).
pub fn next_month(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// Same day last month, clamped to that month's length.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    date.checked_sub_months(Months::new(1)).unwrap_or(date)
}

/// Today on the local wall clock.
pub fn go_to_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Same month and day in `year`, with Feb 29 becoming Feb 28 in common years.
pub fn select_year(date: NaiveDate, year: Year) -> NaiveDate {
    split_date(&date)
        .and_then(|(_, month, day)| clamped_date(year, month, day.get()))
        .unwrap_or(date)
}

/// Keeps `date` inside the catalog's supported years. Dates before the first
/// year move to January of that year, dates after the last year to
/// December of that year; the day is clamped to the month. Dates inside the
/// range, and any date when the catalog is empty, are returned unchanged.
pub fn clamp_to_supported(date: NaiveDate, catalog: &HolidayCatalog) -> NaiveDate {
    let (Some(first), Some(last)) = (catalog.first_year(), catalog.last_year()) else {
        return date;
    };

    let target = if date.year() < first.civil() {
        Month::new(JANUARY).ok().map(|january| (first, january))
    } else if date.year() > last.civil() {
        Month::new(DECEMBER).ok().map(|december| (last, december))
    } else {
        None
    };

    let Some((year, month)) = target else {
        return date;
    };

    tracing::debug!("Clamping {} into supported years {}-{}", date, first, last);
    let day = u8::try_from(date.day()).unwrap_or(1);
    clamped_date(year, month, day).unwrap_or(date)
}

fn clamped_date(year: Year, month: Month, day: u8) -> Option<NaiveDate> {
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year.civil(), u32::from(month.get()), u32::from(day))
}
