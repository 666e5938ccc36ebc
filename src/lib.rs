//! Month grids, holiday countdowns and seasonal color themes for the
//! Myanmar public holiday calendar.
//!
//! Holiday tables are static, hand-authored per year. They are parsed once
//! into a [`HolidayCatalog`]; everything downstream is a pure function of a
//! date and that catalog:
//!
//! - [`build_month_grid`] lays out the day cells of one month,
//! - [`find_next_holiday`] scans ahead for the next observance,
//! - [`current_theme`] picks the seasonal palette,
//! - [`CalendarView`] bundles all of the above for one render pass.

mod consts;
mod data;
mod grid;
mod holiday;
mod labels;
mod navigation;
mod prelude;
mod season;
mod types;
mod upcoming;
mod view;

pub use consts::*;
pub use grid::{DayCell, build_month_grid, month_holidays};
pub use holiday::{
    DatasetError, HolidayCatalog, HolidayEntry, HolidaySource, RawHoliday, RawYearDataset,
    YearHolidayDataset,
};
pub use labels::{
    MYANMAR_MONTH_LABELS, WEEKDAY_LABELS, WEEKDAY_LABELS_MYANMAR, english_month_label,
    myanmar_month_label, to_myanmar_numerals,
};
pub use navigation::{clamp_to_supported, go_to_today, next_month, previous_month, select_year};
pub use season::{
    Rgb, Season, SeasonTheme, ThemeColors, current_theme, derive_season, derive_season_from_index,
    theme_for,
};
pub use types::{Day, Month, Year, days_in_month, is_leap_year, shift_month};
pub use upcoming::{NextHoliday, find_next_holiday, find_next_holiday_from_now};
pub use view::CalendarView;

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Unknown month name: {_0:?}")]
    InvalidMonthName(String),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Day number is not an integer: {_0:?}")]
    InvalidDayNumber(String),
    #[display(fmt = "Invalid hex color: {_0:?}")]
    InvalidColor(String),
}

impl std::error::Error for ParseError {}
