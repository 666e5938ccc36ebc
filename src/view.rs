use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::types::split_date;
use crate::{
    DayCell, HolidayCatalog, HolidayEntry, NextHoliday, SeasonTheme, Year, build_month_grid,
    current_theme, english_month_label, find_next_holiday, month_holidays, myanmar_month_label,
    to_myanmar_numerals,
};

/// Everything one page render needs, rebuilt from scratch whenever the
/// selected date changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub selected:        NaiveDate,
    /// `"January 2026"`
    pub english_label:   String,
    /// `"တန်ခူး 2026"`
    pub myanmar_label:   String,
    /// Selected year in Burmese digits
    pub year_numerals:   String,
    /// Years the year picker offers, ascending
    pub supported_years: Vec<Year>,
    pub cells:           Vec<DayCell>,
    /// Holidays of the selected month, in table order
    pub month_holidays:  Vec<HolidayEntry>,
    /// Countdown target, measured from `now` rather than the selection
    pub next_holiday:    Option<NextHoliday>,
    /// Theme for the selected month
    pub theme:           SeasonTheme,
}

impl CalendarView {
    /// Renders the month containing `selected`. `now` drives the today
    /// marker and the countdown.
    pub fn render(selected: NaiveDate, now: NaiveDateTime, catalog: &HolidayCatalog) -> Self {
        let parts = split_date(&selected);
        let holidays = parts
            .map(|(year, _, _)| catalog.holidays_for_year(year))
            .unwrap_or_default();
        let in_month = parts
            .map(|(_, month, _)| month_holidays(holidays, month))
            .unwrap_or_default();

        Self {
            selected,
            english_label: english_month_label(&selected),
            myanmar_label: myanmar_month_label(&selected),
            year_numerals: u32::try_from(selected.year())
                .map(to_myanmar_numerals)
                .unwrap_or_default(),
            supported_years: catalog.supported_years(),
            cells: build_month_grid(selected, now.date(), holidays),
            month_holidays: in_month.into_iter().cloned().collect(),
            next_holiday: find_next_holiday(now, catalog),
            theme: current_theme(&selected),
        }
    }

    /// [`Self::render`] against the local wall clock.
    pub fn render_now(selected: NaiveDate, catalog: &HolidayCatalog) -> Self {
        Self::render(selected, Local::now().naive_local(), catalog)
    }
}
