use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY, MONTH_NAMES, MONTHS_PER_YEAR,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Year from a chrono-style signed year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is outside `1..=MAX_YEAR`.
    /// Values that don't fit a `u16` are reported as 0 (below the range) or
    /// `u16::MAX` (above it).
    pub fn from_civil(value: i32) -> Result<Self, ParseError> {
        let narrowed = u16::try_from(value).unwrap_or(if value < 0 { 0 } else { u16::MAX });
        Self::new(narrowed)
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Returns the year as the signed value chrono works with
    #[inline]
    pub const fn civil(self) -> i32 {
        self.0.get() as i32
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
///
/// Holiday tables name months in English; the engine joins on this type
/// instead, converting once when a dataset is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Creates a Month from a 0-based index (0 = January, 11 = December)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the index is > 11.
    pub fn from_index(index: u8) -> Result<Self, ParseError> {
        let value = index
            .checked_add(1)
            .ok_or(ParseError::InvalidMonth(index))?;
        Self::new(value)
    }

    /// Looks up a month by its English name. The match is exact, as in the
    /// authored tables: `"January"` is accepted, `"january"` is not.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonthName` for anything else.
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        let position = MONTH_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .ok_or_else(|| ParseError::InvalidMonthName(name.to_owned()))?;
        // position < 12, so the cast and the index conversion both hold
        Self::from_index(position as u8)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the 0-based month index
    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }

    /// Returns the English month name
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    /// An out-of-range year or month is reported the same way.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            month,
            day: value,
            year,
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        let checked_year = Year::new(year).map_err(|_| invalid())?;
        let checked_month = Month::new(month).map_err(|_| invalid())?;

        if value > days_in_month(checked_year, checked_month) {
            return Err(invalid());
        }

        Ok(Self(non_zero))
    }

    /// Parses a string-encoded day number (`"17"`) and validates it for
    /// the given year and month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDayNumber` if the text is not a number,
    /// or `ParseError::InvalidDay` if the number doesn't fit the month.
    pub fn parse(text: &str, year: u16, month: u8) -> Result<Self, ParseError> {
        let value = text
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidDayNumber(text.to_owned()))?;
        Self::new(value, year, month)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month here, only the absolute range
        if !(MIN_DAY..=MAX_DAY).contains(&value) {
            return Err(ParseError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: Year, month: Month) -> u8 {
    if month.get() == FEBRUARY && is_leap_year(year.get()) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.get() as usize]
    }
}

/// Splits a chrono date into validated parts. `None` for years outside
/// `1..=MAX_YEAR`.
pub fn split_date(date: &impl Datelike) -> Option<(Year, Month, Day)> {
    let year = Year::from_civil(date.year()).ok()?;
    let month = Month::new(u8::try_from(date.month()).ok()?).ok()?;
    let day = Day::new(u8::try_from(date.day()).ok()?, year.get(), month.get()).ok()?;
    Some((year, month, day))
}

/// Moves a (year, month) pair by `delta` whole months.
/// Returns `None` if the result leaves `1..=MAX_YEAR`.
pub fn shift_month(year: Year, month: Month, delta: i32) -> Option<(Year, Month)> {
    let per_year = i32::from(MONTHS_PER_YEAR);
    let total = year.civil() * per_year + i32::from(month.index()) + delta;
    let shifted_year = Year::from_civil(total.div_euclid(per_year)).ok()?;
    let index = u8::try_from(total.rem_euclid(per_year)).ok()?;
    let shifted_month = Month::from_index(index).ok()?;
    Some((shifted_year, shifted_month))
}
