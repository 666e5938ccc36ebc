use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::Read;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::{Day, Month, ParseError, Year, data};

static BUILTIN: LazyLock<HolidayCatalog> = LazyLock::new(data::load_builtin);

/// One holiday in the shape it is authored in: English month name,
/// display name, string-encoded day numbers and a declared day count.
///
/// ```json
/// { "month": "May", "name": "...", "dates": ["1", "2"], "total_days": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHoliday {
    pub month:      String,
    pub name:       String,
    pub dates:      Vec<String>,
    pub total_days: u32,
}

/// A full year of [`RawHoliday`]s, as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawYearDataset {
    pub year:     u16,
    pub holidays: Vec<RawHoliday>,
}

/// A JSON document holds either a single year or a list of years.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    One(RawYearDataset),
    Many(Vec<RawYearDataset>),
}

/// Error type for loading holiday tables.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// An entry names an unknown month or a day that doesn't exist.
    #[error("Holiday table {year}, entry #{index} ({name}): {source}")]
    InvalidEntry {
        year:   u16,
        index:  usize,
        name:   String,
        source: ParseError,
    },

    /// The dataset's own year is out of range.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Two datasets claim the same year.
    #[error("Holiday table for {0} is already registered")]
    DuplicateYear(Year),

    /// The document isn't valid JSON in the dataset shape.
    #[error("Malformed holiday table: {0}")]
    Json(#[from] serde_json::Error),
}

/// One named holiday within a year: the month it falls in and every day of
/// that month it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayEntry {
    month:      Month,
    name:       String,
    days:       Vec<Day>,
    total_days: u32,
}

impl HolidayEntry {
    /// Converts an authored entry, validating the month name and every day
    /// number against `year`.
    ///
    /// A `total_days` that disagrees with the day list is kept as declared
    /// and logged; it only ever feeds display.
    ///
    /// # Errors
    /// Returns `ParseError` for an unknown month name, a non-numeric day or a
    /// day that doesn't exist in that month.
    pub fn from_raw(raw: &RawHoliday, year: Year) -> Result<Self, ParseError> {
        let month = Month::from_name(&raw.month)?;

        let mut days: Vec<Day> = Vec::with_capacity(raw.dates.len());
        for text in &raw.dates {
            let day = Day::parse(text, year.get(), month.get())?;
            if days.contains(&day) {
                tracing::warn!(
                    "Holiday '{}' ({} {}) lists day {} more than once",
                    raw.name,
                    raw.month,
                    year,
                    day
                );
                continue;
            }
            days.push(day);
        }

        if !days.is_sorted() {
            tracing::debug!(
                "Holiday '{}' ({} {}) lists its days out of order: {:?}",
                raw.name,
                raw.month,
                year,
                raw.dates
            );
        }

        if usize::try_from(raw.total_days).ok() != Some(raw.dates.len()) {
            tracing::warn!(
                "Holiday '{}' ({} {}) declares total_days = {} but lists {} dates",
                raw.name,
                raw.month,
                year,
                raw.total_days,
                raw.dates.len()
            );
        }

        Ok(Self {
            month,
            name: raw.name.clone(),
            days,
            total_days: raw.total_days,
        })
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Day numbers in authored order, duplicates removed.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// The day count as authored. See [`Self::day_count`] for the real one.
    pub const fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Whether this holiday covers `day` of its month. Order-independent.
    pub fn covers(&self, day: u8) -> bool {
        self.days.iter().any(|d| d.get() == day)
    }
}

/// Every holiday of one calendar year, in authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearHolidayDataset {
    year:     Year,
    holidays: Vec<HolidayEntry>,
}

impl YearHolidayDataset {
    pub const fn new(year: Year, holidays: Vec<HolidayEntry>) -> Self {
        Self { year, holidays }
    }

    /// Parses an authored year at the load boundary.
    ///
    /// # Errors
    /// Returns `DatasetError::ParseError` for an invalid year, or
    /// `DatasetError::InvalidEntry` naming the first bad entry.
    pub fn from_raw(raw: &RawYearDataset) -> Result<Self, DatasetError> {
        let year = Year::new(raw.year)?;
        let holidays = raw
            .holidays
            .iter()
            .enumerate()
            .map(|(index, holiday)| {
                HolidayEntry::from_raw(holiday, year).map_err(|source| DatasetError::InvalidEntry {
                    year: raw.year,
                    index,
                    name: holiday.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(year, holidays))
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub fn holidays(&self) -> &[HolidayEntry] {
        &self.holidays
    }

    /// Entries falling in `month`, in authored order.
    pub fn entries_for(&self, month: Month) -> impl Iterator<Item = &HolidayEntry> {
        self.holidays.iter().filter(move |h| h.month == month)
    }
}

/// Anything that can hand out the holiday table for a given year.
pub trait HolidaySource {
    /// Returns the table for `year`, or `None` if there isn't one.
    fn dataset_for_year(&self, year: Year) -> Option<&YearHolidayDataset>;
}

impl HolidaySource for YearHolidayDataset {
    /// A lone dataset only ever answers for its own year.
    fn dataset_for_year(&self, year: Year) -> Option<&YearHolidayDataset> {
        (self.year == year).then_some(self)
    }
}

impl HolidaySource for HolidayCatalog {
    fn dataset_for_year(&self, year: Year) -> Option<&YearHolidayDataset> {
        self.datasets.get(&year)
    }
}

impl<T: HolidaySource + ?Sized> HolidaySource for &T {
    fn dataset_for_year(&self, year: Year) -> Option<&YearHolidayDataset> {
        (**self).dataset_for_year(year)
    }
}

/// Holiday tables keyed by year.
///
/// Read-only once built; share it by reference. Adding a year means
/// registering one more dataset, either with [`Self::with_dataset`] or by
/// loading it from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCatalog {
    datasets: BTreeMap<Year, YearHolidayDataset>,
}

impl HolidayCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tables shipped with the crate, parsed once per process.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Registers one more year.
    ///
    /// # Errors
    /// Returns `DatasetError::DuplicateYear` if the year is already present.
    pub fn with_dataset(mut self, dataset: YearHolidayDataset) -> Result<Self, DatasetError> {
        self.insert(dataset)?;
        Ok(self)
    }

    pub(crate) fn insert(&mut self, dataset: YearHolidayDataset) -> Result<(), DatasetError> {
        match self.datasets.entry(dataset.year) {
            Entry::Occupied(existing) => Err(DatasetError::DuplicateYear(*existing.key())),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    "Registered holiday table for {} ({} entries)",
                    dataset.year,
                    dataset.holidays.len()
                );
                slot.insert(dataset);
                Ok(())
            }
        }
    }

    /// Builds a catalog from a JSON document holding one dataset object or an
    /// array of them.
    ///
    /// # Errors
    /// Returns `DatasetError` if the JSON is malformed, any entry is invalid
    /// or a year appears twice.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Same as [`Self::from_json_str`], reading from `reader`.
    ///
    /// # Errors
    /// See [`Self::from_json_str`].
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Self::from_document(serde_json::from_reader(reader)?)
    }

    fn from_document(document: RawDocument) -> Result<Self, DatasetError> {
        let raws = match document {
            RawDocument::One(raw) => vec![raw],
            RawDocument::Many(raws) => raws,
        };

        let mut catalog = Self::new();
        for raw in &raws {
            catalog.insert(YearHolidayDataset::from_raw(raw)?)?;
        }
        Ok(catalog)
    }

    /// Years with a table, ascending.
    pub fn supported_years(&self) -> Vec<Year> {
        self.datasets.keys().copied().collect()
    }

    /// The table for `year`. `None` just means no holidays are known.
    pub fn dataset_for_year(&self, year: Year) -> Option<&YearHolidayDataset> {
        self.datasets.get(&year)
    }

    /// Holidays for `year`, empty if the year isn't in the catalog.
    pub fn holidays_for_year(&self, year: Year) -> &[HolidayEntry] {
        self.dataset_for_year(year)
            .map(YearHolidayDataset::holidays)
            .unwrap_or_default()
    }

    pub fn first_year(&self) -> Option<Year> {
        self.datasets.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<Year> {
        self.datasets.keys().next_back().copied()
    }

    /// Clamps `year` into `first_year..=last_year`. Years between two
    /// supported ones are left alone. `None` for an empty catalog.
    pub fn clamp_year(&self, year: Year) -> Option<Year> {
        let first = self.first_year()?;
        let last = self.last_year()?;
        Some(year.clamp(first, last))
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }
}
