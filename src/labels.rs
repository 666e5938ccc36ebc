//! Fixed display strings: weekday headers, the static Burmese month labels
//! and Burmese digits.
//!
//! The Burmese month labels are plain per-calendar-month names. They are not
//! derived from the lunar calendar.

use chrono::Datelike;

use crate::Month;
use crate::consts::MONTH_NAMES;

/// Sunday-first weekday headers
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Sunday-first weekday headers in Burmese
pub const WEEKDAY_LABELS_MYANMAR: [&str; 7] = [
    "တနင်္ဂနွေ",
    "တနင်္လာ",
    "အင်္ဂါ",
    "ဗုဒ္ဓဟူး",
    "ကြာသပတေး",
    "သောကြာ",
    "စနေ",
];

/// Burmese label per calendar month, index 0 is January
pub const MYANMAR_MONTH_LABELS: [&str; 12] = [
    "တန်ခူး",
    "ကဆုန်",
    "နယုန်",
    "ဝါဆို",
    "ဝါခေါင်",
    "တော်သလင်း",
    "သီတင်းကျွတ်",
    "တန်ဆောင်မုန်း",
    "နတ်တော်",
    "ပြာသို",
    "တပေါင်း",
    "တပေါင်းလမ်း",
];

const MYANMAR_DIGITS: [char; 10] = ['၀', '၁', '၂', '၃', '၄', '၅', '၆', '၇', '၈', '၉'];

impl Month {
    /// Static Burmese label for this calendar month
    pub const fn myanmar_label(self) -> &'static str {
        MYANMAR_MONTH_LABELS[self.index() as usize]
    }
}

/// Writes a number with Burmese digits: `2026` becomes `၂၀၂၆`.
pub fn to_myanmar_numerals(value: u32) -> String {
    value
        .to_string()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map_or(c, |digit| MYANMAR_DIGITS[digit as usize])
        })
        .collect()
}

/// `"January 2026"`
pub fn english_month_label(date: &impl Datelike) -> String {
    // month0() is always below 12
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}

/// `"တန်ခူး 2026"`
pub fn myanmar_month_label(date: &impl Datelike) -> String {
    format!("{} {}", MYANMAR_MONTH_LABELS[date.month0() as usize], date.year())
}
