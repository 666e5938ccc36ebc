use std::ops::Range;
use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::consts::HEX_COLOR_PREFIX;
use crate::prelude::*;
use crate::{Month, ParseError};

/// The three yearly seasons used for theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// November through February
    #[display(fmt = "cool")]
    Cool,
    /// March through May
    #[display(fmt = "hot")]
    Hot,
    /// June through October
    #[display(fmt = "rainy")]
    Rainy,
}

impl Season {
    pub const ALL: [Self; 3] = [Self::Cool, Self::Hot, Self::Rainy];
}

/// A four-color palette, each color a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub primary:    &'static str,
    pub secondary:  &'static str,
    pub background: &'static str,
    pub text:       &'static str,
}

impl ThemeColors {
    /// The palette parsed into RGB triples, in field order.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidColor` if any color isn't `#RRGGBB`.
    pub fn to_rgb(&self) -> Result<[Rgb; 4], ParseError> {
        Ok([
            self.primary.parse()?,
            self.secondary.parse()?,
            self.background.parse()?,
            self.text.parse()?,
        ])
    }
}

/// The theme for one season: display name plus palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonTheme {
    pub season: Season,
    pub name:   &'static str,
    pub colors: ThemeColors,
}

const COOL: SeasonTheme = SeasonTheme {
    season: Season::Cool,
    name:   "Cool & Crisp",
    colors: ThemeColors {
        primary:    "#1565C0",
        secondary:  "#42A5F5",
        background: "#FFFFFF",
        text:       "#1A1A1A",
    },
};

const HOT: SeasonTheme = SeasonTheme {
    season: Season::Hot,
    name:   "Warm & Energetic",
    colors: ThemeColors {
        primary:    "#FFB300",
        secondary:  "#FF8F00",
        background: "#FFF8E1",
        text:       "#3E2723",
    },
};

const RAINY: SeasonTheme = SeasonTheme {
    season: Season::Rainy,
    name:   "Lush & Calm",
    colors: ThemeColors {
        primary:    "#00695C",
        secondary:  "#26A69A",
        background: "#ECEFF1",
        text:       "#1A1A1A",
    },
};

/// Season of a month.
pub const fn derive_season(month: Month) -> Season {
    season_of_month_number(month.get() as u32)
}

/// March-May hot, June-October rainy, everything else cool.
const fn season_of_month_number(month: u32) -> Season {
    match month {
        3..=5 => Season::Hot,
        6..=10 => Season::Rainy,
        _ => Season::Cool,
    }
}

/// Season of a 0-based month index (0 = January).
///
/// # Errors
/// Returns `ParseError::InvalidMonth` if the index is > 11.
pub fn derive_season_from_index(index: u8) -> Result<Season, ParseError> {
    Month::from_index(index).map(derive_season)
}

pub const fn theme_for(season: Season) -> SeasonTheme {
    match season {
        Season::Cool => COOL,
        Season::Hot => HOT,
        Season::Rainy => RAINY,
    }
}

/// Theme for the month `date` falls in.
pub fn current_theme(date: &impl Datelike) -> SeasonTheme {
    theme_for(season_of_month_number(date.month()))
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "#{r:02X}{g:02X}{b:02X}")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl FromStr for Rgb {
    type Err = ParseError;

    /// Parses `#RRGGBB` or `RRGGBB`, either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidColor(s.to_owned());
        let hex = s.trim();
        let hex = hex.strip_prefix(HEX_COLOR_PREFIX).unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| invalid());
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_derive_season_by_index() {
        struct TestCase {
            index:    u8,
            name:     &'static str,
            expected: Season,
        }

        let cases = [
            TestCase {
                index:    0,
                name:     "January",
                expected: Season::Cool,
            },
            TestCase {
                index:    1,
                name:     "February",
                expected: Season::Cool,
            },
            TestCase {
                index:    2,
                name:     "March",
                expected: Season::Hot,
            },
            TestCase {
                index:    3,
                name:     "April",
                expected: Season::Hot,
            },
            TestCase {
                index:    4,
                name:     "May",
                expected: Season::Hot,
            },
            TestCase {
                index:    5,
                name:     "June",
                expected: Season::Rainy,
            },
            TestCase {
                index:    6,
                name:     "July",
                expected: Season::Rainy,
            },
            TestCase {
                index:    9,
                name:     "October",
                expected: Season::Rainy,
            },
            TestCase {
                index:    10,
                name:     "November",
                expected: Season::Cool,
            },
            TestCase {
                index:    11,
                name:     "December",
                expected: Season::Cool,
            },
        ];

        for case in &cases {
            assert_eq!(
                derive_season_from_index(case.index).unwrap(),
                case.expected,
                "{}",
                case.name
            );
        }
    }

    #[test]
    fn test_seasons_partition_the_year() {
        let mut counts = [0; 3];
        for index in 0..12 {
            let season = derive_season_from_index(index).unwrap();
            let slot = Season::ALL.iter().position(|s| *s == season).unwrap();
            counts[slot] += 1;
        }
        // Cool, Hot, Rainy
        assert_eq!(counts, [4, 3, 5]);
    }

    #[test]
    fn test_derive_season_rejects_bad_index() {
        assert!(matches!(
            derive_season_from_index(12),
            Err(ParseError::InvalidMonth(_))
        ));
    }

    #[test]
    fn test_theme_for_each_season() {
        assert_eq!(theme_for(Season::Cool).name, "Cool & Crisp");
        assert_eq!(theme_for(Season::Hot).name, "Warm & Energetic");
        assert_eq!(theme_for(Season::Rainy).name, "Lush & Calm");

        for season in Season::ALL {
            let theme = theme_for(season);
            assert_eq!(theme.season, season);
            assert!(theme.colors.to_rgb().is_ok(), "{season} palette");
        }
        assert_eq!(theme_for(Season::Hot).colors.primary, "#FFB300");
    }

    #[test]
    fn test_current_theme() {
        assert_eq!(current_theme(&date(2026, 1, 5)).season, Season::Cool);
        assert_eq!(current_theme(&date(2026, 4, 13)).season, Season::Hot);
        assert_eq!(current_theme(&date(2026, 7, 19)).season, Season::Rainy);
        assert_eq!(current_theme(&date(2025, 11, 1)).colors.background, "#FFFFFF");
    }

    #[test]
    fn test_current_theme_agrees_with_derive_season() {
        for m in 1..=12_u8 {
            let expected = derive_season(Month::new(m).unwrap());
            let theme = current_theme(&date(2026, u32::from(m), 15));
            assert_eq!(theme.season, expected, "month {m}");
            assert_eq!(theme, theme_for(expected));
        }
    }

    #[test]
    fn test_season_serde_and_display() {
        assert_eq!(serde_json::to_string(&Season::Rainy).unwrap(), "\"rainy\"");
        assert_eq!(serde_json::from_str::<Season>("\"hot\"").unwrap(), Season::Hot);
        assert_eq!(Season::Cool.to_string(), "cool");
    }

    #[test]
    fn test_rgb_from_str() {
        assert_eq!(
            "#1565C0".parse::<Rgb>().unwrap(),
            Rgb {
                r: 0x15,
                g: 0x65,
                b: 0xC0
            }
        );
        assert_eq!("ffb300".parse::<Rgb>().unwrap(), Rgb { r: 255, g: 179, b: 0 });
        assert_eq!(Rgb { r: 0, g: 105, b: 92 }.to_string(), "#00695C");

        for bad in ["", "#", "#12345", "#1234567", "#GG0000", "#+12345", "#fff"] {
            assert!(
                matches!(bad.parse::<Rgb>(), Err(ParseError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
