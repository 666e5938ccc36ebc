//! Holiday tables shipped with the crate, embedded in their authored JSON
//! shape. To ship another year, drop a `holidays-YYYY.json` next to the
//! others and list it here.

use crate::{DatasetError, HolidayCatalog, RawYearDataset, YearHolidayDataset};

pub(crate) const BUILTIN_DATASETS: [(&str, &str); 3] = [
    ("holidays-2024.json", include_str!("../data/holidays-2024.json")),
    ("holidays-2025.json", include_str!("../data/holidays-2025.json")),
    ("holidays-2026.json", include_str!("../data/holidays-2026.json")),
];

/// Parses every embedded table. A table that fails to load is logged and
/// left out; the rest of the catalog still loads.
pub(crate) fn load_builtin() -> HolidayCatalog {
    let mut catalog = HolidayCatalog::new();

    for (file, json) in BUILTIN_DATASETS {
        let loaded = serde_json::from_str::<RawYearDataset>(json)
            .map_err(DatasetError::from)
            .and_then(|raw| YearHolidayDataset::from_raw(&raw))
            .and_then(|dataset| catalog.insert(dataset));

        if let Err(error) = loaded {
            tracing::error!("Built-in holiday table {} failed to load: {}", file, error);
        }
    }

    tracing::debug!(
        "Loaded built-in holiday tables for {}",
        catalog
            .supported_years()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    catalog
}
