//! SerialDate — the opaque day-serial identifier carried by every bar.
//!
//! Ordering and equality always use the raw serial; the calendar rendering
//! exists for report display only.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day-serial date as stored in the input table.
///
/// Serial 1 maps to 1900-01-01 in the originating spreadsheet convention,
/// which counts a phantom 1900-02-29. Anchoring the epoch at 1899-12-30
/// absorbs that extra day for every date after February 1900.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SerialDate(pub i64);

impl SerialDate {
    /// Calendar date for this serial.
    pub fn to_naive_date(self) -> NaiveDate {
        epoch() + Duration::days(self.0)
    }

    /// `DD-Mon-YY` presentation string.
    pub fn display(self) -> String {
        self.to_naive_date().format("%d-%b-%y").to_string()
    }
}

impl fmt::Display for SerialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("fixed epoch date is valid")
}
