//! Issue dates in `YYYYMMDD` form.

use crate::error::{LicenseError, LicenseResult};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of characters in an encoded issue date.
pub const DATE_LEN: usize = 8;

/// A UTC calendar date encoded as exactly eight ASCII digits.
///
/// Dates parsed out of a candidate key are only checked for shape, not for
/// calendar validity: the verifier signs whatever digits the key carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueDate(String);

impl IssueDate {
    /// Returns today's date in UTC.
    #[must_use]
    pub fn today() -> Self {
        let now = Utc::now().date_naive();
        Self(format!("{:04}{:02}{:02}", now.year(), now.month(), now.day()))
    }

    /// Creates a date from calendar components.
    ///
    /// # Errors
    ///
    /// Returns an error if the components do not name a real date or the year
    /// does not fit in four digits.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> LicenseResult<Self> {
        if !(0..=9999).contains(&year) || NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(LicenseError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02} is not a calendar date"
            )));
        }
        Ok(Self(format!("{year:04}{month:02}{day:02}")))
    }

    /// Parses an 8-digit date string.
    ///
    /// # Errors
    ///
    /// Returns an error unless `text` is exactly eight ASCII digits.
    pub fn parse(text: &str) -> LicenseResult<Self> {
        if text.len() != DATE_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LicenseError::InvalidDate(format!(
                "expected {DATE_LEN} digits, got {text:?}"
            )));
        }
        Ok(Self(text.to_owned()))
    }

    /// Returns the date as its 8-digit string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the digits as a calendar date, if they form one.
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let year = self.0[0..4].parse().ok()?;
        let month = self.0[4..6].parse().ok()?;
        let day = self.0[6..8].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl fmt::Display for IssueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IssueDate {
    type Err = LicenseError;

    fn from_str(s: &str) -> LicenseResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IssueDate {
    type Error = LicenseError;

    fn try_from(value: String) -> LicenseResult<Self> {
        Self::parse(&value)
    }
}

impl From<IssueDate> for String {
    fn from(date: IssueDate) -> Self {
        date.0
    }
}
