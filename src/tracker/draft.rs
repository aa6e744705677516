//! Form draft
//!
//! The unsaved text of the date and weight fields, and the checks that turn
//! it into a weight and a calendar date.

use crate::storage::ISO_DATE_FORMAT;
use crate::tracker::error::ValidationError;
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub date: String,
    pub weight: String,
}

impl Draft {
    /// Empty weight, date set to today in local time
    pub fn today() -> Self {
        Self {
            date: Local::now().date_naive().format(ISO_DATE_FORMAT).to_string(),
            weight: String::new(),
        }
    }

    /// Parse both fields
    ///
    /// Missing fields are reported before malformed ones.
    pub fn validate(&self) -> Result<(f64, NaiveDate), ValidationError> {
        let weight = self.weight.trim();
        let date = self.date.trim();

        if weight.is_empty() || date.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        let weight = weight
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or(ValidationError::InvalidWeight)?;
        let date = NaiveDate::parse_from_str(date, ISO_DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate)?;

        Ok((weight, date))
    }
}
