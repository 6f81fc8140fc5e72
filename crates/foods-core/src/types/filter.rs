//! Single-field equality filtering for list endpoints.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;
use crate::traits::record::Record;

/// "Match where field `key` equals `value`". No compound predicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPredicate {
    /// Field name.
    pub key: String,
    /// Exact value the field must hold.
    pub value: String,
}

impl SearchPredicate {
    /// Create a new predicate.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether the record's field equals the predicate value.
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        record.field(&self.key) == Some(self.value.as_str())
    }
}

/// Outcome of applying a [`FilterPolicy`] to a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSelection {
    /// The wildcard was requested: fetch everything.
    All,
    /// Fetch only records matching the predicate.
    Matching(SearchPredicate),
}

/// The list filter accepted by one resource type.
///
/// The query parameter named `key` must be one of `allowed` or the
/// `wildcard`; an absent parameter means the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPolicy {
    /// Query parameter and record field name.
    pub key: &'static str,
    /// Accepted field values.
    pub allowed: &'static [&'static str],
    /// Value meaning "no filter".
    pub wildcard: &'static str,
}

impl FilterPolicy {
    /// Validate a raw query value and decide how to fetch.
    pub fn select(&self, raw: Option<&str>) -> AppResult<FilterSelection> {
        let value = match raw {
            Some(v) if !v.is_empty() => v,
            _ => self.wildcard,
        };

        if value == self.wildcard {
            return Ok(FilterSelection::All);
        }

        if !self.allowed.contains(&value) {
            return Err(AppError::validation(
                format!("Wrong {}", self.key),
                format!("Non existing {}", self.key),
            ));
        }

        Ok(FilterSelection::Matching(SearchPredicate::new(self.key, value)))
    }
}
