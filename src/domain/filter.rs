//! Query descriptions applied to transaction lists. Never persisted.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, TrackerError};
use crate::domain::common::{parse_date, DATE_FORMAT};
use crate::domain::transaction::TransactionType;

/// Type criterion; `All` imposes no constraint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn accepts(&self, kind: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => kind == TransactionType::Income,
            TypeFilter::Expense => kind == TransactionType::Expense,
        }
    }
}

impl From<TransactionType> for TypeFilter {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => TypeFilter::Income,
            TransactionType::Expense => TypeFilter::Expense,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TypeFilter::All => "all",
            TypeFilter::Income => "income",
            TypeFilter::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TypeFilter {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            other => other.parse::<TransactionType>().map(TypeFilter::from),
        }
    }
}

/// Inclusive calendar range. Bounds are kept as entered; a bound that does not
/// parse as a date constrains nothing on its side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        }
    }

    /// First through last day of the given calendar month.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self::new(first, next_first.pred_opt()?))
    }

    /// Parses a `YYYY-MM` month key into its full range.
    pub fn from_month_key(key: &str) -> Option<Self> {
        let first = NaiveDate::parse_from_str(&format!("{}-01", key.trim()), DATE_FORMAT).ok()?;
        Self::month(first.year(), first.month())
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        parse_date(&self.start)
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_date(&self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if matches!(self.start_date(), Some(start) if date < start) {
            return false;
        }
        if matches!(self.end_date(), Some(end) if date > end) {
            return false;
        }
        true
    }
}

/// Optional criteria, AND-combined by the filter engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, kind: TypeFilter) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Whether any criterion would actually narrow the list.
    pub fn is_active(&self) -> bool {
        let typed = matches!(self.kind, Some(kind) if kind != TypeFilter::All);
        let categorized = self.category.as_deref().is_some_and(|c| !c.is_empty());
        let searched = self.search.as_deref().is_some_and(|s| !s.is_empty());
        typed || categorized || searched || self.date_range.is_some()
    }
}
