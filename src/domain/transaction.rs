//! Domain types representing recorded money movements.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::core::errors::{Result, TrackerError};
use crate::domain::common::{parse_date, DATE_FORMAT};

/// Direction of a transaction. The stored amount is always a magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(TrackerError::InvalidInput(format!(
                "unknown transaction type `{other}` (expected income or expense)"
            ))),
        }
    }
}

/// One recorded income or expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Materializes a draft, assigning a fresh id and creation timestamp.
    pub fn new(draft: TransactionDraft) -> Self {
        Self::from_draft(draft, Uuid::new_v4().to_string(), Utc::now())
    }

    pub fn from_draft(draft: TransactionDraft, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            description: draft.description,
            date: draft.date,
            created_at,
        }
    }

    /// Returns a copy carrying the draft's fields but this record's identity.
    pub fn replaced_with(&self, draft: TransactionDraft) -> Self {
        Self::from_draft(draft, self.id.clone(), self.created_at)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The amount with non-finite values collapsed to zero.
    pub fn magnitude(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount
        } else {
            0.0
        }
    }

    /// Positive for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.magnitude(),
            TransactionType::Expense => -self.magnitude(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// The `YYYY-MM` prefix of the stored date.
    pub fn month_key(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }
}

/// User-supplied fields of a transaction, before identity is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: f64,
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
    pub date: String,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionType,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            kind,
            category: category.into(),
            description: description.into(),
            date: date.format(DATE_FORMAT).to_string(),
        }
    }

    /// Seeds a draft from an existing record so single fields can be changed.
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            amount: txn.amount,
            kind: txn.kind,
            category: txn.category.clone(),
            description: txn.description.clone(),
            date: txn.date.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(TrackerError::InvalidInput(format!(
                "amount must be a non-negative number, got {}",
                self.amount
            )));
        }
        if self.category.trim().is_empty() {
            return Err(TrackerError::InvalidInput("category is required".into()));
        }
        if self.description.trim().is_empty() {
            return Err(TrackerError::InvalidInput("description is required".into()));
        }
        if NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).is_err() {
            return Err(TrackerError::InvalidInput(format!(
                "date `{}` must use the YYYY-MM-DD format",
                self.date
            )));
        }
        Ok(())
    }
}

/// Accepts numbers or numeric strings; anything else reads as zero.
fn lenient_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let amount = match value {
        Value::Number(number) => number.as_f64().unwrap_or(0.0),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if amount.is_finite() { amount } else { 0.0 })
}

/// Strings pass through, numbers keep their textual form, anything else reads as empty.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

/// RFC 3339 strings or epoch milliseconds; anything else reads as the Unix epoch.
fn lenient_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Value::deserialize(deserializer)? {
        Value::String(text) => DateTime::parse_from_rfc3339(text.trim())
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc)),
        Value::Number(number) => number
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    };
    Ok(parsed.unwrap_or_default())
}
