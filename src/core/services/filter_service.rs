//! Predicate evaluation for [`FilterOptions`].

use chrono::NaiveDate;

use crate::domain::{filter::FilterOptions, transaction::Transaction};

pub struct FilterService;

impl FilterService {
    /// Whether `txn` satisfies every criterion present in `filters`.
    pub fn matches(txn: &Transaction, filters: &FilterOptions) -> bool {
        if let Some(kind) = filters.kind {
            if !kind.accepts(txn.kind) {
                return false;
            }
        }

        if let Some(category) = filters.category.as_deref().filter(|c| !c.is_empty()) {
            if txn.category != category {
                return false;
            }
        }

        if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let in_description = txn.description.to_lowercase().contains(&needle);
            let in_category = txn.category.to_lowercase().contains(&needle);
            if !in_description && !in_category {
                return false;
            }
        }

        if let Some(range) = filters.date_range.as_ref() {
            // Unparseable dates sort before every real date.
            let date = txn.parsed_date().unwrap_or(NaiveDate::MIN);
            if !range.contains(date) {
                return false;
            }
        }

        true
    }

    /// The matching transactions, in input order.
    pub fn filter_all(transactions: &[Transaction], filters: &FilterOptions) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| Self::matches(txn, filters))
            .cloned()
            .collect()
    }
}
