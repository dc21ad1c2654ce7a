//! Business logic helpers for managing transactions.

use crate::core::errors::{Result, TrackerError};
use crate::domain::transaction::{Transaction, TransactionDraft};

/// Provides validated CRUD helpers over an in-memory transaction list.
pub struct TransactionService;

impl TransactionService {
    /// Validates the draft, inserts it at the front, and returns the new record.
    pub fn add(transactions: &mut Vec<Transaction>, draft: TransactionDraft) -> Result<Transaction> {
        draft.validate()?;
        let txn = Transaction::new(draft);
        transactions.insert(0, txn.clone());
        Ok(txn)
    }

    /// Replaces the fields of the transaction identified by `id`, keeping its id,
    /// creation time, and position.
    pub fn update(
        transactions: &mut [Transaction],
        id: &str,
        draft: TransactionDraft,
    ) -> Result<Transaction> {
        draft.validate()?;
        let slot = transactions
            .iter_mut()
            .find(|txn| txn.id == id)
            .ok_or_else(|| TrackerError::TransactionNotFound(id.to_string()))?;
        *slot = slot.replaced_with(draft);
        Ok(slot.clone())
    }

    /// Removes the transaction identified by `id`, returning the removed instance.
    pub fn remove(transactions: &mut Vec<Transaction>, id: &str) -> Result<Transaction> {
        let position = transactions
            .iter()
            .position(|txn| txn.id == id)
            .ok_or_else(|| TrackerError::TransactionNotFound(id.to_string()))?;
        Ok(transactions.remove(position))
    }

    pub fn find<'a>(transactions: &'a [Transaction], id: &str) -> Option<&'a Transaction> {
        transactions.iter().find(|txn| txn.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionType;
    use chrono::NaiveDate;

    fn draft(amount: f64, description: &str) -> TransactionDraft {
        TransactionDraft::new(
            TransactionType::Expense,
            amount,
            "Shopping",
            description,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
    }

    #[test]
    fn add_inserts_newest_first() {
        let mut txns = Vec::new();
        let first = TransactionService::add(&mut txns, draft(1.0, "first")).unwrap();
        let second = TransactionService::add(&mut txns, draft(2.0, "second")).unwrap();
        assert_eq!(txns[0].id, second.id);
        assert_eq!(txns[1].id, first.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn add_rejects_invalid_draft() {
        let mut txns = Vec::new();
        assert!(TransactionService::add(&mut txns, draft(-3.0, "refund")).is_err());
        assert!(txns.is_empty());
    }

    #[test]
    fn update_fails_for_missing_transaction() {
        let mut txns = Vec::new();
        let err = TransactionService::update(&mut txns, "missing", draft(1.0, "x"))
            .expect_err("update must fail for unknown id");
        assert!(
            matches!(err, TrackerError::TransactionNotFound(ref id) if id == "missing"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn update_replaces_in_place() {
        let mut txns = Vec::new();
        let older = TransactionService::add(&mut txns, draft(1.0, "older")).unwrap();
        TransactionService::add(&mut txns, draft(2.0, "newer")).unwrap();

        let updated =
            TransactionService::update(&mut txns, &older.id, draft(9.0, "older, fixed")).unwrap();
        assert_eq!(updated.id, older.id);
        assert_eq!(updated.created_at, older.created_at);
        assert_eq!(txns[1], updated);
        assert_eq!(txns[1].amount, 9.0);
    }

    #[test]
    fn remove_returns_deleted_transaction() {
        let mut txns = Vec::new();
        let txn = TransactionService::add(&mut txns, draft(4.0, "gone")).unwrap();
        let removed = TransactionService::remove(&mut txns, &txn.id).unwrap();
        assert_eq!(removed.id, txn.id);
        assert!(TransactionService::find(&txns, &txn.id).is_none());
        assert!(TransactionService::remove(&mut txns, &txn.id).is_err());
    }
}
