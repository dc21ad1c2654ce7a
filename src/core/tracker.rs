use tracing::{debug, info, warn};

use crate::core::errors::{Result, TrackerError};
use crate::core::services::{
    CategoryTotal, FilterService, MonthlyData, Summary, SummaryService, TransactionService,
};
use crate::domain::{Category, FilterOptions, Transaction, TransactionDraft};
use crate::storage::RecordStore;

/// Chart inputs derived from one filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub category_totals: Vec<CategoryTotal>,
    pub monthly: Vec<MonthlyData>,
}

/// Facade that owns the working copy of transactions and categories and
/// persists every mutation through the [`RecordStore`].
pub struct Tracker {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    store: RecordStore,
    read_only: bool,
}

impl Tracker {
    /// Seeds the store if needed and loads both record lists. Fails with
    /// `CorruptData` when any stored transaction cannot be read, since the
    /// next write would replace it.
    pub fn open(store: RecordStore) -> Result<Self> {
        store.initialize()?;
        let categories = store.load_categories()?;
        let transactions = store.try_load_transactions()?;
        info!(
            transactions = transactions.len(),
            categories = categories.len(),
            "tracker opened"
        );
        Ok(Self {
            transactions,
            categories,
            store,
            read_only: false,
        })
    }

    /// Opens whatever can be read, skipping unreadable transactions. Every
    /// mutation is refused so the stored records are never rewritten.
    pub fn open_read_only(store: RecordStore) -> Result<Self> {
        store.initialize()?;
        let categories = store.load_categories()?;
        let transactions = store.load_transactions();
        debug!(transactions = transactions.len(), "tracker opened read-only");
        Ok(Self {
            transactions,
            categories,
            store,
            read_only: true,
        })
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        TransactionService::find(&self.transactions, id)
    }

    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let mut next = self.transactions.clone();
        let txn = TransactionService::add(&mut next, draft)?;
        self.commit(next)?;
        info!(id = %txn.id, kind = %txn.kind, "transaction added");
        Ok(txn)
    }

    pub fn update_transaction(&mut self, id: &str, draft: TransactionDraft) -> Result<Transaction> {
        let mut next = self.transactions.clone();
        let txn = TransactionService::update(&mut next, id, draft)?;
        self.commit(next)?;
        info!(id = %txn.id, "transaction updated");
        Ok(txn)
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<Transaction> {
        let mut next = self.transactions.clone();
        let removed = TransactionService::remove(&mut next, id)?;
        self.commit(next)?;
        info!(id = %removed.id, "transaction deleted");
        Ok(removed)
    }

    /// Transactions passing `filters`, in display order.
    pub fn view(&self, filters: &FilterOptions) -> Vec<Transaction> {
        FilterService::filter_all(&self.transactions, filters)
    }

    /// Balance figures over every transaction, regardless of filters.
    pub fn summary(&self) -> Summary {
        SummaryService::summarize(&self.transactions)
    }

    pub fn charts(&self, filters: &FilterOptions) -> ChartData {
        let view = self.view(filters);
        ChartData {
            category_totals: SummaryService::category_totals(&view),
            monthly: SummaryService::monthly_data(&view),
        }
    }

    // The in-memory copy only changes once the write has succeeded.
    fn commit(&mut self, next: Vec<Transaction>) -> Result<()> {
        if self.read_only {
            warn!("refusing to write transactions opened read-only");
            return Err(TrackerError::StorageUnavailable(
                "transactions were opened read-only".into(),
            ));
        }
        self.store.save_transactions(&next)?;
        debug!(count = next.len(), "transactions persisted");
        self.transactions = next;
        Ok(())
    }
}
