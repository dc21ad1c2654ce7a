//! Pure aggregations over transaction lists.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::transaction::Transaction;

/// Sum of amounts recorded under one category name.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Income and expense totals for one `YYYY-MM` month.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyData {
    pub month: String,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Figures shown on the balance cards.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Summary {
    pub balance: f64,
    pub total_income: f64,
    pub total_expenses: f64,
    pub transaction_count: usize,
}

pub struct SummaryService;

impl SummaryService {
    /// Income minus expenses.
    pub fn balance(transactions: &[Transaction]) -> f64 {
        transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn total_income(transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.is_income())
            .map(Transaction::magnitude)
            .sum()
    }

    pub fn total_expenses(transactions: &[Transaction]) -> f64 {
        transactions
            .iter()
            .filter(|txn| txn.is_expense())
            .map(Transaction::magnitude)
            .sum()
    }

    /// Groups by exact category name in first-seen order. Income and expense
    /// amounts under the same name are added together.
    pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut totals: Vec<CategoryTotal> = Vec::new();
        for txn in transactions {
            match index.get(txn.category.as_str()) {
                Some(&slot) => totals[slot].amount += txn.magnitude(),
                None => {
                    index.insert(txn.category.as_str(), totals.len());
                    totals.push(CategoryTotal {
                        category: txn.category.clone(),
                        amount: txn.magnitude(),
                    });
                }
            }
        }
        totals
    }

    /// Groups by the `YYYY-MM` prefix of each date in first-seen order.
    pub fn monthly_data(transactions: &[Transaction]) -> Vec<MonthlyData> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut months: Vec<MonthlyData> = Vec::new();
        for txn in transactions {
            let key = txn.month_key();
            let slot = *index.entry(key).or_insert_with(|| {
                months.push(MonthlyData {
                    month: key.to_string(),
                    income: 0.0,
                    expense: 0.0,
                    net: 0.0,
                });
                months.len() - 1
            });
            let entry = &mut months[slot];
            if txn.is_income() {
                entry.income += txn.magnitude();
            } else {
                entry.expense += txn.magnitude();
            }
        }
        for entry in &mut months {
            entry.net = entry.income - entry.expense;
        }
        months
    }

    pub fn summarize(transactions: &[Transaction]) -> Summary {
        Summary {
            balance: Self::balance(transactions),
            total_income: Self::total_income(transactions),
            total_expenses: Self::total_expenses(transactions),
            transaction_count: transactions.len(),
        }
    }
}
