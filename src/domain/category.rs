//! Domain types representing transaction categories.

use serde::{Deserialize, Serialize};

use crate::domain::transaction::TransactionType;

/// A label available for tagging transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub color: String,
    pub icon: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: TransactionType,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            color: color.into(),
            icon: icon.into(),
        }
    }
}

const DEFAULTS: [(&str, &str, TransactionType, &str, &str); 11] = [
    ("1", "Salary", TransactionType::Income, "#10b981", "Briefcase"),
    ("2", "Freelance", TransactionType::Income, "#059669", "User"),
    ("3", "Investment", TransactionType::Income, "#047857", "TrendingUp"),
    ("4", "Other Income", TransactionType::Income, "#065f46", "Plus"),
    ("5", "Food & Dining", TransactionType::Expense, "#ef4444", "Utensils"),
    ("6", "Transportation", TransactionType::Expense, "#dc2626", "Car"),
    ("7", "Shopping", TransactionType::Expense, "#b91c1c", "ShoppingBag"),
    ("8", "Entertainment", TransactionType::Expense, "#991b1b", "Film"),
    ("9", "Bills & Utilities", TransactionType::Expense, "#7f1d1d", "Receipt"),
    ("10", "Healthcare", TransactionType::Expense, "#450a0a", "Heart"),
    ("11", "Other Expense", TransactionType::Expense, "#dc2626", "Minus"),
];

/// The category set written on first use.
pub fn default_categories() -> Vec<Category> {
    DEFAULTS
        .iter()
        .map(|(id, name, kind, color, icon)| Category::new(*id, *name, *kind, *color, *icon))
        .collect()
}
