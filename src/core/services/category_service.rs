use crate::domain::category::Category;
use crate::domain::transaction::TransactionType;

/// Fallback list color for income rows without a known category.
pub const INCOME_FALLBACK_COLOR: &str = "#10b981";
/// Fallback list color for expense rows without a known category.
pub const EXPENSE_FALLBACK_COLOR: &str = "#ef4444";
/// Chart slice color for names that match no category.
pub const NEUTRAL_COLOR: &str = "#6b7280";

pub struct CategoryService;

impl CategoryService {
    /// Categories offered for a transaction of the given type.
    pub fn for_type(categories: &[Category], kind: TransactionType) -> Vec<&Category> {
        categories
            .iter()
            .filter(|category| category.kind == kind)
            .collect()
    }

    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        categories.iter().find(|category| category.name == name)
    }

    /// Color of the named category, falling back on the transaction type.
    pub fn color_for<'a>(categories: &'a [Category], name: &str, kind: TransactionType) -> &'a str {
        Self::find_by_name(categories, name)
            .map(|category| category.color.as_str())
            .unwrap_or(match kind {
                TransactionType::Income => INCOME_FALLBACK_COLOR,
                TransactionType::Expense => EXPENSE_FALLBACK_COLOR,
            })
    }

    /// Color of the named category for chart slices.
    pub fn chart_color<'a>(categories: &'a [Category], name: &str) -> &'a str {
        Self::find_by_name(categories, name)
            .map(|category| category.color.as_str())
            .unwrap_or(NEUTRAL_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::default_categories;

    #[test]
    fn for_type_partitions_defaults() {
        let categories = default_categories();
        assert_eq!(
            CategoryService::for_type(&categories, TransactionType::Income).len(),
            4
        );
        assert_eq!(
            CategoryService::for_type(&categories, TransactionType::Expense).len(),
            7
        );
    }

    #[test]
    fn colors_fall_back_for_unknown_names() {
        let categories = default_categories();
        assert_eq!(
            CategoryService::color_for(&categories, "Healthcare", TransactionType::Expense),
            "#450a0a"
        );
        assert_eq!(
            CategoryService::color_for(&categories, "Lottery", TransactionType::Income),
            INCOME_FALLBACK_COLOR
        );
        assert_eq!(CategoryService::chart_color(&categories, "Lottery"), NEUTRAL_COLOR);
    }
}
