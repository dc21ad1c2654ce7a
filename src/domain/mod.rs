pub mod category;
pub mod common;
pub mod filter;
pub mod transaction;

pub use category::{default_categories, Category};
pub use common::{parse_date, DATE_FORMAT};
pub use filter::{DateRange, FilterOptions, TypeFilter};
pub use transaction::{Transaction, TransactionDraft, TransactionType};
