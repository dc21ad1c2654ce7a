pub mod category_service;
pub mod filter_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::CategoryService;
pub use filter_service::FilterService;
pub use summary_service::{CategoryTotal, MonthlyData, Summary, SummaryService};
pub use transaction_service::TransactionService;
