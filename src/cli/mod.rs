//! Command-line front end over the [`Tracker`](crate::core::Tracker).

pub mod commands;
pub mod output;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::core::errors::{Result, TrackerError};
use crate::domain::{DateRange, FilterOptions, TransactionType, TypeFilter, DATE_FORMAT};

pub use commands::run;

#[derive(Parser, Debug)]
#[command(
    name = "expense_tracker_cli",
    version,
    about = "Record income and expenses, then review balances, lists, and charts."
)]
pub struct Cli {
    /// Directory holding the transaction and category records
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new transaction.
    Add {
        /// income or expense
        #[arg(long = "type")]
        kind: TransactionType,
        /// Positive amount; the type decides the sign
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: String,
        /// Date the money moved (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Change fields of an existing transaction, keeping its id.
    Edit {
        id: String,
        #[arg(long = "type")]
        kind: Option<TransactionType>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a transaction by id.
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// List transactions, newest first.
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Show balance, total income, and total expenses.
    Summary,
    /// Show the category breakdown and monthly series.
    Charts {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// List the available categories.
    Categories {
        #[arg(long = "type")]
        kind: Option<TransactionType>,
    },
}

impl Commands {
    /// Whether the command changes the stored transactions.
    pub fn writes(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. } | Commands::Edit { .. } | Commands::Delete { .. }
        )
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// all, income, or expense
    #[arg(long = "type")]
    pub kind: Option<TypeFilter>,
    /// Exact category name
    #[arg(long)]
    pub category: Option<String>,
    /// Case-insensitive text found in the description or category
    #[arg(long)]
    pub search: Option<String>,
    /// Calendar month (YYYY-MM)
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub month: Option<String>,
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn to_filters(&self) -> Result<FilterOptions> {
        let date_range = match (&self.month, self.from, self.to) {
            (Some(month), _, _) => Some(DateRange::from_month_key(month).ok_or_else(|| {
                TrackerError::InvalidInput(format!("month `{month}` must use the YYYY-MM format"))
            })?),
            (None, None, None) => None,
            (None, from, to) => Some(DateRange {
                start: format_bound(from),
                end: format_bound(to),
            }),
        };
        Ok(FilterOptions {
            kind: self.kind,
            category: self.category.clone(),
            date_range,
            search: self.search.clone(),
        })
    }
}

fn format_bound(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn only_mutating_commands_write() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap().command;
        assert!(parse(&["expense_tracker_cli", "delete", "abc", "--yes"]).writes());
        assert!(parse(&["expense_tracker_cli", "edit", "abc", "--amount", "3"]).writes());
        assert!(!parse(&["expense_tracker_cli", "list"]).writes());
        assert!(!parse(&["expense_tracker_cli", "summary"]).writes());
        assert!(!parse(&["expense_tracker_cli", "charts", "--month", "2024-01"]).writes());
    }

    #[test]
    fn month_becomes_full_range() {
        let args = FilterArgs {
            month: Some("2024-02".into()),
            ..FilterArgs::default()
        };
        let filters = args.to_filters().unwrap();
        assert_eq!(filters.date_range, DateRange::month(2024, 2));
    }

    #[test]
    fn bad_month_is_rejected() {
        let args = FilterArgs {
            month: Some("Feb".into()),
            ..FilterArgs::default()
        };
        assert!(args.to_filters().is_err());
    }

    #[test]
    fn half_open_ranges_leave_blank_bounds() {
        let args = FilterArgs {
            from: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..FilterArgs::default()
        };
        let range = args.to_filters().unwrap().date_range.unwrap();
        assert_eq!(range.start, "2024-03-01");
        assert_eq!(range.end, "");
    }

    #[test]
    fn parses_add_command() {
        let cli = Cli::try_parse_from([
            "expense_tracker_cli",
            "add",
            "--type",
            "expense",
            "--amount",
            "12.50",
            "--category",
            "Shopping",
            "--description",
            "Socks",
            "--date",
            "2024-05-01",
        ])
        .unwrap();
        match cli.command {
            Commands::Add { kind, amount, .. } => {
                assert_eq!(kind, TransactionType::Expense);
                assert_eq!(amount, 12.5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
