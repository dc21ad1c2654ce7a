use chrono::Local;
use dialoguer::Confirm;
use tracing::debug;

use crate::cli::output::{self, MessageKind};
use crate::cli::{Cli, Commands};
use crate::config::ConfigManager;
use crate::core::errors::{Result, TrackerError};
use crate::core::services::CategoryService;
use crate::core::utils::PathResolver;
use crate::core::Tracker;
use crate::currency::format_currency;
use crate::domain::{TransactionDraft, DATE_FORMAT};
use crate::storage::{JsonFileStore, RecordStore};

/// Resolves configuration, opens the tracker, and executes one command.
pub fn run(cli: Cli) -> Result<()> {
    let config_manager = ConfigManager::with_base_dir(PathResolver::base_dir())?;
    let config = config_manager.load()?;
    output::set_color_enabled(config.ui_color_enabled);

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.resolve_data_dir(config_manager.base_dir()));
    debug!(data_dir = %data_dir.display(), "opening records");
    let store = RecordStore::new(Box::new(JsonFileStore::new(data_dir)?));
    let mut tracker = if cli.command.writes() {
        Tracker::open(store)?
    } else {
        Tracker::open_read_only(store)?
    };

    match cli.command {
        Commands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let draft = TransactionDraft::new(kind, amount, category, description, date);
            let txn = tracker.add_transaction(draft)?;
            output::print(
                MessageKind::Success,
                &format!(
                    "Added {} {} ({}) with id {}",
                    txn.kind,
                    format_currency(txn.amount),
                    txn.category,
                    txn.id
                ),
            );
        }
        Commands::Edit {
            id,
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let existing = tracker
                .transaction(&id)
                .ok_or_else(|| TrackerError::TransactionNotFound(id.clone()))?;
            let mut draft = TransactionDraft::from_transaction(existing);
            if let Some(kind) = kind {
                draft.kind = kind;
            }
            if let Some(amount) = amount {
                draft.amount = amount;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(date) = date {
                draft.date = date.format(DATE_FORMAT).to_string();
            }
            let txn = tracker.update_transaction(&id, draft)?;
            output::print(MessageKind::Success, &format!("Updated {}", txn.id));
        }
        Commands::Delete { id, yes } => {
            let existing = tracker
                .transaction(&id)
                .ok_or_else(|| TrackerError::TransactionNotFound(id.clone()))?;
            if !yes && !confirm_delete(&format!(
                "Delete {} {} on {}?",
                existing.description,
                format_currency(existing.amount),
                existing.date
            ))? {
                output::print(MessageKind::Warning, "Nothing deleted.");
                return Ok(());
            }
            let removed = tracker.delete_transaction(&id)?;
            output::print(MessageKind::Success, &format!("Deleted {}", removed.id));
        }
        Commands::List { filters } => {
            let view = tracker.view(&filters.to_filters()?);
            println!(
                "{}",
                output::render_transactions(&view, tracker.categories())
            );
        }
        Commands::Summary => {
            println!("{}", output::render_summary(&tracker.summary()));
        }
        Commands::Charts { filters } => {
            let charts = tracker.charts(&filters.to_filters()?);
            println!(
                "{}",
                output::render_category_chart(&charts.category_totals, tracker.categories())
            );
            println!("{}", output::render_monthly_chart(&charts.monthly));
        }
        Commands::Categories { kind } => {
            let categories = match kind {
                Some(kind) => CategoryService::for_type(tracker.categories(), kind),
                None => tracker.categories().iter().collect(),
            };
            println!("{}", output::render_categories(&categories));
        }
    }
    Ok(())
}

fn confirm_delete(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|err| TrackerError::InvalidInput(format!("confirmation unavailable: {err}")))
}
