use colored::{ColoredString, Colorize};

use crate::core::services::{CategoryService, CategoryTotal, MonthlyData, Summary};
use crate::currency::format_currency;
use crate::domain::{Category, Transaction, TransactionType};

const BAR_WIDTH: usize = 30;
const BAR_GLYPH: char = '#';

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Section,
}

/// Enables or disables ANSI styling for the whole process.
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

pub fn styled(kind: MessageKind, message: &str) -> String {
    match kind {
        MessageKind::Info => message.to_string(),
        MessageKind::Success => format!("{} {}", "[ok]".green().bold(), message),
        MessageKind::Warning => format!("{} {}", "[!]".yellow().bold(), message),
        MessageKind::Section => format!("=== {} ===", message.trim()).bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: &str) {
    println!("{}", styled(kind, message));
}

/// Hex display hint (`#rrggbb`) to an RGB triple.
fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn paint(text: &str, color: &str) -> ColoredString {
    match parse_hex(color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn signed_currency(txn: &Transaction) -> ColoredString {
    let amount = format_currency(txn.magnitude());
    match txn.kind {
        TransactionType::Income => format!("+{amount}").green(),
        TransactionType::Expense => format!("-{amount}").red(),
    }
}

pub fn render_summary(summary: &Summary) -> String {
    let balance = format_currency(summary.balance);
    let balance = if summary.balance < 0.0 {
        balance.red()
    } else {
        balance.normal()
    };
    [
        styled(MessageKind::Section, "Balance"),
        format!("Total balance   {balance}"),
        format!(
            "Total income    {}",
            format_currency(summary.total_income).green()
        ),
        format!(
            "Total expenses  {}",
            format_currency(summary.total_expenses).red()
        ),
        format!("Transactions    {}", summary.transaction_count),
    ]
    .join("\n")
}

pub fn render_transactions(transactions: &[Transaction], categories: &[Category]) -> String {
    if transactions.is_empty() {
        return "No transactions yet. Add one with `add`.".to_string();
    }
    let plural = if transactions.len() == 1 { "" } else { "s" };
    let mut lines = vec![styled(
        MessageKind::Section,
        &format!("{} transaction{plural}", transactions.len()),
    )];
    for txn in transactions {
        let color = CategoryService::color_for(categories, &txn.category, txn.kind);
        lines.push(format!(
            "{:<10}  {:>14}  {:<18}  {}  ({})",
            txn.date,
            signed_currency(txn),
            paint(&txn.category, color),
            txn.description,
            txn.id.dimmed()
        ));
    }
    lines.join("\n")
}

fn bar(amount: f64, max: f64) -> String {
    let len = if max > 0.0 {
        ((amount / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    std::iter::repeat(BAR_GLYPH).take(len.min(BAR_WIDTH)).collect()
}

pub fn render_category_chart(totals: &[CategoryTotal], categories: &[Category]) -> String {
    let mut lines = vec![styled(MessageKind::Section, "By category")];
    if totals.is_empty() {
        lines.push("No data to display.".to_string());
        return lines.join("\n");
    }
    let max = totals.iter().map(|t| t.amount).fold(0.0, f64::max);
    for total in totals {
        let color = CategoryService::chart_color(categories, &total.category);
        lines.push(format!(
            "{:<18}  {:>14}  {}",
            total.category,
            format_currency(total.amount),
            paint(&bar(total.amount, max), color)
        ));
    }
    lines.join("\n")
}

pub fn render_monthly_chart(months: &[MonthlyData]) -> String {
    let mut lines = vec![styled(MessageKind::Section, "By month")];
    if months.is_empty() {
        lines.push("No data to display.".to_string());
        return lines.join("\n");
    }
    let max = months
        .iter()
        .flat_map(|m| [m.income, m.expense])
        .fold(0.0, f64::max);
    for month in months {
        lines.push(format!(
            "{:<7}  income  {:>14}  {}",
            month.month,
            format_currency(month.income),
            bar(month.income, max).green()
        ));
        lines.push(format!(
            "{:<7}  expense {:>14}  {}",
            "",
            format_currency(month.expense),
            bar(month.expense, max).red()
        ));
        lines.push(format!(
            "{:<7}  net     {:>14}",
            "",
            format_currency(month.net)
        ));
    }
    lines.join("\n")
}

pub fn render_categories(categories: &[&Category]) -> String {
    let mut lines = vec![styled(MessageKind::Section, "Categories")];
    for category in categories {
        lines.push(format!(
            "{:>3}  {:<18}  {:<8}  {}",
            category.id,
            paint(&category.name, &category.color),
            category.kind,
            category.color
        ));
    }
    lines.join("\n")
}
