#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records income and expense transactions, persists them in a
//! local key-value store, and derives balances, filtered views, and chart data.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Expense Tracker tracing initialized.");
    });
}
