#![doc(test(attr(deny(warnings))))]

//! Milk Ledger offers record stores, aggregation, and persistence primitives
//! for tracking milk deliveries and payments, plus the interactive CLI that
//! fronts them.

pub mod cli;
pub mod core;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Milk Ledger tracing initialized.");
    });
}
