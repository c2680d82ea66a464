#![doc(test(attr(deny(warnings))))]

//! Recipe Box pairs a column-formatted console menu engine with a JSON-backed
//! recipe store, and wires the two into an interactive recipe manager.

pub mod cli;
pub mod config;
pub mod errors;
pub mod recipes;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Recipe Box tracing initialized.");
    });
}
