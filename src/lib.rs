#![doc(test(attr(deny(warnings))))]

//! Studio Core offers the booking wizard, editable-content, and service
//! catalog primitives that power a wellness studio's marketing and booking
//! site.

pub mod auth;
pub mod booking;
pub mod config;
pub mod domain;
pub mod editable;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Studio Core tracing initialized.");
    });
}
