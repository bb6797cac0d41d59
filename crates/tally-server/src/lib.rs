//! tally server library entry.
//!
//! This crate wires the config, counter store, retrying increment, and HTTP
//! transport into a runnable service. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod counter;
pub mod router;
pub mod store;
pub mod transport;
