//! Shared test harness.

pub mod stem_contract;
