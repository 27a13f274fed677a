//! Wire models of the Bauplan catalog.
//!
//! These types mirror what the catalog returns and accepts. They are decoded
//! once per request and never persisted.

pub mod branch;
pub mod commit;
