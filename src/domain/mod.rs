//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, view-ready)
//! - `wire.rs` — Raw serde structs matching backend requests/responses
//! - `convert.rs` — `From` conversions from wire to domain types
//! - `state.rs` — App-owned state containers with update methods (where needed)
//! - `client.rs` — Sub-client with the HTTP fetch operations

pub mod agent;
pub mod club;
pub mod player;
pub mod revenue;
pub mod squad;
pub mod summary;
pub mod transfer;
pub mod valuation;
