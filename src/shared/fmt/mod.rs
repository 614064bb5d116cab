//! Display formatting helpers.

pub mod money;
