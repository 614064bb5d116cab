//! HTTP client layer — `ClubdashHttp`, a single-shot JSON request wrapper.

pub mod client;

pub use client::{CallOptions, ClubdashHttp};
