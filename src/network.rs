//! Network URL constants for the dashboard API.

/// Default REST API base URL (local backend, `/api` prefix included).
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the base URL in `ClubdashClientBuilder::from_env`.
pub const API_URL_ENV: &str = "CLUBDASH_API_URL";
