//! Network URL constants for the growth index API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.tokenguard.io/db-api";

/// Path of the basic timeline endpoint, relative to the base URL.
pub const TIMELINE_PATH: &str = "/growth-index/basic-timeline-data";
