//! HTTP client layer — `GrowthIndexHttp` with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::GrowthIndexHttp;
pub use retry::{RetryConfig, RetryPolicy};
