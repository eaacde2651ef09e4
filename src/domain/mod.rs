//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types
//! - `wire.rs` — Raw serde structs matching backend requests/responses
//! - `convert.rs` — `From` conversions and validation between wire and domain
//! - `state.rs` — State containers with update methods
//! - `client.rs` — Sub-client with HTTP methods and caching

pub mod chart;
pub mod growth_index;
