//! Riot API client used by the aggregator.
//!
//! The crate offers typed wrappers around the official REST endpoints,
//! implemented against the API traits of `riftview-shared` so the
//! aggregation layer never depends on the concrete client.

pub mod api;
pub mod metrics;

pub use api::lol::LolApiClient;
