use thiserror::Error;

/// A region string outside the fixed routing table.
#[derive(Debug, Clone, Error)]
#[error("invalid region: {0}")]
pub struct InvalidRegion(pub String);

/// Failure of a single call to the Riot API, as carried through the
/// API traits. Transport-agnostic so consumers do not depend on the
/// HTTP client crate.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// Non-2xx response. `message` is the upstream's own error message
    /// when its error body carries one.
    #[error("Riot API returned status {code}: {message}")]
    Status { code: u16, message: String },

    /// Network-level failure before any status was received.
    #[error("error communicating with the Riot API: {0}")]
    Transport(String),

    /// 2xx response with a body that did not decode.
    #[error("error decoding Riot API response: {0}")]
    Decode(String),
}

impl UpstreamError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { code: 404, .. })
    }
}
