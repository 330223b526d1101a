// ── dexkit Atoms: Error Types ──────────────────────────────────────────────
// Single canonical error enum for the crate, built with `thiserror`.
//
// Design rules:
//   • Validation failures carry the offending raw input verbatim.
//   • The `#[from]` attribute wires std/external error conversions automatically.
//   • `validate_address` is the only operation that reports failure without
//     this enum (it returns `None`).

use thiserror::Error;

use super::types::ChainId;

// ── Primary error enum ─────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum DexError {
    /// Address failed checksum validation (or is the zero address where a
    /// contract is expected).
    #[error("Invalid 'address' parameter '{0}'.")]
    InvalidAddress(String),

    /// Slippage basis points outside `0..=10000`.
    #[error("Unexpected slippage value: {0}")]
    InvalidRange(i64),

    /// Amount string that is not a non-negative decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Numeric chain id that is not one of the supported networks.
    #[error("Unsupported chain id: {0}")]
    UnknownChain(u64),

    /// No router contract is deployed on the requested chain.
    #[error("No router address configured for {0}")]
    MissingRouter(ChainId),

    /// Settings file is present but semantically invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem failure while reading config or token lists.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Token list JSON could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Settings TOML could not be decoded.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

// ── Convenience alias ──────────────────────────────────────────────────────

/// All fallible dexkit operations return this type.
pub type DexResult<T> = Result<T, DexError>;

// ── Conversion: DexError → String ─────────────────────────────────────────
// Lets front-end boundaries call `.map_err(String::from)` directly.

impl From<DexError> for String {
    fn from(e: DexError) -> Self {
        e.to_string()
    }
}
