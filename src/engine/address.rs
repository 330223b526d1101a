// dexkit Engine — Addresses
// EIP-55 validation (probe and strict) and the `0x1234...abcd` short form.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::chain::chain;
use super::primitives::{decode_address_hex, eip55_checksum};
use crate::atoms::constants::{DEFAULT_SHORTEN_CHARS, SHORTEN_ELLIPSIS, ZERO_ADDRESS};
use crate::atoms::error::{DexError, DexResult};
use crate::atoms::types::ChainId;

/// A 20-byte EVM address, always held in its EIP-55 checksummed form.
///
/// The only ways to obtain one are [`validate_address`] and
/// [`Address::parse`], so holding an `Address` means the checksum passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Strict validation: the checksummed address, or `InvalidAddress`
    /// carrying the raw input.
    pub fn parse(value: &str) -> DexResult<Address> {
        validate_address(value).ok_or_else(|| DexError::InvalidAddress(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == ZERO_ADDRESS
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = DexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = DexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Address::parse(&value)
    }
}

impl From<Address> for String {
    fn from(a: Address) -> Self {
        a.0
    }
}

/// Returns the checksummed address if `value` is a valid EVM address,
/// otherwise `None`.
///
/// Accepts 40 hex digits with or without a `0x` prefix. All-lowercase and
/// all-uppercase input is normalized; mixed case must already match the
/// EIP-55 checksum.
pub fn validate_address(value: &str) -> Option<Address> {
    let hex = value.strip_prefix("0x").unwrap_or(value);
    let bytes = decode_address_hex(hex)?;
    let checksummed = eip55_checksum(&bytes);

    let has_lower = hex.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hex.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper && checksummed[2..] != *hex {
        debug!("[dex] Bad address checksum: {}", value);
        return None;
    }
    Some(Address(checksummed))
}

/// Shorten an address to `prefix...suffix`, `chars` characters per side.
///
/// On EVM chains the address is validated first and the checksummed form
/// is shortened; other chains pass the input through as-is. The two sides
/// may overlap when `chars` exceeds half the length.
pub fn shorten_address(address: &str, chain_id: ChainId, chars: usize) -> DexResult<String> {
    let parsed = if chain(chain_id).evm {
        Address::parse(address)?.into_string()
    } else {
        address.to_string()
    };
    if parsed.is_empty() {
        return Err(DexError::InvalidAddress(address.to_string()));
    }

    let len = parsed.chars().count();
    let prefix: String = parsed.chars().take(chars).collect();
    let suffix: String = parsed.chars().skip(len.saturating_sub(chars)).collect();
    Ok(format!("{}{}{}", prefix, SHORTEN_ELLIPSIS, suffix))
}

/// [`shorten_address`] on the default chain with four characters per side.
pub fn shorten_address_default(address: &str) -> DexResult<String> {
    shorten_address(address, ChainId::DEFAULT, DEFAULT_SHORTEN_CHARS)
}
