// dexkit Engine — Currencies and Amounts
// Native-currency sentinel vs tracked token, and raw arbitrary-precision
// amounts with decimal formatting.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::address::Address;
use super::chain::chain;
use crate::atoms::error::{DexError, DexResult};
use crate::atoms::types::ChainId;

// ── Token ──────────────────────────────────────────────────────────────────

/// An ERC-20 style token. Identity is chain + address; decimals and
/// labels are descriptive only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub chain: ChainId,
    pub address: Address,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Token {
    pub fn new(chain: ChainId, address: Address, decimals: u8) -> Self {
        Self { chain, address, decimals, symbol: None, name: None }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain.hash(state);
        self.address.hash(state);
    }
}

// ── Currency ───────────────────────────────────────────────────────────────

/// Either a chain's native currency or a tracked token.
///
/// Equality is by definition: two natives are equal when they belong to the
/// same chain, two tokens when chain and address match, and a native never
/// equals a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Currency {
    Native { chain: ChainId },
    Token(Token),
}

impl Currency {
    pub fn native(chain_id: ChainId) -> Self {
        Currency::Native { chain: chain_id }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native { .. })
    }

    pub fn chain(&self) -> ChainId {
        match self {
            Currency::Native { chain } => *chain,
            Currency::Token(t) => t.chain,
        }
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Native { chain: c } => chain(*c).native_decimals,
            Currency::Token(t) => t.decimals,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native { chain: c } => Some(chain(*c).native_symbol),
            Currency::Token(t) => t.symbol.as_deref(),
        }
    }
}

impl From<Token> for Currency {
    fn from(t: Token) -> Self {
        Currency::Token(t)
    }
}

// ── CurrencyAmount ─────────────────────────────────────────────────────────

/// A raw amount in the currency's smallest unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    currency: Currency,
    raw: BigUint,
}

impl CurrencyAmount {
    pub fn new(currency: Currency, raw: impl Into<BigUint>) -> Self {
        Self { currency, raw: raw.into() }
    }

    /// Parse a human-readable amount ("1.5") into raw units using the
    /// currency's decimals.
    pub fn from_human(currency: Currency, amount: &str) -> DexResult<Self> {
        let raw = parse_units(amount, currency.decimals())?;
        Ok(Self { currency, raw })
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn raw(&self) -> &BigUint {
        &self.raw
    }

    /// Exact decimal rendering, trailing zeros trimmed.
    pub fn to_exact(&self) -> String {
        format_units(&self.raw, self.currency.decimals())
    }
}

// ── Unit conversion ────────────────────────────────────────────────────────

/// Convert a token amount with decimals to raw units
/// e.g., "1.5" with 18 decimals → 1500000000000000000
pub fn parse_units(amount: &str, decimals: u8) -> DexResult<BigUint> {
    let amount = amount.trim();
    let (integer_part, decimal_part) = match amount.split_once('.') {
        Some((i, d)) => (i, d),
        None => (amount, ""),
    };
    if integer_part.is_empty() && decimal_part.is_empty() {
        return Err(DexError::InvalidAmount(amount.to_string()));
    }
    if !integer_part.bytes().chain(decimal_part.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(DexError::InvalidAmount(amount.to_string()));
    }
    if decimal_part.len() > decimals as usize {
        return Err(DexError::InvalidAmount(format!(
            "{} has too many decimal places (max {})",
            amount, decimals
        )));
    }

    let padded = format!("{}{:0<width$}", integer_part, decimal_part, width = decimals as usize);
    let digits = padded.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    digits
        .parse::<BigUint>()
        .map_err(|e| DexError::InvalidAmount(format!("{}: {}", amount, e)))
}

/// Convert raw units to a human-readable amount
pub fn format_units(raw: &BigUint, decimals: u8) -> String {
    let decimal_str = raw.to_string();
    if decimals == 0 {
        return decimal_str;
    }

    let dec = decimals as usize;
    let padded = format!("{:0>width$}", decimal_str, width = dec + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - dec);
    let trimmed_frac = frac_part.trim_end_matches('0');
    if trimmed_frac.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, trimmed_frac)
    }
}
