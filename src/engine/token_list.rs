// dexkit Engine — Token Lists
// Default-token map keyed by (chain, address), loadable from the common
// token-list JSON document.

use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::address::{validate_address, Address};
use super::currency::{Currency, Token};
use crate::atoms::error::DexResult;
use crate::atoms::types::ChainId;

// ── Token list document ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct TokenListDocument {
    #[serde(default)]
    name: String,
    tokens: Vec<TokenListEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenListEntry {
    chain_id: u64,
    address: String,
    decimals: u8,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

// ── Address map ────────────────────────────────────────────────────────────

/// Tokens keyed by chain, then by checksummed address.
#[derive(Debug, Clone, Default)]
pub struct TokenAddressMap {
    tokens: HashMap<ChainId, HashMap<Address, Token>>,
}

impl TokenAddressMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, returning the previous entry for the same identity.
    pub fn insert(&mut self, token: Token) -> Option<Token> {
        self.tokens.entry(token.chain).or_default().insert(token.address.clone(), token)
    }

    pub fn get(&self, chain_id: ChainId, address: &Address) -> Option<&Token> {
        self.tokens.get(&chain_id)?.get(address)
    }

    pub fn contains(&self, chain_id: ChainId, address: &Address) -> bool {
        self.get(chain_id, address).is_some()
    }

    pub fn len(&self) -> usize {
        self.tokens.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tokens listed for one chain, in no particular order.
    pub fn tokens(&self, chain_id: ChainId) -> impl Iterator<Item = &Token> {
        self.tokens.get(&chain_id).into_iter().flat_map(|m| m.values())
    }

    /// Parse a token-list JSON document. Entries on unsupported chains or
    /// with invalid addresses are skipped.
    pub fn from_token_list_json(json: &str) -> DexResult<Self> {
        let doc: TokenListDocument = serde_json::from_str(json)?;
        let mut map = Self::new();
        for entry in doc.tokens {
            let Some(chain_id) = ChainId::from_u64(entry.chain_id) else {
                debug!("[dex] Skipping {} on unsupported chain {}", entry.address, entry.chain_id);
                continue;
            };
            let Some(address) = validate_address(&entry.address) else {
                warn!("[dex] Skipping token with invalid address '{}' in list '{}'", entry.address, doc.name);
                continue;
            };
            let mut token = Token::new(chain_id, address, entry.decimals);
            token.symbol = entry.symbol;
            token.name = entry.name;
            map.insert(token);
        }
        debug!("[dex] Loaded {} tokens from list '{}'", map.len(), doc.name);
        Ok(map)
    }

    pub fn load(path: &Path) -> DexResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_token_list_json(&json)
    }
}

/// Whether `currency` counts as listed on `chain_id`.
///
/// The chain's own native currency is always listed; otherwise only tokens
/// present in `default_tokens` are.
pub fn is_token_on_list(default_tokens: &TokenAddressMap, chain_id: ChainId, currency: Option<&Currency>) -> bool {
    match currency {
        Some(Currency::Native { chain }) => *chain == chain_id,
        Some(Currency::Token(token)) => default_tokens.contains(token.chain, &token.address),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
    const DAI: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";

    const LIST: &str = r#"{
        "name": "Test List",
        "tokens": [
            { "chainId": 43114, "address": "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", "decimals": 6, "symbol": "USDC" },
            { "chainId": 43113, "address": "0x6B175474E89094C44Da98b954EedeAC495271d0F", "decimals": 18, "symbol": "DAI", "name": "Dai" },
            { "chainId": 1, "address": "0x6B175474E89094C44Da98b954EedeAC495271d0F", "decimals": 18 },
            { "chainId": 43114, "address": "0xdeadbeef", "decimals": 18 }
        ]
    }"#;

    fn addr(s: &str) -> Address {
        Address::parse(s).unwrap()
    }

    #[test]
    fn loads_valid_entries_only() {
        let map = TokenAddressMap::from_token_list_json(LIST).unwrap();
        assert_eq!(map.len(), 2);
        let usdc = map.get(ChainId::Avalanche, &addr(USDC)).unwrap();
        assert_eq!(usdc.symbol.as_deref(), Some("USDC"));
        assert_eq!(usdc.address.as_str(), USDC);
        assert!(map.contains(ChainId::Fuji, &addr(DAI)));
        assert!(!map.contains(ChainId::Avalanche, &addr(DAI)));
    }

    #[test]
    fn malformed_json_is_error() {
        assert!(TokenAddressMap::from_token_list_json("{ not json").is_err());
    }

    #[test]
    fn native_of_queried_chain_is_listed() {
        let map = TokenAddressMap::new();
        let avax = Currency::native(ChainId::Avalanche);
        assert!(is_token_on_list(&map, ChainId::Avalanche, Some(&avax)));
    }

    #[test]
    fn native_of_other_chain_is_not_listed() {
        let map = TokenAddressMap::new();
        let avax = Currency::native(ChainId::Avalanche);
        assert!(!is_token_on_list(&map, ChainId::Fuji, Some(&avax)));
    }

    #[test]
    fn listed_token() {
        let map = TokenAddressMap::from_token_list_json(LIST).unwrap();
        let usdc: Currency = Token::new(ChainId::Avalanche, addr(USDC), 6).into();
        assert!(is_token_on_list(&map, ChainId::Avalanche, Some(&usdc)));
    }

    #[test]
    fn unlisted_token() {
        let map = TokenAddressMap::from_token_list_json(LIST).unwrap();
        let dai: Currency = Token::new(ChainId::Avalanche, addr(DAI), 18).into();
        assert!(!is_token_on_list(&map, ChainId::Avalanche, Some(&dai)));
    }

    #[test]
    fn no_currency() {
        assert!(!is_token_on_list(&TokenAddressMap::new(), ChainId::Avalanche, None));
    }

    #[test]
    fn insert_replaces_same_identity() {
        let mut map = TokenAddressMap::new();
        assert!(map.insert(Token::new(ChainId::Avalanche, addr(USDC), 6)).is_none());
        assert!(map.insert(Token::new(ChainId::Avalanche, addr(USDC), 6).with_symbol("USDC")).is_some());
        assert_eq!(map.len(), 1);
        assert_eq!(map.tokens(ChainId::Avalanche).count(), 1);
        assert_eq!(map.tokens(ChainId::Coston).count(), 0);
    }
}
