// ── dexkit Atoms: Pure Data Types ─────────────────────────────────────────────
// Plain struct/enum definitions shared by every engine module.
// Atoms layer rule: no I/O, no side effects, no imports from engine/.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Chains ─────────────────────────────────────────────────────────────────

/// Supported networks. The set is closed: every per-chain table in the
/// engine is an exhaustive `match` on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainId {
    Fuji,
    Avalanche,
    Wagmi,
    Coston,
    NearMainnet,
    NearTestnet,
}

impl ChainId {
    /// Chain used whenever a lookup has nothing better to go on.
    pub const DEFAULT: ChainId = ChainId::Avalanche;

    /// Numeric chain id as reported by wallets.
    pub const fn as_u64(self) -> u64 {
        match self {
            ChainId::Fuji => 43113,
            ChainId::Avalanche => 43114,
            ChainId::Wagmi => 11111,
            ChainId::Coston => 16,
            ChainId::NearMainnet => 329847900,
            ChainId::NearTestnet => 329847901,
        }
    }

    pub const fn from_u64(id: u64) -> Option<ChainId> {
        match id {
            43113 => Some(ChainId::Fuji),
            43114 => Some(ChainId::Avalanche),
            11111 => Some(ChainId::Wagmi),
            16 => Some(ChainId::Coston),
            329847900 => Some(ChainId::NearMainnet),
            329847901 => Some(ChainId::NearTestnet),
            _ => None,
        }
    }

    pub const fn all() -> [ChainId; 6] {
        [
            ChainId::Fuji,
            ChainId::Avalanche,
            ChainId::Wagmi,
            ChainId::Coston,
            ChainId::NearMainnet,
            ChainId::NearTestnet,
        ]
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChainId::Fuji => "Avalanche Fuji",
            ChainId::Avalanche => "Avalanche",
            ChainId::Wagmi => "WAGMI",
            ChainId::Coston => "Coston",
            ChainId::NearMainnet => "NEAR Mainnet",
            ChainId::NearTestnet => "NEAR Testnet",
        };
        f.write_str(name)
    }
}

/// Static metadata for a supported network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chain {
    pub id: ChainId,
    pub chain_id: u64,
    pub name: &'static str,
    /// Whether accounts use the 20-byte EIP-55 address scheme.
    pub evm: bool,
    pub explorer_url: &'static str,
    pub native_symbol: &'static str,
    pub native_decimals: u8,
}

// ── Explorer links ─────────────────────────────────────────────────────────

/// What an explorer link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerKind {
    Transaction,
    Token,
    Block,
    Address,
}

// ── Trades ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

// ── Contract bindings ──────────────────────────────────────────────────────

/// How a contract binding talks to the chain: read-only through the
/// provider, or through an account's signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Access {
    Provider,
    Signer { account: String },
}
