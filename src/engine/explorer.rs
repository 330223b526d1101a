// dexkit Engine — Block Explorer Links
// Each chain's explorer names its routes differently (EVM "tx" vs NEAR
// "transactions"), so every path table is an exhaustive match on ChainId.

use log::debug;

use super::chain::chain;
use crate::atoms::types::{ChainId, ExplorerKind};

// ── Path tables ────────────────────────────────────────────────────────────

fn transaction_path(chain_id: ChainId) -> &'static str {
    match chain_id {
        ChainId::Fuji | ChainId::Avalanche | ChainId::Wagmi | ChainId::Coston => "tx",
        ChainId::NearMainnet | ChainId::NearTestnet => "transactions",
    }
}

fn address_path(chain_id: ChainId) -> &'static str {
    match chain_id {
        ChainId::Fuji | ChainId::Avalanche | ChainId::Wagmi | ChainId::Coston => "address",
        ChainId::NearMainnet | ChainId::NearTestnet => "accounts",
    }
}

fn block_path(chain_id: ChainId) -> &'static str {
    match chain_id {
        ChainId::Fuji | ChainId::Avalanche | ChainId::Wagmi | ChainId::Coston => "block",
        ChainId::NearMainnet | ChainId::NearTestnet => "blocks",
    }
}

fn token_path(chain_id: ChainId) -> &'static str {
    match chain_id {
        ChainId::Fuji | ChainId::Avalanche | ChainId::Wagmi | ChainId::Coston => "token",
        ChainId::NearMainnet | ChainId::NearTestnet => "accounts",
    }
}

// ── Kinds ──────────────────────────────────────────────────────────────────

impl ExplorerKind {
    /// Map a kind string to `ExplorerKind`.
    /// Falls back to `Address` for unrecognized values.
    pub fn parse_lossy(s: &str) -> ExplorerKind {
        match s.trim().to_lowercase().as_str() {
            "transaction" | "tx" => ExplorerKind::Transaction,
            "token" => ExplorerKind::Token,
            "block" => ExplorerKind::Block,
            _ => ExplorerKind::Address,
        }
    }

    pub fn path_segment(self, chain_id: ChainId) -> &'static str {
        match self {
            ExplorerKind::Transaction => transaction_path(chain_id),
            ExplorerKind::Token => token_path(chain_id),
            ExplorerKind::Block => block_path(chain_id),
            ExplorerKind::Address => address_path(chain_id),
        }
    }
}

impl From<&str> for ExplorerKind {
    fn from(s: &str) -> Self {
        ExplorerKind::parse_lossy(s)
    }
}

// ── Links ──────────────────────────────────────────────────────────────────

/// Build `prefix/segment/data` for a supported chain.
pub fn build_explorer_link(chain_id: ChainId, data: &str, kind: ExplorerKind) -> String {
    format!("{}/{}/{}", chain(chain_id).explorer_url, kind.path_segment(chain_id), data)
}

/// Build an explorer link from a raw numeric chain id.
/// Unknown ids resolve to the default chain for both the URL prefix and
/// the path table, so the link is always well formed.
pub fn build_explorer_link_raw(chain_id: u64, data: &str, kind: ExplorerKind) -> String {
    let resolved = ChainId::from_u64(chain_id).unwrap_or_else(|| {
        debug!("[dex] Unknown chain {} for explorer link, using {}", chain_id, ChainId::DEFAULT);
        ChainId::DEFAULT
    });
    build_explorer_link(resolved, data, kind)
}
