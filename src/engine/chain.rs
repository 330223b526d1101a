// dexkit Engine — Chain Metadata
// Static per-network table and numeric chain id lookups.

use crate::atoms::error::DexError;
use crate::atoms::types::{Chain, ChainId};

const FUJI: Chain = Chain {
    id: ChainId::Fuji,
    chain_id: 43113,
    name: "Avalanche Fuji",
    evm: true,
    explorer_url: "https://testnet.snowtrace.io",
    native_symbol: "AVAX",
    native_decimals: 18,
};

const AVALANCHE: Chain = Chain {
    id: ChainId::Avalanche,
    chain_id: 43114,
    name: "Avalanche",
    evm: true,
    explorer_url: "https://snowtrace.io",
    native_symbol: "AVAX",
    native_decimals: 18,
};

const WAGMI: Chain = Chain {
    id: ChainId::Wagmi,
    chain_id: 11111,
    name: "WAGMI",
    evm: true,
    explorer_url: "https://subnets.avax.network/wagmi/wagmi-chain-testnet/explorer",
    native_symbol: "WGM",
    native_decimals: 18,
};

const COSTON: Chain = Chain {
    id: ChainId::Coston,
    chain_id: 16,
    name: "Coston",
    evm: true,
    explorer_url: "https://coston-explorer.flare.network",
    native_symbol: "CFLR",
    native_decimals: 18,
};

const NEAR_MAINNET: Chain = Chain {
    id: ChainId::NearMainnet,
    chain_id: 329847900,
    name: "NEAR Mainnet",
    evm: false,
    explorer_url: "https://explorer.near.org",
    native_symbol: "NEAR",
    native_decimals: 24,
};

const NEAR_TESTNET: Chain = Chain {
    id: ChainId::NearTestnet,
    chain_id: 329847901,
    name: "NEAR Testnet",
    evm: false,
    explorer_url: "https://explorer.testnet.near.org",
    native_symbol: "NEAR",
    native_decimals: 24,
};

/// Metadata for a supported chain.
pub fn chain(id: ChainId) -> &'static Chain {
    match id {
        ChainId::Fuji => &FUJI,
        ChainId::Avalanche => &AVALANCHE,
        ChainId::Wagmi => &WAGMI,
        ChainId::Coston => &COSTON,
        ChainId::NearMainnet => &NEAR_MAINNET,
        ChainId::NearTestnet => &NEAR_TESTNET,
    }
}

/// Look up chain metadata by the numeric id a wallet reports.
pub fn chain_by_number(chain_id: u64) -> Option<&'static Chain> {
    ChainId::from_u64(chain_id).map(chain)
}

impl TryFrom<u64> for ChainId {
    type Error = DexError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        ChainId::from_u64(value).ok_or(DexError::UnknownChain(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ids_match_enum() {
        for id in ChainId::all() {
            let meta = chain(id);
            assert_eq!(meta.id, id);
            assert_eq!(meta.chain_id, id.as_u64());
            assert_eq!(ChainId::from_u64(meta.chain_id), Some(id));
        }
    }

    #[test]
    fn near_is_not_evm() {
        assert!(!chain(ChainId::NearMainnet).evm);
        assert!(!chain(ChainId::NearTestnet).evm);
        assert!(chain(ChainId::Avalanche).evm);
    }

    #[test]
    fn chain_by_number_known() {
        let c = chain_by_number(43114).unwrap();
        assert_eq!(c.name, "Avalanche");
        assert_eq!(c.native_symbol, "AVAX");
    }

    #[test]
    fn chain_by_number_unknown() {
        assert!(chain_by_number(1).is_none());
    }

    #[test]
    fn try_from_unknown_is_error() {
        let err = ChainId::try_from(1u64).unwrap_err();
        assert!(matches!(err, DexError::UnknownChain(1)));
    }

    #[test]
    fn default_is_avalanche() {
        assert_eq!(ChainId::DEFAULT, ChainId::Avalanche);
    }

    #[test]
    fn explorer_urls_have_no_trailing_slash() {
        for id in ChainId::all() {
            assert!(!chain(id).explorer_url.ends_with('/'));
        }
    }
}
