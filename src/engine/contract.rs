// dexkit Engine — Contract Bindings
// Describes which contract to bind and through what access mode. No RPC
// happens here; the wallet layer turns a ContractBinding into a live handle.

use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;

use super::address::{validate_address, Address};
use crate::atoms::constants::{ROUTER_ABI, ROUTER_ADDRESSES};
use crate::atoms::error::{DexError, DexResult};
use crate::atoms::types::{Access, ChainId};

/// A validated contract target plus the access mode to bind it with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractBinding {
    pub address: Address,
    pub abi: String,
    pub access: Access,
}

/// Signer when an account is supplied, read-only provider otherwise.
/// An empty account string counts as no account.
pub fn provider_or_signer(account: Option<&str>) -> Access {
    match account {
        Some(a) if !a.is_empty() => Access::Signer { account: a.to_string() },
        _ => Access::Provider,
    }
}

/// Validate `address` and describe a binding for it.
pub fn get_contract(address: &str, abi: &str, account: Option<&str>) -> DexResult<ContractBinding> {
    let parsed = Address::parse(address)?;
    if parsed.is_zero() {
        return Err(DexError::InvalidAddress(address.to_string()));
    }
    Ok(ContractBinding { address: parsed, abi: abi.to_string(), access: provider_or_signer(account) })
}

// ── Router table ──────────────────────────────────────────────────────────

/// Router deployments per chain.
#[derive(Debug, Clone)]
pub struct RouterTable {
    routers: HashMap<ChainId, Address>,
}

impl RouterTable {
    /// Table with no routers at all.
    pub fn empty() -> Self {
        Self { routers: HashMap::new() }
    }

    /// The built-in deployments.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (id, raw) in ROUTER_ADDRESSES {
            match (ChainId::from_u64(*id), validate_address(raw)) {
                (Some(chain_id), Some(address)) => {
                    table.routers.insert(chain_id, address);
                }
                _ => warn!("[dex] Ignoring malformed built-in router entry {} => {}", id, raw),
            }
        }
        table
    }

    /// Replace (or add) the router for one chain.
    pub fn set(&mut self, chain_id: ChainId, address: Address) {
        debug!("[dex] Router for {} set to {}", chain_id, address);
        self.routers.insert(chain_id, address);
    }

    pub fn get(&self, chain_id: ChainId) -> Option<&Address> {
        self.routers.get(&chain_id)
    }
}

impl Default for RouterTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Bind the router on `chain_id`, or on the default chain when `None`.
pub fn get_router_contract(
    chain_id: Option<ChainId>,
    routers: &RouterTable,
    account: Option<&str>,
) -> DexResult<ContractBinding> {
    let chain_id = chain_id.unwrap_or(ChainId::DEFAULT);
    let address = routers.get(chain_id).ok_or(DexError::MissingRouter(chain_id))?;
    get_contract(address.as_str(), ROUTER_ABI, account)
}
