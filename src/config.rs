// dexkit — Settings
// Loaded from `--config PATH`, else `<config dir>/dexkit/config.toml`,
// else built-in defaults.
//
// Example:
//
//   default_chain = 43113
//   shorten_chars = 6
//   slippage_bps = 100
//   token_list = "/etc/dexkit/tokens.json"
//
//   [routers]
//   11111 = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"

use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::atoms::constants::{
    BIPS_BASE, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SHORTEN_CHARS, DEFAULT_SLIPPAGE_BPS,
};
use crate::atoms::error::{DexError, DexResult};
use crate::atoms::types::ChainId;
use crate::engine::address::Address;
use crate::engine::contract::RouterTable;

// ── File schema ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    default_chain: u64,
    shorten_chars: usize,
    slippage_bps: i64,
    token_list: Option<PathBuf>,
    routers: HashMap<String, String>,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            default_chain: ChainId::DEFAULT.as_u64(),
            shorten_chars: DEFAULT_SHORTEN_CHARS,
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            token_list: None,
            routers: HashMap::new(),
        }
    }
}

// ── Resolved settings ─────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Settings {
    pub default_chain: ChainId,
    pub shorten_chars: usize,
    pub slippage_bps: i64,
    pub token_list: Option<PathBuf>,
    pub routers: RouterTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_chain: ChainId::DEFAULT,
            shorten_chars: DEFAULT_SHORTEN_CHARS,
            slippage_bps: DEFAULT_SLIPPAGE_BPS,
            token_list: None,
            routers: RouterTable::builtin(),
        }
    }
}

impl Settings {
    /// Returns the default settings path: `<config dir>/dexkit/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse and validate a settings TOML document.
    pub fn from_toml_str(content: &str) -> DexResult<Self> {
        let file: SettingsFile = toml::from_str(content)?;

        let default_chain = ChainId::from_u64(file.default_chain)
            .ok_or_else(|| DexError::Config(format!("default_chain {} is not supported", file.default_chain)))?;

        if !(0..=i64::from(BIPS_BASE)).contains(&file.slippage_bps) {
            return Err(DexError::Config(format!(
                "slippage_bps {} must be between 0 and {}",
                file.slippage_bps, BIPS_BASE
            )));
        }

        let mut routers = RouterTable::builtin();
        for (key, raw) in &file.routers {
            let chain_id = key
                .parse::<u64>()
                .ok()
                .and_then(ChainId::from_u64)
                .ok_or_else(|| DexError::Config(format!("routers: unsupported chain id '{}'", key)))?;
            let address = Address::parse(raw)
                .map_err(|_| DexError::Config(format!("routers.{}: invalid address '{}'", key, raw)))?;
            routers.set(chain_id, address);
        }

        Ok(Self {
            default_chain,
            shorten_chars: file.shorten_chars,
            slippage_bps: file.slippage_bps,
            token_list: file.token_list,
            routers,
        })
    }

    /// Load from an explicit path (which must exist), else the default
    /// path if present, else defaults.
    pub fn load(path: Option<&Path>) -> DexResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    debug!("[config] No settings file, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        info!("[config] Loading settings from {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }
}
