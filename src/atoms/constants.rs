// ── dexkit Atoms: Constants ────────────────────────────────────────────────
// All named constants for the crate live here.

// ── Ratios ─────────────────────────────────────────────────────────────────
// 1 bp = 1/10000. Slippage and gas margin both scale over this denominator.
pub const BIPS_BASE: u32 = 10_000;

// Gas estimates are padded by 10%: value * 11000 / 10000.
pub const GAS_MARGIN_NUMERATOR: u32 = BIPS_BASE + 1_000;

// ── Address formatting ────────────────────────────────────────────────────
pub const DEFAULT_SHORTEN_CHARS: usize = 4;
pub const SHORTEN_ELLIPSIS: &str = "...";

/// The all-zero EVM address; never a valid contract target.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// ── Slippage defaults ─────────────────────────────────────────────────────
/// Default slippage tolerance (0.5%)
pub const DEFAULT_SLIPPAGE_BPS: i64 = 50;

// ── Router contracts ──────────────────────────────────────────────────────
/// Built-in router deployments, keyed by numeric chain id.
/// Chains absent here have no router unless one is configured.
pub const ROUTER_ADDRESSES: &[(u64, &str)] = &[
    (43114, "0xe54ca86531e17ef3616d22ca28b0d458b6c89106"),
    (43113, "0x2d99abd9008dc933ff5c0cd271b88309593ab921"),
];

pub const ROUTER_ABI: &str = "IPangolinRouter";

// ── Config file location ──────────────────────────────────────────────────
pub const CONFIG_DIR_NAME: &str = "dexkit";
pub const CONFIG_FILE_NAME: &str = "config.toml";
