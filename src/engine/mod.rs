// dexkit Engine — chain formatting and trade math
//
// Submodules:
//   primitives — keccak256, hex helpers, EIP-55 encoding
//   chain      — per-network metadata table, numeric id lookups
//   address    — checksum validation (probe + strict), shortening
//   explorer   — block explorer links
//   currency   — native sentinel vs token, raw amounts, unit conversion
//   math       — gas margin, basis points, slippage bounds
//   trade      — trade quotes and staleness check
//   token_list — default-token map and membership
//   contract   — contract binding descriptions, router table

pub(crate) mod primitives;
pub mod chain;
pub mod address;
pub mod explorer;
pub mod currency;
pub mod math;
pub mod trade;
pub mod token_list;
pub mod contract;

pub use address::{shorten_address, shorten_address_default, validate_address, Address};
pub use chain::{chain, chain_by_number};
pub use contract::{get_contract, get_router_contract, provider_or_signer, ContractBinding, RouterTable};
pub use currency::{format_units, parse_units, Currency, CurrencyAmount, Token};
pub use explorer::{build_explorer_link, build_explorer_link_raw};
pub use math::{apply_gas_margin, basis_points_to_percent, calculate_slippage_bounds, Percent, SlippageBounds};
pub use token_list::{is_token_on_list, TokenAddressMap};
pub use trade::{trades_meaningfully_differ, Trade};
