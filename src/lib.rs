//! Chain formatting and trade math for DEX front-ends.
//!
//! Pure, synchronous helpers over addresses, amounts and chain ids:
//!
//! - EIP-55 address validation, as a non-failing probe
//!   ([`validate_address`]) and as a strict parse ([`Address::parse`])
//! - `0x1234...abcd` address shortening, EVM-aware per chain
//! - block explorer links from exhaustive per-chain path tables
//! - a 10% gas margin, basis points → [`Percent`], slippage bounds, all in
//!   arbitrary-precision integers
//! - trade staleness checks and token-list membership
//! - contract binding descriptions and the router table
//!
//! ```
//! use dexkit::{calculate_slippage_bounds, ChainId, Currency, CurrencyAmount};
//!
//! let quote = CurrencyAmount::new(Currency::native(ChainId::Avalanche), 10_000u32);
//! let bounds = calculate_slippage_bounds(&quote, 50).unwrap();
//! assert_eq!(bounds.lower.raw().to_string(), "9950");
//! assert_eq!(bounds.upper.raw().to_string(), "10050");
//! ```

pub mod atoms;
pub mod config;
pub mod engine;

pub use atoms::error::{DexError, DexResult};
pub use atoms::types::{Access, Chain, ChainId, ExplorerKind, TradeType};
pub use config::Settings;
pub use engine::*;
