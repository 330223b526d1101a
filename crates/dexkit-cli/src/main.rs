// dexkit CLI — terminal front-end over the dexkit library.
//
// Every subcommand computes an `Output` (plain text + JSON form); `main`
// decides which one to print based on `--json`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use dexkit::{
    apply_gas_margin, basis_points_to_percent, build_explorer_link, build_explorer_link_raw,
    calculate_slippage_bounds, chain, get_router_contract, is_token_on_list, shorten_address,
    validate_address, Address, ChainId, Currency, CurrencyAmount, DexError, DexResult,
    ExplorerKind, Settings, Token, TokenAddressMap,
};
use log::debug;
use num_bigint::BigUint;
use serde_json::json;

#[derive(Debug, Parser)]
#[command(name = "dexkit", version, about = "Chain formatting and trade math for DEX front-ends")]
struct Cli {
    /// Settings file (defaults to <config dir>/dexkit/config.toml)
    #[arg(long, global = true, env = "DEXKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the checksummed form of an EVM address
    CheckAddress { address: String },

    /// Shorten an address to prefix...suffix
    Shorten {
        address: String,
        /// Numeric chain id
        #[arg(long)]
        chain: Option<u64>,
        /// Characters kept on each side
        #[arg(long)]
        chars: Option<usize>,
    },

    /// Build a block explorer link
    Link {
        /// Transaction hash, address, block number or token address
        data: String,
        /// transaction | token | block | address (anything else means address)
        #[arg(long, default_value = "address")]
        kind: String,
        /// Numeric chain id; unsupported ids fall back to the default chain
        #[arg(long)]
        chain: Option<u64>,
    },

    /// Add the 10% safety margin to a gas estimate
    GasMargin { value: String },

    /// Render basis points as a percentage
    Percent {
        #[arg(allow_negative_numbers = true)]
        bps: i64,
    },

    /// Lower and upper bounds of an amount after slippage
    Slippage {
        /// Raw amount in smallest units (or a decimal amount with --human)
        amount: String,
        /// Slippage tolerance in basis points (defaults to settings)
        #[arg(long, allow_negative_numbers = true)]
        bps: Option<i64>,
        #[arg(long)]
        chain: Option<u64>,
        /// Token address; the chain's native currency when omitted
        #[arg(long)]
        token: Option<String>,
        /// Token decimals, used with --token
        #[arg(long, default_value_t = 18)]
        decimals: u8,
        /// Treat AMOUNT as a human-readable decimal amount
        #[arg(long)]
        human: bool,
    },

    /// Show chain metadata (all supported chains when ID is omitted)
    Chain { id: Option<u64> },

    /// Check whether a currency is on the default token list
    OnList {
        /// Token address, or "native"
        currency: String,
        /// Token list JSON (defaults to settings.token_list)
        #[arg(long)]
        list: Option<PathBuf>,
        #[arg(long)]
        chain: Option<u64>,
    },

    /// Describe the router contract binding for a chain
    Router {
        #[arg(long)]
        chain: Option<u64>,
        /// Bind through this account's signer instead of the provider
        #[arg(long)]
        account: Option<String>,
    },
}

struct Output {
    text: String,
    json: serde_json::Value,
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn resolve_chain(raw: Option<u64>, settings: &Settings) -> DexResult<ChainId> {
    Ok(raw.map(ChainId::try_from).transpose()?.unwrap_or(settings.default_chain))
}

fn parse_raw_amount(value: &str) -> DexResult<BigUint> {
    value
        .trim()
        .parse::<BigUint>()
        .map_err(|e| DexError::InvalidAmount(format!("{}: {}", value, e)))
}

// ── Commands ───────────────────────────────────────────────────────────────

fn execute(command: Command, settings: &Settings) -> DexResult<Output> {
    match command {
        Command::CheckAddress { address } => match validate_address(&address) {
            Some(a) => Ok(Output { text: a.to_string(), json: json!({ "address": a }) }),
            None => Err(DexError::InvalidAddress(address)),
        },

        Command::Shorten { address, chain, chars } => {
            let chain_id = resolve_chain(chain, settings)?;
            let short = shorten_address(&address, chain_id, chars.unwrap_or(settings.shorten_chars))?;
            Ok(Output { json: json!({ "short": short }), text: short })
        }

        Command::Link { data, kind, chain } => {
            let kind = ExplorerKind::parse_lossy(&kind);
            let url = match chain {
                Some(raw) => build_explorer_link_raw(raw, &data, kind),
                None => build_explorer_link(settings.default_chain, &data, kind),
            };
            Ok(Output { json: json!({ "url": url, "kind": kind }), text: url })
        }

        Command::GasMargin { value } => {
            let padded = apply_gas_margin(&parse_raw_amount(&value)?);
            Ok(Output { json: json!({ "value": padded.to_string() }), text: padded.to_string() })
        }

        Command::Percent { bps } => {
            let pct = basis_points_to_percent(bps);
            Ok(Output {
                json: json!({
                    "numerator": pct.numerator().to_string(),
                    "denominator": pct.denominator().to_string(),
                    "percent": pct.to_fixed(2),
                }),
                text: pct.to_string(),
            })
        }

        Command::Slippage { amount, bps, chain, token, decimals, human } => {
            let chain_id = resolve_chain(chain, settings)?;
            let currency = match token {
                Some(t) => Currency::Token(Token::new(chain_id, Address::parse(&t)?, decimals)),
                None => Currency::native(chain_id),
            };
            let amount = if human {
                CurrencyAmount::from_human(currency, &amount)?
            } else {
                CurrencyAmount::new(currency, parse_raw_amount(&amount)?)
            };
            let bps = bps.unwrap_or(settings.slippage_bps);
            let bounds = calculate_slippage_bounds(&amount, bps)?;
            let unit = amount.currency().symbol().unwrap_or("").to_string();
            Ok(Output {
                text: format!(
                    "lower: {} ({} {})\nupper: {} ({} {})",
                    bounds.lower.raw(),
                    bounds.lower.to_exact(),
                    unit,
                    bounds.upper.raw(),
                    bounds.upper.to_exact(),
                    unit
                ),
                json: json!({
                    "slippage_bps": bps,
                    "lower": bounds.lower.raw().to_string(),
                    "upper": bounds.upper.raw().to_string(),
                }),
            })
        }

        Command::Chain { id } => {
            let chains: Vec<_> = match id {
                Some(raw) => vec![chain(ChainId::try_from(raw)?)],
                None => ChainId::all().into_iter().map(chain).collect(),
            };
            let text = chains
                .iter()
                .map(|c| {
                    format!(
                        "{:>10}  {:<15} {:<5} {}  {}",
                        c.chain_id,
                        c.name,
                        c.native_symbol,
                        if c.evm { "evm " } else { "    " },
                        c.explorer_url
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            Ok(Output { text, json: serde_json::to_value(&chains)? })
        }

        Command::OnList { currency, list, chain } => {
            let chain_id = resolve_chain(chain, settings)?;
            let path = list
                .or_else(|| settings.token_list.clone())
                .ok_or_else(|| DexError::Config("no token list given and none configured".into()))?;
            let map = TokenAddressMap::load(&path)?;
            let currency = if currency.eq_ignore_ascii_case("native") {
                Currency::native(chain_id)
            } else {
                Currency::Token(Token::new(chain_id, Address::parse(&currency)?, 18))
            };
            let listed = is_token_on_list(&map, chain_id, Some(&currency));
            Ok(Output { text: listed.to_string(), json: json!({ "listed": listed }) })
        }

        Command::Router { chain, account } => {
            let chain_id = chain.map(ChainId::try_from).transpose()?;
            let binding = get_router_contract(chain_id.or(Some(settings.default_chain)), &settings.routers, account.as_deref())?;
            Ok(Output {
                text: format!("{} ({})", binding.address, binding.abi),
                json: serde_json::to_value(&binding)?,
            })
        }
    }
}

// ── Entry point ────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> DexResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("[cli] default chain {}", settings.default_chain);
    let output = execute(cli.command, &settings)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output.json)?);
    } else {
        println!("{}", output.text);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn exec(args: &[&str]) -> DexResult<Output> {
        let cli = Cli::try_parse_from(std::iter::once("dexkit").chain(args.iter().copied())).unwrap();
        execute(cli.command, &Settings::default())
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_address_normalizes() {
        let out = exec(&["check-address", "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"]).unwrap();
        assert_eq!(out.text, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn check_address_invalid() {
        assert!(exec(&["check-address", "0x12"]).is_err());
    }

    #[test]
    fn shorten_near() {
        let out = exec(&["shorten", "alice.near", "--chain", "329847900", "--chars", "3"]).unwrap();
        assert_eq!(out.text, "ali...ear");
    }

    #[test]
    fn link_unknown_chain_falls_back() {
        let out = exec(&["link", "0xabc", "--kind", "transaction", "--chain", "1"]).unwrap();
        assert_eq!(out.text, "https://snowtrace.io/tx/0xabc");
    }

    #[test]
    fn link_unknown_kind_is_address() {
        let out = exec(&["link", "0xabc", "--kind", "nft"]).unwrap();
        assert_eq!(out.text, "https://snowtrace.io/address/0xabc");
    }

    #[test]
    fn gas_margin() {
        assert_eq!(exec(&["gas-margin", "1000"]).unwrap().text, "1100");
        assert!(exec(&["gas-margin", "12abc"]).is_err());
    }

    #[test]
    fn percent_negative_allowed() {
        assert_eq!(exec(&["percent", "-50"]).unwrap().text, "-0.50%");
    }

    #[test]
    fn slippage_raw() {
        let out = exec(&["slippage", "10000", "--bps", "50"]).unwrap();
        assert_eq!(out.json["lower"], "9950");
        assert_eq!(out.json["upper"], "10050");
    }

    #[test]
    fn slippage_human_token() {
        let out = exec(&[
            "slippage",
            "1",
            "--human",
            "--token",
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            "--decimals",
            "6",
        ])
        .unwrap();
        // default settings: 50 bps
        assert_eq!(out.json["lower"], "995000");
        assert_eq!(out.json["upper"], "1005000");
    }

    #[test]
    fn slippage_out_of_range() {
        assert!(matches!(exec(&["slippage", "1", "--bps", "10001"]), Err(DexError::InvalidRange(10001))));
    }

    #[test]
    fn chain_lists_all() {
        let out = exec(&["chain"]).unwrap();
        assert_eq!(out.json.as_array().map(Vec::len), Some(6));
        assert!(exec(&["chain", "1"]).is_err());
    }

    #[test]
    fn router_default_chain() {
        let out = exec(&["router", "--account", "0xabc"]).unwrap();
        assert_eq!(out.json["access"]["mode"], "signer");
        assert!(matches!(exec(&["router", "--chain", "16"]), Err(DexError::MissingRouter(ChainId::Coston))));
    }

    #[test]
    fn on_list_without_list_is_config_error() {
        assert!(matches!(exec(&["on-list", "native"]), Err(DexError::Config(_))));
    }
}
