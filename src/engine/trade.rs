// dexkit Engine — Trades
// Quote comparison used to decide whether a confirmed trade went stale.

use super::currency::CurrencyAmount;
use crate::atoms::types::TradeType;

/// A priced trade quote: direction plus input and output amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    trade_type: TradeType,
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
}

impl Trade {
    pub fn new(trade_type: TradeType, input_amount: CurrencyAmount, output_amount: CurrencyAmount) -> Self {
        Self { trade_type, input_amount, output_amount }
    }

    pub fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    pub fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    pub fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }
}

/// Returns true if the trade requires a confirmation of details before it
/// can be submitted: direction, either currency, or either raw amount changed.
pub fn trades_meaningfully_differ(a: &Trade, b: &Trade) -> bool {
    a.trade_type != b.trade_type
        || a.input_amount.currency() != b.input_amount.currency()
        || a.input_amount.raw() != b.input_amount.raw()
        || a.output_amount.currency() != b.output_amount.currency()
        || a.output_amount.raw() != b.output_amount.raw()
}
