use super::sorting::PLACEHOLDER_APY;
use crate::domain::records::{Record, RecordId, Token};
use crate::format_utils::formatted_num;

/// Native currency and the ERC20 wrapper that stands in for it on-chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    pub symbol: String,
    pub wrapper_symbol: String,
}

impl NativeCurrency {
    pub fn new(symbol: impl Into<String>, wrapper_symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into(), wrapper_symbol: wrapper_symbol.into() }
    }

    /// Display symbol for a token, unwrapping the wrapper (WETH -> ETH).
    pub fn display_symbol<'a>(&'a self, token_symbol: &'a str) -> &'a str {
        if token_symbol == self.wrapper_symbol { &self.symbol } else { token_symbol }
    }
}

/// One token of the pair as the row shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenCell {
    pub address: String,
    pub symbol: String,
    pub reserve: String,
}

/// Display model of one list row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowView {
    Pair(PairRow),
    /// Record without pair data: rendered as an empty row
    Placeholder { index: usize, id: RecordId },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairRow {
    pub index: usize,
    pub id: RecordId,
    pub link: String,
    pub name: String,
    pub staked: String,
    pub tokens: [TokenCell; 2],
    pub tvl: String,
    pub fees: String,
    pub apy: String,
}

impl RowView {
    pub fn build(index: usize, id: &RecordId, record: &Record, native: &NativeCurrency) -> Self {
        let Some(pair) = record.stakable_pair.as_ref() else {
            return RowView::Placeholder { index, id: id.clone() };
        };

        let name = format!(
            "{}-{}",
            native.display_symbol(&pair.token0.symbol),
            native.display_symbol(&pair.token1.symbol)
        );

        RowView::Pair(PairRow {
            index,
            id: id.clone(),
            link: pair_link(id),
            name,
            staked: format!("{} LP", formatted_num(record.staked_amount.value(), false)),
            tokens: [
                token_cell(&pair.token0, pair.reserve0.value()),
                token_cell(&pair.token1, pair.reserve1.value()),
            ],
            tvl: formatted_num(pair.reserve_usd.value(), true),
            fees: formatted_num(record.one_day_volume_usd.value(), true),
            apy: formatted_num(PLACEHOLDER_APY, false),
        })
    }

    pub fn index(&self) -> usize {
        match self {
            RowView::Pair(row) => row.index,
            RowView::Placeholder { index, .. } => *index,
        }
    }

    pub fn id(&self) -> &RecordId {
        match self {
            RowView::Pair(row) => &row.id,
            RowView::Placeholder { id, .. } => id,
        }
    }
}

/// Router path of a pair's detail page.
pub fn pair_link(id: &RecordId) -> String {
    format!("/pair/{}", id)
}

fn token_cell(token: &Token, reserve: f64) -> TokenCell {
    TokenCell {
        address: token.id.clone(),
        symbol: token.symbol.clone(),
        reserve: formatted_num(reserve, false),
    }
}
