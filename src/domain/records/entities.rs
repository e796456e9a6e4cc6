pub use super::value_objects::{NumericField, RecordId};
use crate::domain::errors::{AppError, ValidationResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Domain entity - ERC20 token referenced by a pair
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Token {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub symbol: String,
}

impl Token {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self { id: id.into(), symbol: symbol.into() }
    }
}

/// Domain entity - liquidity pair that can be staked in a campaign
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StakablePair {
    #[serde(default, rename = "reserveUSD")]
    pub reserve_usd: NumericField,
    #[serde(default)]
    pub reserve0: NumericField,
    #[serde(default)]
    pub reserve1: NumericField,
    #[serde(default)]
    pub token0: Token,
    #[serde(default)]
    pub token1: Token,
}

/// Domain entity - farming campaign / pair row as supplied by the data provider
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub staked_amount: NumericField,
    #[serde(default, rename = "oneDayVolumeUSD")]
    pub one_day_volume_usd: NumericField,
    #[serde(default)]
    pub stakable_pair: Option<StakablePair>,
}

impl Record {
    pub fn tokens(&self) -> Option<(&Token, &Token)> {
        self.stakable_pair.as_ref().map(|pair| (&pair.token0, &pair.token1))
    }
}

/// Ordered id -> record mapping; keeps the provider's key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    entries: IndexMap<RecordId, Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object keyed by record id.
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut entries = IndexMap::with_capacity(object.len());
        for (id, value) in object {
            let record: Record = serde_json::from_value(value).map_err(|e| {
                AppError::ValidationError(format!("record {}: {}", id, e))
            })?;
            entries.insert(RecordId::new(id), record);
        }
        Ok(Self { entries })
    }

    /// Insert or replace; a replaced record keeps its original position.
    pub fn insert(&mut self, id: RecordId, record: Record) {
        self.entries.insert(id, record);
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RecordId, &Record)> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.entries.keys()
    }
}

impl FromIterator<(RecordId, Record)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (RecordId, Record)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
