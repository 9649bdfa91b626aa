//! Declarative description of a ledger: a list of traders keyed by id
//! and a list of transactions referring to those ids. Parsing only;
//! reading the text from disk is left to the caller.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Ledger, Trader, Transaction, Value, Year};

#[derive(Error, Debug)]
pub enum BookError {
    #[error("failed to parse book: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("trader id {0} is declared more than once")]
    DuplicateTraderId(String),
    #[error("transaction {index} refers to unknown trader id {id}")]
    UnknownTrader { index: usize, id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraderEntry {
    pub id: String,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEntry {
    pub trader: String,
    pub year: Year,
    pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub traders: Vec<TraderEntry>,
    #[serde(default)]
    pub transactions: Vec<TransactionEntry>,
}

impl Book {
    pub fn from_toml(content: &str) -> Result<Book, BookError> {
        let book = toml::from_str(content)?;
        return Ok(book);
    }

    /// Builds the ledger, creating one shared trader per trader entry.
    /// Transactions naming the same id hold the same trader.
    pub fn into_ledger(self) -> Result<Ledger, BookError> {
        let mut traders: HashMap<String, Trader> = HashMap::new();
        for entry in self.traders {
            if traders.contains_key(&entry.id) {
                return Err(BookError::DuplicateTraderId(entry.id));
            }
            traders.insert(entry.id, Trader::new(&entry.name, &entry.city));
        }

        let mut ledger = Ledger::new();
        for (index, entry) in self.transactions.into_iter().enumerate() {
            let trader = traders.get(&entry.trader)
                .ok_or_else(|| BookError::UnknownTrader { index, id: entry.trader.clone() })?;
            ledger.add_transaction(Transaction::new(trader, entry.year, entry.value));
        }

        debug!("built ledger of {} transactions over {} traders", ledger.size(), traders.len());
        return Ok(ledger);
    }
}
