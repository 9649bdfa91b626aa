use std::collections::BTreeMap;

use log::{debug, info};

use crate::core::error::{LedgerError, LedgerResult};
use crate::core::trader::Trader;
use crate::core::transaction::{Transaction, Value, Year};

/// Append-only sequence of transactions, in insertion order.
/// Every query is computed from the stored sequence on each call.
#[derive(Default, Clone, Debug)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger { transactions: Vec::new() }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) {
        debug!("adding transaction {}", transaction);
        self.transactions.push(transaction);
    }

    pub fn size(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn transactions(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// One trader per transaction, duplicates included.
    pub fn all_traders(&self) -> Vec<Trader> {
        self.transactions.iter()
            .map(|transaction| transaction.trader().clone())
            .collect()
    }

    /// Transactions of `year`, ascending by value. Equal values keep insertion order.
    pub fn transactions_in_year(&self, year: Year) -> Vec<&Transaction> {
        let mut in_year: Vec<&Transaction> = self.transactions.iter()
            .filter(|transaction| transaction.year() == year)
            .collect();
        in_year.sort_by_key(|transaction| transaction.value());
        return in_year;
    }

    /// Distinct cities in the order they are first seen.
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        for trader in self.all_traders() {
            let city = trader.city();
            if !cities.contains(&city) {
                cities.push(city);
            }
        }
        return cities;
    }

    /// Traders based in `city`, sorted by name. Traders equal by value
    /// (same name and city) are reported once.
    pub fn traders(&self, city: &str) -> Vec<Trader> {
        let mut traders: Vec<Trader> = self.all_traders().into_iter()
            .filter(|trader| trader.is_in(city))
            .collect();
        traders.sort_by(|a, b| a.name().cmp(b.name()));
        // equal names within one city are equal traders, so duplicates are adjacent
        traders.dedup();
        return traders;
    }

    fn trader_handles_in(&self, city: &str) -> Vec<Trader> {
        let mut handles: Vec<Trader> = Vec::new();
        for trader in self.all_traders() {
            if trader.is_in(city) && !handles.iter().any(|seen| seen.same_as(&trader)) {
                handles.push(trader);
            }
        }
        return handles;
    }

    pub fn transactions_by_year(&self) -> BTreeMap<Year, Vec<&Transaction>> {
        let mut by_year: BTreeMap<Year, Vec<&Transaction>> = BTreeMap::new();
        for transaction in &self.transactions {
            by_year.entry(transaction.year()).or_default().push(transaction);
        }
        return by_year;
    }

    pub fn trader_in_city(&self, city: &str) -> bool {
        self.cities().iter().any(|known| known == city)
    }

    /// Moves every trader currently in `from` to `to`. The change is seen
    /// by all transactions of those traders, past ones included.
    pub fn relocate_traders(&mut self, from: &str, to: &str) {
        let movers = self.trader_handles_in(from);
        for trader in &movers {
            debug!("relocating {} to {}", trader, to);
            trader.set_city(to);
        }
        info!("relocated {} trader(s) from {} to {}", movers.len(), from, to);
    }

    pub fn highest_value(&self) -> LedgerResult<Value> {
        self.transactions.iter()
            .map(Transaction::value)
            .max()
            .ok_or(LedgerError::EmptyLedger)
    }

    /// Summed as `i64`, which cannot overflow below 2^32 transactions.
    pub fn total_value(&self) -> i64 {
        self.transactions.iter()
            .map(|transaction| i64::from(transaction.value()))
            .sum()
    }

    /// The first transaction holding the minimum value.
    pub fn lowest_value_transaction(&self) -> LedgerResult<&Transaction> {
        self.transactions.iter()
            .min_by_key(|transaction| transaction.value())
            .ok_or(LedgerError::EmptyLedger)
    }

    fn distinct_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transactions.iter()
            .map(|transaction| transaction.trader().name())
            .collect();
        names.sort_unstable();
        names.dedup();
        return names;
    }

    /// Distinct trader names in code point order, concatenated without a separator.
    pub fn trader_names(&self) -> String {
        self.distinct_names().concat()
    }

    pub fn trader_names_joined(&self, separator: &str) -> String {
        self.distinct_names().join(separator)
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        ledger.extend(iter);
        return ledger;
    }
}

impl Extend<Transaction> for Ledger {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        for transaction in iter {
            self.add_transaction(transaction);
        }
    }
}
