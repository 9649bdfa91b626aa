use std::fmt;

use serde::Serialize;

use crate::core::trader::Trader;

pub type Year = i32;
pub type Value = i32;

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Transaction {
    trader: Trader,
    year: Year,
    value: Value,
}

impl Transaction {
    pub fn new(trader: &Trader, year: Year, value: Value) -> Transaction {
        Transaction { trader: trader.clone(), year, value }
    }

    pub fn trader(&self) -> &Trader {
        &self.trader
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn value(&self) -> Value {
        self.value
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.year, self.trader, self.value)
    }
}
