mod core;
pub mod book;

pub use crate::core::{Ledger, Trader, Transaction, LedgerError, LedgerResult, Year, Value};
pub use crate::core::{ledger, trader, transaction, error};
pub use crate::book::{Book, BookError};
