pub mod trader;
pub mod transaction;
pub mod ledger;
pub mod error;

pub use trader::Trader;
pub use transaction::{Transaction, Year, Value};
pub use ledger::Ledger;
pub use error::{LedgerError, LedgerResult};
