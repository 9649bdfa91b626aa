use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Occurs when an aggregate that is undefined without
    /// any transactions (maximum, minimum) is requested.
    #[error("the ledger holds no transactions")]
    EmptyLedger,
}

pub type LedgerResult<T> = Result<T, LedgerError>;
