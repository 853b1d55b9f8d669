use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbError {
    #[error("No transaction in progress")]
    NoActiveTransaction,

    #[error("Transaction already in progress")]
    TransactionAlreadyActive,
}

pub type Result<T> = std::result::Result<T, DbError>;
