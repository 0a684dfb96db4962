//! Error types for the bank account manager.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for bank operations
pub type Result<T> = std::result::Result<T, BankError>;

/// Errors that can occur while operating on accounts or the console.
///
/// Everything except [`BankError::Io`] is recoverable: the console reports it
/// and goes back to the menu.
#[derive(Error, Debug)]
pub enum BankError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("Invalid amount!")]
    InvalidAmount,

    /// Result of the operation would not fit in a balance
    #[error("Amount out of range!")]
    AmountOutOfRange,

    /// Withdrawal exceeds the account's withdrawal ceiling
    #[error("Insufficient funds! Available: {available}")]
    InsufficientFunds { available: Money },

    /// No account with the given identifier
    #[error("Account not found!")]
    AccountNotFound(String),

    /// Interest was requested for an account that does not accrue it
    #[error("Only for Savings Account!")]
    NotSavings(String),

    /// An account with the same identifier is already registered
    #[error("Account {0} already exists!")]
    DuplicateAccount(String),

    /// Text at a numeric prompt could not be parsed
    #[error("Invalid input!")]
    InvalidInput(String),

    /// Failed to read from or write to the console
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
