//! Bank account model and operations.
//!
//! An account is one struct with an [`AccountKind`] discriminator; the kind
//! decides the withdrawal ceiling and whether interest can be accrued.

use crate::error::{BankError, Result};
use crate::money::Money;
use log::debug;
use rust_decimal::Decimal;
use std::fmt;

/// Variant-specific account data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountKind {
    /// Plain account. Withdrawals are capped at the balance.
    Standard,

    /// Interest-bearing account. `interest_rate` is a percentage.
    Savings { interest_rate: Decimal },

    /// Account that may be overdrawn down to `-overdraft_limit`.
    Current { overdraft_limit: Money },
}

impl AccountKind {
    /// Display label for the variant.
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Standard => "Regular Account",
            AccountKind::Savings { .. } => "Savings Account",
            AccountKind::Current { .. } => "Current Account",
        }
    }
}

/// Result of a successful withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    pub amount: Money,
    pub balance: Money,

    /// Set when a current account ends up below zero.
    pub overdrawn: bool,
}

/// Result of a successful interest accrual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interest {
    pub amount: Money,
    pub rate: Decimal,
    pub balance: Money,
}

/// A bank account.
///
/// # Invariants
///
/// - `id` and `holder` never change after construction
/// - A withdrawal never takes `balance` below zero for standard and savings
///   accounts, or below `-overdraft_limit` for current accounts
#[derive(Debug, Clone)]
pub struct Account {
    id: String,
    holder: String,
    balance: Money,
    kind: AccountKind,
}

impl Account {
    /// Creates an account of the given kind.
    ///
    /// The opening balance is taken as given.
    pub fn new(
        id: impl Into<String>,
        holder: impl Into<String>,
        opening_balance: Money,
        kind: AccountKind,
    ) -> Self {
        Account {
            id: id.into(),
            holder: holder.into(),
            balance: opening_balance,
            kind,
        }
    }

    pub fn standard(
        id: impl Into<String>,
        holder: impl Into<String>,
        opening_balance: Money,
    ) -> Self {
        Self::new(id, holder, opening_balance, AccountKind::Standard)
    }

    pub fn savings(
        id: impl Into<String>,
        holder: impl Into<String>,
        opening_balance: Money,
        interest_rate: Decimal,
    ) -> Self {
        Self::new(id, holder, opening_balance, AccountKind::Savings { interest_rate })
    }

    pub fn current(
        id: impl Into<String>,
        holder: impl Into<String>,
        opening_balance: Money,
        overdraft_limit: Money,
    ) -> Self {
        Self::new(id, holder, opening_balance, AccountKind::Current { overdraft_limit })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// Display label for this account's variant.
    pub fn account_type(&self) -> &'static str {
        self.kind.label()
    }

    /// The most that can be withdrawn right now.
    ///
    /// Current accounts may dip into their overdraft; the result can be less
    /// than the overdraft limit once the account is already overdrawn. The
    /// sum saturates at [`Money::MAX`].
    pub fn available_funds(&self) -> Money {
        match self.kind() {
            AccountKind::Standard | AccountKind::Savings { .. } => self.balance,
            AccountKind::Current { overdraft_limit } => {
                self.balance.saturating_add(*overdraft_limit)
            }
        }
    }

    /// Deposits funds into the account.
    ///
    /// Returns the new balance. Fails with [`BankError::InvalidAmount`] if
    /// `amount` is not positive, or [`BankError::AmountOutOfRange`] if the new
    /// balance would not fit. The balance is unchanged on error.
    pub fn deposit(&mut self, amount: Money) -> Result<Money> {
        if !amount.is_positive() {
            debug!("Rejected deposit of {} to {}", amount, self.id);
            return Err(BankError::InvalidAmount);
        }

        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            debug!("Deposit of {} to {} overflows the balance", amount, self.id);
            BankError::AmountOutOfRange
        })?;
        debug!("Deposited {} to {}, balance {}", amount, self.id, self.balance);
        Ok(self.balance)
    }

    /// Withdraws funds from the account.
    ///
    /// Fails with:
    /// - [`BankError::InvalidAmount`] if `amount` is not positive
    /// - [`BankError::InsufficientFunds`] if `amount` exceeds
    ///   [`available_funds`](Self::available_funds)
    ///
    /// The balance is unchanged on error.
    pub fn withdraw(&mut self, amount: Money) -> Result<Withdrawal> {
        if !amount.is_positive() {
            debug!("Rejected withdrawal of {} from {}", amount, self.id);
            return Err(BankError::InvalidAmount);
        }

        let available = self.available_funds();
        if amount > available {
            debug!(
                "Withdrawal of {} from {} failed (available {})",
                amount, self.id, available
            );
            return Err(BankError::InsufficientFunds { available });
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(BankError::AmountOutOfRange)?;
        let overdrawn =
            matches!(self.kind(), AccountKind::Current { .. }) && self.balance.is_negative();
        debug!("Withdrew {} from {}, balance {}", amount, self.id, self.balance);

        Ok(Withdrawal {
            amount,
            balance: self.balance,
            overdrawn,
        })
    }

    /// Credits one period of interest to a savings account.
    ///
    /// Each call compounds on the current balance. Any other kind of account
    /// fails with [`BankError::NotSavings`]. If the interest or the new
    /// balance would not fit, fails with [`BankError::AmountOutOfRange`] and
    /// leaves the balance unchanged.
    pub fn add_interest(&mut self) -> Result<Interest> {
        let rate = match &self.kind {
            AccountKind::Savings { interest_rate } => *interest_rate,
            _ => return Err(BankError::NotSavings(self.id.clone())),
        };

        let amount = self
            .balance
            .checked_percent(rate)
            .ok_or(BankError::AmountOutOfRange)?;
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            debug!("Interest {} on {} overflows the balance", amount, self.id);
            BankError::AmountOutOfRange
        })?;
        debug!("Credited interest {} ({}%) to {}", amount, rate, self.id);

        Ok(Interest {
            amount,
            rate,
            balance: self.balance,
        })
    }
}

/// Renders the account info block shown by a balance check.
impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== ACCOUNT INFO ==========")?;
        writeln!(f, "Account Number: {}", self.id)?;
        writeln!(f, "Account Holder: {}", self.holder)?;
        writeln!(f, "Balance: {}", self.balance)?;
        writeln!(f, "Type: {}", self.account_type())?;
        write!(f, "==================================")
    }
}
