//! In-memory account registry.

use crate::account::Account;
use crate::error::{BankError, Result};
use log::{debug, warn};
use std::io::Write;

/// The ordered set of accounts held for the lifetime of the process.
///
/// Accounts are kept in insertion order and identifiers are unique.
/// Lookups are linear scans; the registry is expected to stay small.
#[derive(Debug, Default)]
pub struct Registry {
    accounts: Vec<Account>,
}

impl Registry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Registry {
            accounts: Vec::new(),
        }
    }

    /// Appends an account.
    ///
    /// Returns [`BankError::DuplicateAccount`] if the identifier is taken.
    pub fn add(&mut self, account: Account) -> Result<()> {
        if self.find(account.id()).is_some() {
            warn!("Account {} already exists, not adding", account.id());
            return Err(BankError::DuplicateAccount(account.id().to_string()));
        }

        debug!(
            "Registered {} {} for {}",
            account.account_type(),
            account.id(),
            account.holder()
        );
        self.accounts.push(account);
        Ok(())
    }

    /// Returns the account with exactly this identifier.
    pub fn find(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Writes the account listing as a fixed-width table.
    ///
    /// Rows are in insertion order.
    pub fn list_all<W: Write>(&self, mut writer: W) -> Result<()> {
        if self.accounts.is_empty() {
            writeln!(writer, "No accounts found!")?;
            return Ok(());
        }

        writeln!(writer, "========== ALL ACCOUNTS ==========")?;
        for account in &self.accounts {
            writeln!(
                writer,
                "{:<10} | {:<20} | {:<13} | {}",
                account.id(),
                account.holder(),
                account.balance(),
                account.account_type()
            )?;
        }
        writeln!(writer, "==================================")?;
        Ok(())
    }
}
