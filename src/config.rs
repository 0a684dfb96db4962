//! Runtime configuration: command-line flags and the settings applied to new
//! accounts.

use crate::money::Money;
use clap::Parser;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Settings applied when the console opens new accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankConfig {
    /// Interest rate for new savings accounts, in percent.
    pub interest_rate: Decimal,

    /// Overdraft limit for new current accounts.
    pub overdraft_limit: Money,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            interest_rate: Decimal::new(45, 1),
            overdraft_limit: Money::from(5000),
        }
    }
}

/// Interactive bank account manager
#[derive(Parser, Debug)]
#[command(name = "bank-account-manager")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Interest rate (percent) for new savings accounts
    #[arg(long, value_name = "PERCENT", default_value = "4.5", value_parser = parse_interest_rate)]
    pub interest_rate: Decimal,

    /// Overdraft limit for new current accounts
    #[arg(long, value_name = "AMOUNT", default_value = "5000", value_parser = parse_overdraft_limit)]
    pub overdraft_limit: Money,
}

impl Cli {
    pub fn config(&self) -> BankConfig {
        BankConfig {
            interest_rate: self.interest_rate,
            overdraft_limit: self.overdraft_limit,
        }
    }
}

fn parse_interest_rate(s: &str) -> std::result::Result<Decimal, String> {
    let rate = Decimal::from_str(s.trim()).map_err(|e| e.to_string())?;
    if rate.is_sign_negative() {
        return Err(format!("interest rate must not be negative: {}", s));
    }
    Ok(rate)
}

fn parse_overdraft_limit(s: &str) -> std::result::Result<Money, String> {
    let limit = Money::from_str(s).map_err(|e| e.to_string())?;
    if limit.is_negative() {
        return Err(format!("overdraft limit must not be negative: {}", s));
    }
    Ok(limit)
}
