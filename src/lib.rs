//! # Bank Account Manager
//!
//! An interactive console that keeps a small set of bank accounts in memory
//! and supports deposits, withdrawals, balance checks, interest accrual and
//! listing.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: balances use `rust_decimal`, never floats
//! - **One account type**: variants are an enum, so interest accrual is a
//!   match instead of a downcast
//! - **Explicit context**: the registry lives inside the [`Console`], not in
//!   global state
//! - **Recoverable input errors**: bad input is reported and the menu resumes
//!
//! ## Example
//!
//! ```
//! use bank_account_manager::{BankConfig, Console};
//! use std::io::Cursor;
//!
//! let script = "1\nS1\nAlice\n1000\n3\nS1\n500\n8\n";
//! let mut console = Console::new(Cursor::new(script), Vec::new(), BankConfig::default());
//! console.run().unwrap();
//!
//! let account = console.registry().find("S1").unwrap();
//! assert_eq!(account.balance().to_string(), "Rs.1500.00");
//! ```

pub mod account;
pub mod config;
pub mod console;
pub mod error;
pub mod money;
pub mod registry;

pub use account::{Account, AccountKind, Interest, Withdrawal};
pub use config::{BankConfig, Cli};
pub use console::{Console, MenuChoice};
pub use error::{BankError, Result};
pub use money::Money;
pub use registry::Registry;
