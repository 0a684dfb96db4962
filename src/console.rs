//! Menu-driven console over an account registry.
//!
//! The console reads one line per prompt from any `BufRead` and writes to any
//! `Write`, so the binary drives it with stdin/stdout and tests drive it with
//! in-memory buffers. Every recoverable [`BankError`] is rendered as a message
//! and the loop goes back to the menu; only I/O errors end it early.

use crate::account::Account;
use crate::config::BankConfig;
use crate::error::{BankError, Result};
use crate::money::Money;
use crate::registry::Registry;
use log::{debug, warn};
use rust_decimal::RoundingStrategy;
use std::io::{BufRead, Write};
use std::str::FromStr;

const BANNER: &str = "\
======================================
   BANK ACCOUNT MANAGER SYSTEM
======================================
";

const MENU: &str = "\
1. Create Savings Account
2. Create Current Account
3. Deposit Money
4. Withdraw Money
5. Check Balance
6. Add Interest (Savings)
7. View All Accounts
8. Exit
";

/// A valid menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateSavings,
    CreateCurrent,
    Deposit,
    Withdraw,
    CheckBalance,
    AddInterest,
    ListAll,
    Exit,
}

impl MenuChoice {
    /// Maps a menu number to a choice. Numbers outside 1-8 yield `None`.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::CreateSavings),
            2 => Some(MenuChoice::CreateCurrent),
            3 => Some(MenuChoice::Deposit),
            4 => Some(MenuChoice::Withdraw),
            5 => Some(MenuChoice::CheckBalance),
            6 => Some(MenuChoice::AddInterest),
            7 => Some(MenuChoice::ListAll),
            8 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// The interactive loop and the registry it operates on.
pub struct Console<R, W> {
    input: R,
    output: W,
    registry: Registry,
    config: BankConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console with an empty registry.
    pub fn new(input: R, output: W, config: BankConfig) -> Self {
        Console {
            input,
            output,
            registry: Registry::new(),
            config,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        write!(self.output, "{}", BANNER)?;
        writeln!(self.output)?;

        loop {
            write!(self.output, "{}", MENU)?;
            let line = match self.prompt("\nChoice: ")? {
                Some(line) => line,
                None => break,
            };

            let parsed = line.trim().parse::<i64>();
            let flow = match parsed {
                Ok(number) => match MenuChoice::from_number(number) {
                    Some(choice) => {
                        debug!("Menu choice {:?}", choice);
                        let result = self.dispatch(choice);
                        self.settle(result)?
                    }
                    None => {
                        debug!("Menu choice {} out of range", number);
                        writeln!(self.output, "Invalid choice!")?;
                        Flow::Continue
                    }
                },
                Err(_) => self.settle(Err(BankError::InvalidInput(line)))?,
            };

            if flow == Flow::Stop {
                break;
            }
            writeln!(self.output)?;
        }

        debug!("Leaving the menu loop");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::CreateSavings => self.create_savings(),
            MenuChoice::CreateCurrent => self.create_current(),
            MenuChoice::Deposit => self.deposit(),
            MenuChoice::Withdraw => self.withdraw(),
            MenuChoice::CheckBalance => self.check_balance(),
            MenuChoice::AddInterest => self.add_interest(),
            MenuChoice::ListAll => {
                self.registry.list_all(&mut self.output)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Thank you!")?;
                Ok(Flow::Stop)
            }
        }
    }

    /// Renders a recoverable error and passes I/O errors through.
    fn settle(&mut self, result: Result<Flow>) -> Result<Flow> {
        let err = match result {
            Ok(flow) => return Ok(flow),
            Err(BankError::Io(e)) => return Err(BankError::Io(e)),
            Err(err) => err,
        };

        match &err {
            BankError::InsufficientFunds { .. } | BankError::DuplicateAccount(_) => {
                writeln!(self.output, "Error: {}", err)?
            }
            BankError::InvalidInput(text) => {
                warn!("Discarding unparsable input {:?}", text.trim_end());
                writeln!(self.output, "{}", err)?
            }
            _ => writeln!(self.output, "{}", err)?,
        }
        Ok(Flow::Continue)
    }

    fn create_savings(&mut self) -> Result<Flow> {
        let Some((id, holder, opening)) = self.read_new_account()? else {
            return Ok(Flow::Stop);
        };
        let account = Account::savings(id, holder, opening, self.config.interest_rate);
        self.register(account)
    }

    fn create_current(&mut self) -> Result<Flow> {
        let Some((id, holder, opening)) = self.read_new_account()? else {
            return Ok(Flow::Stop);
        };
        let account = Account::current(id, holder, opening, self.config.overdraft_limit);
        self.register(account)
    }

    fn register(&mut self, account: Account) -> Result<Flow> {
        self.registry.add(account)?;
        writeln!(self.output, "Account created successfully!")?;
        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_existing_account()? else {
            return Ok(Flow::Stop);
        };
        let Some(amount) = self.prompt_amount("Amount: ")? else {
            return Ok(Flow::Stop);
        };

        let account = lookup(&mut self.registry, &id)?;
        let balance = account.deposit(amount)?;
        writeln!(self.output, "Deposited: {} | Balance: {}", amount, balance)?;
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_existing_account()? else {
            return Ok(Flow::Stop);
        };
        let Some(amount) = self.prompt_amount("Amount: ")? else {
            return Ok(Flow::Stop);
        };

        let account = lookup(&mut self.registry, &id)?;
        let receipt = account.withdraw(amount)?;
        write!(
            self.output,
            "Withdrawn: {} | Balance: {}",
            receipt.amount, receipt.balance
        )?;
        if receipt.overdrawn {
            write!(self.output, " (Using overdraft)")?;
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn check_balance(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_existing_account()? else {
            return Ok(Flow::Stop);
        };

        let account = lookup(&mut self.registry, &id)?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", account)?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn add_interest(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_existing_account()? else {
            return Ok(Flow::Stop);
        };

        let account = lookup(&mut self.registry, &id)?;
        let interest = account.add_interest()?;
        let mut rate = interest
            .rate
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        rate.rescale(1);
        writeln!(self.output, "Interest added: {} ({}%)", interest.amount, rate)?;
        Ok(Flow::Continue)
    }

    /// Reads identifier, holder name and opening balance for a new account.
    fn read_new_account(&mut self) -> Result<Option<(String, String, Money)>> {
        let Some(id) = self.prompt("Account Number: ")? else {
            return Ok(None);
        };
        let Some(holder) = self.prompt("Name: ")? else {
            return Ok(None);
        };
        let Some(opening) = self.prompt_amount("Initial Deposit: ")? else {
            return Ok(None);
        };
        Ok(Some((id, holder, opening)))
    }

    /// Reads an identifier and fails early if no such account exists, so the
    /// user is not asked for an amount first.
    fn prompt_existing_account(&mut self) -> Result<Option<String>> {
        let Some(id) = self.prompt("Account Number: ")? else {
            return Ok(None);
        };
        if self.registry.find(&id).is_none() {
            debug!("No account {:?}", id);
            return Err(BankError::AccountNotFound(id));
        }
        Ok(Some(id))
    }

    fn prompt_amount(&mut self, label: &str) -> Result<Option<Money>> {
        let Some(text) = self.prompt(label)? else {
            return Ok(None);
        };
        match Money::from_str(&text) {
            Ok(amount) => Ok(Some(amount)),
            Err(_) => Err(BankError::InvalidInput(text)),
        }
    }

    /// Writes `label`, then reads one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

fn lookup<'a>(registry: &'a mut Registry, id: &str) -> Result<&'a mut Account> {
    registry
        .find_mut(id)
        .ok_or_else(|| BankError::AccountNotFound(id.to_string()))
}
