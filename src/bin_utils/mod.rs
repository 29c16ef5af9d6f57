//! Interactive front end over any [`Ledger`]. Kept in the library so the
//! integration tests can drive it with an in-memory script.

use std::io::{BufRead, Read, Write};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::{
    command::{CommandError, LedgerCommand, MenuOption, parse_decimal, parse_text},
    error::LedgerError,
    interest::FeeOutcome,
    processor::{Ledger, ProcessError},
};
use csv_parser::CsvAccountParser;
use csv_printer::print_csv;
pub mod csv_parser;
pub mod csv_printer;

const RULE: &str = "==================================================";

#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

impl From<CommandError> for StepError {
    fn from(err: CommandError) -> Self {
        StepError::Process(err.into())
    }
}

impl From<LedgerError> for StepError {
    fn from(err: LedgerError) -> Self {
        StepError::Process(err.into())
    }
}

impl From<std::io::Error> for StepError {
    fn from(err: std::io::Error) -> Self {
        StepError::Output(err.into())
    }
}

/// Opens every account listed in an `id,owner,balance` CSV source.
/// Returns how many accounts were opened.
pub fn load_accounts<L, R>(ledger: &mut L, source: R) -> Result<usize>
where
    L: Ledger,
    R: Read,
{
    let parser = CsvAccountParser::new(source).context("Failed to read account list header")?;
    let mut opened = 0;
    for (line, row) in parser {
        let row = row.with_context(|| format!("Invalid account at line {line}"))?;
        ledger
            .create_account(&row.id, &row.owner, row.balance)
            .with_context(|| format!("Cannot open account at line {line}"))?;
        opened += 1;
    }
    Ok(opened)
}

pub struct Service<'w, R, W: 'w, L> {
    pub input: R,
    pub output: &'w mut W,
    pub ledger: L,
}

impl<'w, R, W, L> Service<'w, R, W, L>
where
    R: BufRead,
    W: Write + 'w,
    L: Ledger,
{
    /// Runs the menu until the user exits or input ends, handing the ledger
    /// back to the caller.
    pub fn run(mut self) -> Result<L> {
        writeln!(self.output, "Welcome to the interactive banking system")?;
        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };
            let option = match line.parse::<MenuOption>() {
                Ok(MenuOption::Exit) => {
                    writeln!(self.output, "Thank you for using our banking system!")?;
                    break;
                }
                Ok(option) => option,
                Err(err) => {
                    writeln!(self.output, "Error: {err}")?;
                    continue;
                }
            };
            match self.handle(option) {
                Ok(()) => {}
                Err(StepError::Process(err)) => writeln!(self.output, "Error: {err}")?,
                Err(StepError::Output(err)) => return Err(err),
            }
        }
        Ok(self.ledger)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "MAIN MENU")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "1. Deposit money")?;
        writeln!(self.output, "2. Withdraw money")?;
        writeln!(self.output, "3. Transfer between accounts")?;
        writeln!(self.output, "4. Show account balance")?;
        writeln!(self.output, "5. Show transaction history")?;
        writeln!(self.output, "6. Apply interest to account")?;
        writeln!(self.output, "7. List all accounts")?;
        writeln!(self.output, "8. Create new account")?;
        writeln!(self.output, "9. Apply maintenance fee")?;
        writeln!(self.output, "10. Export accounts as CSV")?;
        writeln!(self.output, "0. Exit")?;
        writeln!(self.output, "{RULE}")?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// `None` once the input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Prompts for an account id that must already exist.
    fn prompt_existing_account(&mut self, label: &str) -> Result<String, StepError> {
        let id = parse_text("account id", &self.prompt(label)?)?;
        if !self.ledger.account_exists(&id) {
            return Err(LedgerError::AccountNotFound(id).into());
        }
        Ok(id)
    }

    fn handle(&mut self, option: MenuOption) -> Result<(), StepError> {
        match option {
            MenuOption::Deposit => {
                writeln!(self.output, "\nDEPOSIT MONEY")?;
                let id = self.prompt_existing_account("Account number: ")?;
                let amount = parse_decimal("amount", &self.prompt("Amount to deposit: $")?)?;
                self.ledger.execute(LedgerCommand::Deposit { id, amount })?;
                writeln!(self.output, "Deposit successful: ${amount:.2}")?;
            }
            MenuOption::Withdraw => {
                writeln!(self.output, "\nWITHDRAW MONEY")?;
                let id = self.prompt_existing_account("Account number: ")?;
                let amount = parse_decimal("amount", &self.prompt("Amount to withdraw: $")?)?;
                self.ledger.execute(LedgerCommand::Withdraw { id, amount })?;
                writeln!(self.output, "Withdrawal successful: ${amount:.2}")?;
            }
            MenuOption::Transfer => {
                writeln!(self.output, "\nTRANSFER BETWEEN ACCOUNTS")?;
                let source = parse_text("source account", &self.prompt("Source account: ")?)?;
                let destination =
                    parse_text("destination account", &self.prompt("Destination account: ")?)?;
                for id in [&source, &destination] {
                    if !self.ledger.account_exists(id) {
                        return Err(LedgerError::AccountNotFound(id.clone()).into());
                    }
                }
                let amount = parse_decimal("amount", &self.prompt("Amount to transfer: $")?)?;
                self.ledger.execute(LedgerCommand::Transfer {
                    source: source.clone(),
                    destination: destination.clone(),
                    amount,
                })?;
                writeln!(
                    self.output,
                    "Transfer successful: ${amount:.2} from {source} to {destination}"
                )?;
            }
            MenuOption::Balance => {
                writeln!(self.output, "\nACCOUNT BALANCE")?;
                let id = parse_text("account id", &self.prompt("Account number: ")?)?;
                let balance = self.ledger.balance(&id)?;
                writeln!(self.output, "Current balance: ${balance:.2}")?;
            }
            MenuOption::History => {
                writeln!(self.output, "\nTRANSACTION HISTORY")?;
                let id = parse_text("account id", &self.prompt("Account number: ")?)?;
                let history = self.ledger.history(&id)?;
                if history.is_empty() {
                    writeln!(self.output, "No transactions recorded.")?;
                } else {
                    writeln!(self.output, "Transactions:")?;
                    for record in history {
                        writeln!(self.output, "  {record}")?;
                    }
                }
            }
            MenuOption::ApplyInterest => {
                writeln!(self.output, "\nAPPLY INTEREST")?;
                let id = self.prompt_existing_account("Account number: ")?;
                let rate_percent =
                    parse_decimal("interest rate", &self.prompt("Interest rate (%): ")?)?;
                let interest = self.ledger.apply_interest(&id, rate_percent)?;
                writeln!(self.output, "Interest of ${interest:.2} applied to {id}")?;
            }
            MenuOption::ListAccounts => {
                writeln!(self.output, "\nALL ACCOUNTS")?;
                let accounts = self.ledger.list_accounts();
                if accounts.is_empty() {
                    writeln!(self.output, "No accounts registered.")?;
                }
                for summary in accounts {
                    writeln!(self.output, "  {summary}")?;
                }
            }
            MenuOption::CreateAccount => {
                writeln!(self.output, "\nCREATE NEW ACCOUNT")?;
                let id = parse_text("account id", &self.prompt("Account number: ")?)?;
                if self.ledger.account_exists(&id) {
                    return Err(LedgerError::DuplicateAccount(id).into());
                }
                let owner = parse_text("owner name", &self.prompt("Owner name: ")?)?;
                let initial_balance =
                    parse_decimal("initial balance", &self.prompt("Initial balance: $")?)?;
                self.ledger.execute(LedgerCommand::CreateAccount {
                    id,
                    owner,
                    initial_balance,
                })?;
                writeln!(self.output, "Account created successfully!")?;
            }
            MenuOption::MaintenanceFee => {
                writeln!(self.output, "\nAPPLY MAINTENANCE FEE")?;
                let id = self.prompt_existing_account("Account number: ")?;
                let fee = parse_decimal("fee", &self.prompt("Fee: $")?)?;
                match self.ledger.apply_maintenance_fee(&id, fee)? {
                    FeeOutcome::Applied { fee, balance } => writeln!(
                        self.output,
                        "Fee of ${fee:.2} applied to {id}, new balance ${balance:.2}"
                    )?,
                    FeeOutcome::Declined { fee, balance } => writeln!(
                        self.output,
                        "Fee of ${fee:.2} not applied: balance of {id} is only ${balance:.2}"
                    )?,
                }
            }
            MenuOption::ExportAccounts => {
                print_csv(&mut *self.output, self.ledger.list_accounts())?;
            }
            MenuOption::Exit => {}
        }
        Ok(())
    }
}
