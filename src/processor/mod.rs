use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{AccountSummary, TransactionRecord},
    command::{CommandError, CommandOutcome, LedgerCommand},
    error::LedgerError,
    interest::FeeOutcome,
    transfer::TransferReceipt,
};

pub mod in_memory_ledger;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    LedgerErr(#[from] LedgerError),
}

pub trait Ledger {
    fn create_account(
        &mut self,
        id: &str,
        owner: &str,
        initial_balance: Decimal,
    ) -> Result<(), LedgerError>;

    /// Returns the balance after the deposit.
    fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError>;

    /// Returns the balance after the withdrawal.
    fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError>;

    fn transfer(
        &mut self,
        source: &str,
        destination: &str,
        amount: Decimal,
    ) -> Result<TransferReceipt, LedgerError>;

    /// Returns the interest credited.
    fn apply_interest(&mut self, id: &str, rate_percent: Decimal) -> Result<Decimal, LedgerError>;

    fn apply_maintenance_fee(&mut self, id: &str, fee: Decimal) -> Result<FeeOutcome, LedgerError>;

    fn balance(&self, id: &str) -> Result<Decimal, LedgerError>;

    fn history(&self, id: &str) -> Result<Vec<TransactionRecord>, LedgerError>;

    fn list_accounts(&self) -> Vec<AccountSummary>;

    fn account_exists(&self, id: &str) -> bool;

    fn execute(&mut self, command: LedgerCommand) -> Result<CommandOutcome, LedgerError> {
        match command {
            LedgerCommand::CreateAccount {
                id,
                owner,
                initial_balance,
            } => {
                self.create_account(&id, &owner, initial_balance)?;
                Ok(CommandOutcome::AccountCreated { id })
            }
            LedgerCommand::Deposit { id, amount } => {
                let balance = self.deposit(&id, amount)?;
                Ok(CommandOutcome::Deposited { id, balance })
            }
            LedgerCommand::Withdraw { id, amount } => {
                let balance = self.withdraw(&id, amount)?;
                Ok(CommandOutcome::Withdrawn { id, balance })
            }
            LedgerCommand::Transfer {
                source,
                destination,
                amount,
            } => Ok(CommandOutcome::Transferred(self.transfer(
                &source,
                &destination,
                amount,
            )?)),
            LedgerCommand::ApplyInterest { id, rate_percent } => {
                let interest = self.apply_interest(&id, rate_percent)?;
                Ok(CommandOutcome::InterestApplied { id, interest })
            }
            LedgerCommand::ApplyMaintenanceFee { id, fee } => {
                let outcome = self.apply_maintenance_fee(&id, fee)?;
                Ok(CommandOutcome::MaintenanceFee { id, outcome })
            }
        }
    }
}
