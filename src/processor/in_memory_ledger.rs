use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    account::{Account, AccountSummary, TransactionRecord},
    directory::AccountDirectory,
    error::LedgerError,
    interest::{self, FeeOutcome},
    transfer::{self, TransferReceipt},
};

use super::Ledger;

#[derive(Debug, Default)]
pub struct InMemoryLedger {
    pub directory: AccountDirectory,
}

impl InMemoryLedger {
    /// Ledger preloaded with the three demo accounts.
    pub fn with_sample_accounts() -> Result<Self, LedgerError> {
        let mut ledger = Self::default();
        ledger.create_account("001", "Juan Pérez", Decimal::new(100000, 2))?;
        ledger.create_account("002", "María García", Decimal::new(50000, 2))?;
        ledger.create_account("003", "Carlos López", Decimal::new(150000, 2))?;
        Ok(ledger)
    }
}

impl Ledger for InMemoryLedger {
    fn create_account(
        &mut self,
        id: &str,
        owner: &str,
        initial_balance: Decimal,
    ) -> Result<(), LedgerError> {
        if self.directory.exists(id) {
            return Err(LedgerError::DuplicateAccount(id.to_string()));
        }
        self.directory.add(Account::open(id, owner, initial_balance)?)?;
        info!(account = id, owner, %initial_balance, "account opened");
        Ok(())
    }

    fn deposit(&mut self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        let acc = self.directory.find_mut(id)?;
        acc.deposit(amount)?;
        debug!(account = id, %amount, balance = %acc.balance(), "deposit applied");
        Ok(acc.balance())
    }

    fn withdraw(&mut self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        let acc = self.directory.find_mut(id)?;
        acc.withdraw(amount)?;
        debug!(account = id, %amount, balance = %acc.balance(), "withdrawal applied");
        Ok(acc.balance())
    }

    fn transfer(
        &mut self,
        source: &str,
        destination: &str,
        amount: Decimal,
    ) -> Result<TransferReceipt, LedgerError> {
        let receipt = transfer::transfer(&mut self.directory, source, destination, amount)?;
        debug!(source, destination, %amount, "transfer applied");
        Ok(receipt)
    }

    fn apply_interest(&mut self, id: &str, rate_percent: Decimal) -> Result<Decimal, LedgerError> {
        let acc = self.directory.find_mut(id)?;
        let interest = interest::apply_monthly_interest(acc, rate_percent)?;
        debug!(account = id, %rate_percent, %interest, "interest applied");
        Ok(interest)
    }

    fn apply_maintenance_fee(&mut self, id: &str, fee: Decimal) -> Result<FeeOutcome, LedgerError> {
        let acc = self.directory.find_mut(id)?;
        let outcome = interest::apply_maintenance_fee(acc, fee)?;
        debug!(account = id, %fee, applied = outcome.is_applied(), "maintenance fee processed");
        Ok(outcome)
    }

    fn balance(&self, id: &str) -> Result<Decimal, LedgerError> {
        self.directory.find(id).map(Account::balance)
    }

    fn history(&self, id: &str) -> Result<Vec<TransactionRecord>, LedgerError> {
        self.directory.find(id).map(Account::history)
    }

    fn list_accounts(&self) -> Vec<AccountSummary> {
        self.directory.summaries()
    }

    fn account_exists(&self, id: &str) -> bool {
        self.directory.exists(id)
    }
}
