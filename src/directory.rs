use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    account::{Account, AccountId, AccountSummary},
    error::LedgerError,
};

/// Both ends of a transfer, which may be one account.
#[derive(Debug)]
pub enum AccountPair<'a> {
    Same(&'a mut Account),
    Distinct(&'a mut Account, &'a mut Account),
}

/// Owns every account, keyed by id, remembering insertion order.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
    index: HashMap<AccountId, usize>,
}

impl AccountDirectory {
    pub fn add(&mut self, account: Account) -> Result<(), LedgerError> {
        if self.index.contains_key(account.id()) {
            return Err(LedgerError::DuplicateAccount(account.id().to_string()));
        }
        self.index.insert(account.id().to_string(), self.accounts.len());
        self.accounts.push(account);
        Ok(())
    }

    pub fn find(&self, id: &str) -> Result<&Account, LedgerError> {
        self.position(id).map(|pos| &self.accounts[pos])
    }

    pub fn find_mut(&mut self, id: &str) -> Result<&mut Account, LedgerError> {
        let pos = self.position(id)?;
        Ok(&mut self.accounts[pos])
    }

    /// Mutable access to both sides of a transfer.
    ///
    /// The first id is resolved first, so when both are unknown the error
    /// names `first`.
    pub fn find_pair_mut(
        &mut self,
        first: &str,
        second: &str,
    ) -> Result<AccountPair<'_>, LedgerError> {
        let a = self.position(first)?;
        let b = self.position(second)?;
        if a == b {
            Ok(AccountPair::Same(&mut self.accounts[a]))
        } else if a < b {
            let (left, right) = self.accounts.split_at_mut(b);
            Ok(AccountPair::Distinct(&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.accounts.split_at_mut(a);
            Ok(AccountPair::Distinct(&mut right[0], &mut left[b]))
        }
    }

    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Snapshot of all accounts in insertion order.
    pub fn list(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    pub fn summaries(&self) -> Vec<AccountSummary> {
        self.accounts.iter().map(Account::summary).collect()
    }

    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(Account::balance).sum()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize, LedgerError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| LedgerError::AccountNotFound(id.to_string()))
    }
}
