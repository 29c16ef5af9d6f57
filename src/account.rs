use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, prelude::Zero};
use serde::Serialize;

use crate::error::LedgerError;

pub type AccountId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
    InterestApplied,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
            TransactionKind::TransferOut => "TRANSFER_OUT",
            TransactionKind::TransferIn => "TRANSFER_IN",
            TransactionKind::InterestApplied => "INTEREST",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
    description: String,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Decimal, description: impl Into<String>) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
            description: description.into(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Effect of this record on the owning account's balance. Transfer
    /// records only annotate the withdrawal/deposit pair that moved the money.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit | TransactionKind::InterestApplied => self.amount,
            TransactionKind::Withdrawal => -self.amount,
            TransactionKind::TransferOut | TransactionKind::TransferIn => Decimal::zero(),
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - ${:.2} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount,
            self.description
        )
    }
}

/// Flat view of an account used for listings and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: AccountId,
    pub owner: String,
    pub balance: Decimal,
}

impl fmt::Display for AccountSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account: {} | Owner: {} | Balance: ${:.2}",
            self.id, self.owner, self.balance
        )
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    owner: String,
    balance: Decimal,
    history: Vec<TransactionRecord>,
}

pub(crate) fn ensure_positive(amount: Decimal) -> Result<(), LedgerError> {
    if amount > Decimal::zero() {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount { amount })
    }
}

impl Account {
    /// Opens an account, recording the initial balance as its first deposit.
    pub fn open(
        id: impl Into<AccountId>,
        owner: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self, LedgerError> {
        if initial_balance < Decimal::zero() {
            return Err(LedgerError::InvalidAmount {
                amount: initial_balance,
            });
        }
        let mut account = Self {
            id: id.into(),
            owner: owner.into(),
            balance: Decimal::zero(),
            history: Vec::new(),
        };
        account.apply(TransactionRecord::new(
            TransactionKind::Deposit,
            initial_balance,
            "Initial deposit",
        ));
        Ok(account)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id.clone(),
            owner: self.owner.clone(),
            balance: self.balance,
        }
    }

    /// Snapshot of the transaction history, oldest first.
    pub fn history(&self) -> Vec<TransactionRecord> {
        self.history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Balance recomputed by replaying the history. Always equal to
    /// [`Account::balance`] unless an annotation was recorded with a
    /// balance-affecting kind.
    pub fn ledger_balance(&self) -> Decimal {
        self.history.iter().map(TransactionRecord::signed_amount).sum()
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let record = self.handle_deposit(amount, "Deposit")?;
        self.apply(record);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let record = self.handle_withdraw(amount, "Withdrawal")?;
        self.apply(record);
        Ok(())
    }

    /// Adds `amount` to the balance and records it under `kind`. The sign is
    /// not checked, callers compute the amount; only an out of range balance
    /// is rejected.
    pub fn apply_adjustment(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
        kind: TransactionKind,
    ) -> Result<(), LedgerError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::InvalidAmount { amount })?;
        self.history.push(TransactionRecord::new(kind, amount, description));
        Ok(())
    }

    /// Appends a record without touching the balance.
    ///
    /// Meant for annotations such as [`TransactionKind::TransferOut`]; using a
    /// balance-affecting kind here makes [`Account::ledger_balance`] diverge.
    pub fn record_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        description: impl Into<String>,
    ) {
        self.history.push(TransactionRecord::new(kind, amount, description));
    }

    /// Validates a credit and builds its record. Nothing is mutated.
    pub(crate) fn handle_deposit(
        &self,
        amount: Decimal,
        description: &str,
    ) -> Result<TransactionRecord, LedgerError> {
        ensure_positive(amount)?;
        if self.balance.checked_add(amount).is_none() {
            return Err(LedgerError::InvalidAmount { amount });
        }
        Ok(TransactionRecord::new(
            TransactionKind::Deposit,
            amount,
            description,
        ))
    }

    /// Validates a debit against the current balance and builds its record.
    /// Nothing is mutated.
    pub(crate) fn handle_withdraw(
        &self,
        amount: Decimal,
        description: &str,
    ) -> Result<TransactionRecord, LedgerError> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                account: self.id.clone(),
                balance: self.balance,
                requested: amount,
            });
        }
        Ok(TransactionRecord::new(
            TransactionKind::Withdrawal,
            amount,
            description,
        ))
    }

    /// Records are the source of truth, no validation happens here. Callers
    /// go through `handle_*` first, which keeps the balance in range.
    pub(crate) fn apply(&mut self, record: TransactionRecord) {
        self.balance += record.signed_amount();
        self.history.push(record);
    }
}
