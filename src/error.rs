use rust_decimal::Decimal;
use thiserror::Error;

use crate::account::AccountId;

/// Every way a ledger operation can be rejected.
///
/// An amount or rate is invalid when it is not positive or when applying it
/// would push a balance out of the representable range.
///
/// A declined maintenance fee is not an error, see [`crate::interest::FeeOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: Decimal },
    #[error("Invalid interest rate: {rate}%")]
    InvalidRate { rate: Decimal },
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: AccountId,
        balance: Decimal,
        requested: Decimal,
    },
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountId),
}
