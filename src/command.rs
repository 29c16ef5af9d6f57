use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{account::AccountId, interest::FeeOutcome, transfer::TransferReceipt};

/// Every state-changing operation the ledger accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    CreateAccount {
        id: AccountId,
        owner: String,
        initial_balance: Decimal,
    },
    Deposit {
        id: AccountId,
        amount: Decimal,
    },
    Withdraw {
        id: AccountId,
        amount: Decimal,
    },
    Transfer {
        source: AccountId,
        destination: AccountId,
        amount: Decimal,
    },
    ApplyInterest {
        id: AccountId,
        rate_percent: Decimal,
    },
    ApplyMaintenanceFee {
        id: AccountId,
        fee: Decimal,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    AccountCreated { id: AccountId },
    Deposited { id: AccountId, balance: Decimal },
    Withdrawn { id: AccountId, balance: Decimal },
    Transferred(TransferReceipt),
    InterestApplied { id: AccountId, interest: Decimal },
    MaintenanceFee { id: AccountId, outcome: FeeOutcome },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Transfer,
    Balance,
    History,
    ApplyInterest,
    ListAccounts,
    CreateAccount,
    MaintenanceFee,
    ExportAccounts,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid option `{0}`, try again")]
    UnknownOption(String),
    #[error("{field} is required")]
    EmptyField { field: &'static str },
    #[error("Invalid {field}: `{input}` is not a number")]
    InvalidNumber { field: &'static str, input: String },
}

impl FromStr for MenuOption {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let option = match s.trim() {
            "1" => MenuOption::Deposit,
            "2" => MenuOption::Withdraw,
            "3" => MenuOption::Transfer,
            "4" => MenuOption::Balance,
            "5" => MenuOption::History,
            "6" => MenuOption::ApplyInterest,
            "7" => MenuOption::ListAccounts,
            "8" => MenuOption::CreateAccount,
            "9" => MenuOption::MaintenanceFee,
            "10" => MenuOption::ExportAccounts,
            "0" => MenuOption::Exit,
            other => return Err(CommandError::UnknownOption(other.to_string())),
        };
        Ok(option)
    }
}

/// Trims raw input and rejects empty values.
pub fn parse_text(field: &'static str, input: &str) -> Result<String, CommandError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(CommandError::EmptyField { field });
    }
    Ok(value.to_string())
}

/// Parses a decimal number. Sign is not checked here, the ledger does that.
pub fn parse_decimal(field: &'static str, input: &str) -> Result<Decimal, CommandError> {
    let value = parse_text(field, input)?;
    Decimal::from_str(&value).map_err(|_| CommandError::InvalidNumber {
        field,
        input: value,
    })
}
