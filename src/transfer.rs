use rust_decimal::Decimal;

use crate::{
    account::{TransactionKind, TransactionRecord, ensure_positive},
    directory::{AccountDirectory, AccountPair},
    error::LedgerError,
};

/// Balances of both accounts once a transfer went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    pub amount: Decimal,
    pub source_balance: Decimal,
    pub destination_balance: Decimal,
}

/// Moves `amount` from `source_id` to `destination_id`.
///
/// Both legs are validated and their records built before anything is
/// applied, so a rejected transfer leaves both accounts untouched. On
/// success the source gets a `Withdrawal` followed by a `TransferOut`
/// annotation and the destination a `Deposit` followed by a `TransferIn`.
/// A transfer to the same account applies all four records to it and
/// leaves its balance unchanged.
pub fn transfer(
    directory: &mut AccountDirectory,
    source_id: &str,
    destination_id: &str,
    amount: Decimal,
) -> Result<TransferReceipt, LedgerError> {
    ensure_positive(amount)?;
    let sent = TransactionRecord::new(
        TransactionKind::TransferOut,
        amount,
        format!("Transfer to: {destination_id}"),
    );
    let received = TransactionRecord::new(
        TransactionKind::TransferIn,
        amount,
        format!("Transfer from: {source_id}"),
    );

    match directory.find_pair_mut(source_id, destination_id)? {
        AccountPair::Distinct(source, destination) => {
            let debit = source.handle_withdraw(amount, "Withdrawal")?;
            let credit = destination.handle_deposit(amount, "Deposit")?;

            // nothing below can fail
            source.apply(debit);
            destination.apply(credit);
            source.apply(sent);
            destination.apply(received);

            Ok(TransferReceipt {
                amount,
                source_balance: source.balance(),
                destination_balance: destination.balance(),
            })
        }
        AccountPair::Same(account) => {
            let debit = account.handle_withdraw(amount, "Withdrawal")?;
            // the credit restores the balance the debit was checked against
            let credit = TransactionRecord::new(TransactionKind::Deposit, amount, "Deposit");

            account.apply(debit);
            account.apply(credit);
            account.apply(sent);
            account.apply(received);

            Ok(TransferReceipt {
                amount,
                source_balance: account.balance(),
                destination_balance: account.balance(),
            })
        }
    }
}
