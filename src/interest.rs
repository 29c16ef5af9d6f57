use rust_decimal::{Decimal, prelude::Zero};

use crate::{
    account::{Account, TransactionKind, ensure_positive},
    error::LedgerError,
};

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Result of charging a maintenance fee. A declined fee is a normal
/// business outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum FeeOutcome {
    Applied { fee: Decimal, balance: Decimal },
    Declined { fee: Decimal, balance: Decimal },
}

impl FeeOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, FeeOutcome::Applied { .. })
    }
}

/// Credits `balance * rate_percent / 100` and returns the interest amount.
pub fn apply_monthly_interest(
    account: &mut Account,
    rate_percent: Decimal,
) -> Result<Decimal, LedgerError> {
    if rate_percent <= Decimal::zero() {
        return Err(LedgerError::InvalidRate { rate: rate_percent });
    }
    let invalid_rate = || LedgerError::InvalidRate { rate: rate_percent };
    let interest = account
        .balance()
        .checked_mul(rate_percent)
        .ok_or_else(invalid_rate)?
        / PERCENT;
    if account.balance().checked_add(interest).is_none() {
        return Err(invalid_rate());
    }
    account.apply_adjustment(
        interest,
        format!("Monthly interest ({rate_percent:.2}%)"),
        TransactionKind::InterestApplied,
    )?;
    Ok(interest)
}

/// Withdraws `fee` when the balance covers it, otherwise leaves the account
/// untouched and reports [`FeeOutcome::Declined`].
pub fn apply_maintenance_fee(
    account: &mut Account,
    fee: Decimal,
) -> Result<FeeOutcome, LedgerError> {
    ensure_positive(fee)?;
    if account.balance() < fee {
        return Ok(FeeOutcome::Declined {
            fee,
            balance: account.balance(),
        });
    }
    let record = account.handle_withdraw(fee, "Maintenance fee")?;
    account.apply(record);
    Ok(FeeOutcome::Applied {
        fee,
        balance: account.balance(),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::account::TransactionRecord;

    fn account(balance: Decimal) -> Account {
        Account::open("003", "Carlos López", balance).unwrap()
    }

    #[test]
    fn interest_uses_pre_update_balance() {
        let mut acc = account(dec!(1500.00));
        let interest = apply_monthly_interest(&mut acc, dec!(2.5)).unwrap();
        assert_eq!(interest, dec!(37.5));
        assert_eq!(acc.balance(), dec!(1537.50));

        let history = acc.history();
        assert_eq!(history.len(), 2);
        let last = history.last().unwrap();
        assert_eq!(last.kind(), TransactionKind::InterestApplied);
        assert_eq!(last.amount(), dec!(37.5));
        assert_eq!(last.description(), "Monthly interest (2.50%)");
        assert_eq!(acc.ledger_balance(), acc.balance());
    }

    #[test]
    fn interest_on_zero_balance_is_recorded() {
        let mut acc = account(Decimal::zero());
        assert_eq!(
            apply_monthly_interest(&mut acc, dec!(1)).unwrap(),
            Decimal::zero()
        );
        assert_eq!(acc.history_len(), 2);
    }

    #[test]
    fn non_positive_rate() {
        let mut acc = account(dec!(100));
        for rate in [Decimal::zero(), dec!(-3)] {
            assert_eq!(
                apply_monthly_interest(&mut acc, rate).unwrap_err(),
                LedgerError::InvalidRate { rate }
            );
        }
        assert_eq!(acc.balance(), dec!(100));
        assert_eq!(acc.history_len(), 1);
    }

    #[test]
    fn out_of_range_rate() {
        let mut acc = account(dec!(1000.00));
        assert_eq!(
            apply_monthly_interest(&mut acc, Decimal::MAX).unwrap_err(),
            LedgerError::InvalidRate { rate: Decimal::MAX }
        );

        assert_eq!(acc.balance(), dec!(1000.00));

        // product fits, but the new balance would not
        let nearly_full = Decimal::MAX - dec!(1);
        let mut acc = account(nearly_full);
        assert_eq!(
            apply_monthly_interest(&mut acc, dec!(1)).unwrap_err(),
            LedgerError::InvalidRate { rate: dec!(1) }
        );
        assert_eq!(acc.balance(), nearly_full);
        assert_eq!(acc.history_len(), 1);
    }

    #[test]
    fn fee_applied() {
        let mut acc = account(dec!(100));
        let outcome = apply_maintenance_fee(&mut acc, dec!(100)).unwrap();
        assert_eq!(
            outcome,
            FeeOutcome::Applied {
                fee: dec!(100),
                balance: Decimal::zero()
            }
        );
        assert!(outcome.is_applied());
        let kinds: Vec<_> = acc.history().iter().map(TransactionRecord::kind).collect();
        assert_eq!(
            kinds,
            vec![TransactionKind::Deposit, TransactionKind::Withdrawal]
        );
    }

    #[test]
    fn fee_declined_leaves_account_untouched() {
        let mut acc = account(dec!(9.99));
        let outcome = apply_maintenance_fee(&mut acc, dec!(10)).unwrap();
        assert_eq!(
            outcome,
            FeeOutcome::Declined {
                fee: dec!(10),
                balance: dec!(9.99)
            }
        );
        assert!(!outcome.is_applied());
        assert_eq!(acc.balance(), dec!(9.99));
        assert_eq!(acc.history_len(), 1);
    }

    #[test]
    fn non_positive_fee() {
        let mut acc = account(dec!(10));
        assert_eq!(
            apply_maintenance_fee(&mut acc, Decimal::zero()).unwrap_err(),
            LedgerError::InvalidAmount {
                amount: Decimal::zero()
            }
        );
        assert_eq!(acc.history_len(), 1);
    }
}
