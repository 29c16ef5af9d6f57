use std::str::from_utf8;

use cute_bank::{
    bin_utils::{Service, load_accounts},
    processor::{Ledger, in_memory_ledger::InMemoryLedger},
};
use rust_decimal::{Decimal, prelude::Zero};
use rust_decimal_macros::dec;

const ACCOUNTS_FILE: &str = "id,owner,balance\nA1,Ana Ruiz,10.50\nB2,Beto Díaz,0\n";

fn run_script(ledger: InMemoryLedger, script: &str) -> (String, InMemoryLedger) {
    let mut output = Vec::new();
    let service = Service {
        input: script.as_bytes(),
        output: &mut output,
        ledger,
    };
    let ledger = service.run().unwrap();
    (from_utf8(&output).unwrap().to_owned(), ledger)
}

#[test]
fn menu_session() {
    let script = [
        "1", "001", "200", // deposit
        "2", "001", "1300", // withdraw too much
        "3", "001", "002", "1200", // transfer everything
        "4", "002", // balance
        "6", "003", "2.5", // interest
        "8", "004", "Ana Ruiz", "25", // create account
        "8", "001", // duplicate
        "9", "004", "30", // fee declined
        "9", "004", "5", // fee applied
        "5", "001", // history
        "7", // list
        "42", // unknown option
        "0",
    ]
    .join("\n");
    let (output, ledger) = run_script(InMemoryLedger::with_sample_accounts().unwrap(), &script);

    assert!(output.contains("Deposit successful: $200.00"));
    assert!(output.contains(
        "Error: Insufficient funds in account 001: balance 1200.00, requested 1300"
    ));
    assert!(output.contains("Transfer successful: $1200.00 from 001 to 002"));
    assert!(output.contains("Current balance: $1700.00"));
    assert!(output.contains("Interest of $37.50 applied to 003"));
    assert!(output.contains("Account created successfully!"));
    assert!(output.contains("Error: Account already exists: 001"));
    assert!(output.contains("Fee of $30.00 not applied: balance of 004 is only $25.00"));
    assert!(output.contains("Fee of $5.00 applied to 004, new balance $20.00"));
    assert!(output.contains("] TRANSFER_OUT - $1200.00 - Transfer to: 002"));
    assert!(output.contains("Account: 004 | Owner: Ana Ruiz | Balance: $20.00"));
    assert!(output.contains("Error: Invalid option `42`, try again"));
    assert!(output.ends_with("Thank you for using our banking system!\n"));

    assert_eq!(ledger.balance("001").unwrap(), Decimal::zero());
    assert_eq!(ledger.balance("002").unwrap(), dec!(1700.00));
    assert_eq!(ledger.balance("003").unwrap(), dec!(1537.50));
    assert_eq!(ledger.history("001").unwrap().len(), 4);
    assert_eq!(ledger.list_accounts().len(), 4);
}

#[test]
fn input_errors_do_not_touch_the_ledger() {
    let script = [
        "1", "999", // unknown account, amount never asked
        "1", "001", "lots", // not a number
        "2", "001", "-5", // negative
        "6", "001", "0", // zero rate
        "8", "005", "", // missing owner
    ]
    .join("\n");
    let (output, ledger) = run_script(InMemoryLedger::with_sample_accounts().unwrap(), &script);

    assert!(output.contains("Error: Account not found: 999"));
    assert!(output.contains("Error: Invalid amount: `lots` is not a number"));
    assert!(output.contains("Error: Invalid amount: -5"));
    assert!(output.contains("Error: Invalid interest rate: 0%"));
    assert!(output.contains("Error: owner name is required"));

    assert_eq!(ledger.balance("001").unwrap(), dec!(1000.00));
    assert_eq!(ledger.history("001").unwrap().len(), 1);
    assert!(!ledger.account_exists("005"));
}

#[test]
fn export_loaded_accounts() {
    let mut ledger = InMemoryLedger::default();
    assert_eq!(load_accounts(&mut ledger, ACCOUNTS_FILE.as_bytes()).unwrap(), 2);

    let (output, _) = run_script(ledger, "10\n7\n");
    assert!(output.contains("id,owner,balance\nA1,Ana Ruiz,10.50\nB2,Beto Díaz,0\n"));
    assert!(output.contains("Account: B2 | Owner: Beto Díaz | Balance: $0.00"));
}

#[test]
fn load_rejects_duplicates() {
    let mut ledger = InMemoryLedger::with_sample_accounts().unwrap();
    let err = load_accounts(&mut ledger, "id,owner,balance\n002,Twin,1\n".as_bytes()).unwrap_err();
    assert_eq!(err.to_string(), "Cannot open account at line 2");
    assert_eq!(ledger.list_accounts().len(), 3);

    let err = load_accounts(&mut ledger, "id,owner,balance\n007,Bond,-7\n".as_bytes()).unwrap_err();
    assert_eq!(
        format!("{err:#}"),
        "Cannot open account at line 2: Invalid amount: -7"
    );
}

#[test]
fn transfer_to_same_account() {
    let (output, ledger) = run_script(
        InMemoryLedger::with_sample_accounts().unwrap(),
        "3\n001\n001\n5\n5\n001\n",
    );

    assert!(output.contains("Transfer successful: $5.00 from 001 to 001"));
    assert!(output.contains("] TRANSFER_OUT - $5.00 - Transfer to: 001"));
    assert!(output.contains("] TRANSFER_IN - $5.00 - Transfer from: 001"));
    assert_eq!(ledger.balance("001").unwrap(), dec!(1000.00));
    assert_eq!(ledger.history("001").unwrap().len(), 5);
}

#[test]
fn out_of_range_amounts_are_reported() {
    let max = Decimal::MAX.to_string();
    let max = max.as_str();
    let script = [
        "1", "001", max, // deposit
        "6", "001", max, // interest rate
        "3", "002", "001", "500", // transfer is fine
        "8", "009", "Full", max, // open at the maximum
        "1", "009", "1", // then top it up
    ]
    .join("\n");
    let (output, ledger) = run_script(InMemoryLedger::with_sample_accounts().unwrap(), &script);

    assert!(output.contains(&format!("Error: Invalid amount: {max}")));
    assert!(output.contains(&format!("Error: Invalid interest rate: {max}%")));
    assert!(output.contains("Transfer successful: $500.00 from 002 to 001"));
    assert!(output.contains("Error: Invalid amount: 1\n"));

    assert_eq!(ledger.balance("001").unwrap(), dec!(1500.00));
    assert_eq!(ledger.history("001").unwrap().len(), 3);
    assert_eq!(ledger.balance("009").unwrap(), Decimal::MAX);
    assert_eq!(ledger.history("009").unwrap().len(), 1);
}

#[test]
fn empty_directory_listing() {
    let (output, _) = run_script(InMemoryLedger::default(), "7\n");
    assert!(output.contains("No accounts registered."));
}
