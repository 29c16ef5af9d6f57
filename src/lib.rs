/// The closed set of reasons a ledger operation is rejected.
pub mod error;

/// Account balance plus its append-only transaction history.
/// Operations validate first and build a record, then apply it.
pub mod account;

/// Owns every account, keyed by id.
pub mod directory;

/// Atomic movement of funds between two accounts of a directory.
pub mod transfer;

/// Interest accrual and maintenance fees computed from the current balance.
pub mod interest;

/// Ledger commands and parsing of raw front end input.
pub mod command;

/// Ledger service interface, plus "in memory" implementation.
///
/// NOTE: the trait is the seam a different front end (or a persistent
/// ledger) would plug into.
pub mod processor;

/// Interactive menu, CSV account loading and CSV export. Lives in the
/// library so the integration tests can drive it.
pub mod bin_utils;
