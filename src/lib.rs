// Bank Ledger - Core Library
// Exposes the banking core for use by the CLI shell and tests

pub mod bank;
pub mod batch;
pub mod models;
pub mod types;

pub use bank::Bank;
pub use models::{Account, AccountKind, BankError, Customer, Transaction, TransactionKind};
