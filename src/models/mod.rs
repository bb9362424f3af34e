mod account;
mod customer;
mod errors;
#[cfg(test)]
mod tests;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Deserialize;

pub use account::Account;
pub use customer::Customer;
pub use errors::BankError;
pub use transaction::Transaction;

/// The account variants offered by the bank. Each variant owns its own
/// balance policy: the deposit bonus rate and the withdrawal floor.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Savings,
    Checking,
}

impl Display for AccountKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Savings => write!(formatter, "savings"),
            AccountKind::Checking => write!(formatter, "checking"),
        }
    }
}

/// The ledger operation types supported by the bank.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(formatter, "deposit"),
            TransactionKind::Withdrawal => write!(formatter, "withdrawal"),
        }
    }
}
