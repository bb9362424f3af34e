use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{AccountNumber, CustomerId};

/// Failures the banking core reports to its callers.
///
/// None of these are fatal: every error leaves the bank untouched and the
/// caller may retry with corrected input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    #[error("account {account_number} not found")]
    AccountNotFound {
        account_number: AccountNumber,
    },
    #[error("account {account_number} already exists")]
    DuplicateAccountNumber {
        account_number: AccountNumber,
    },
    #[error("insufficient funds on account {account_number}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account_number: AccountNumber,
        requested: Decimal,
        balance: Decimal,
    },
    #[error("overdraft limit reached on account {account_number}: balance {balance}, requested {requested}")]
    OverdraftLimitExceeded {
        account_number: AccountNumber,
        requested: Decimal,
        balance: Decimal,
    },
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount {
        amount: Decimal,
    },
    #[error("customer {customer_id} not found")]
    CustomerNotFound {
        customer_id: CustomerId,
    },
}
