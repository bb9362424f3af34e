use rust_decimal::Decimal;

use crate::models::{AccountKind, BankError};
use crate::types::AccountNumber;

impl AccountKind {
    /// Lowest balance a withdrawal may leave behind for this variant.
    pub fn floor(self) -> Decimal {
        match self {
            // Savings may never go negative.
            AccountKind::Savings => Decimal::ZERO,
            // Checking carries a fixed overdraft allowance of 500.
            AccountKind::Checking => Decimal::new(-500, 0),
        }
    }

    /// Bonus rate credited on top of every deposit for this variant.
    fn deposit_bonus_rate(self) -> Decimal {
        match self {
            // 3% per individual deposit, not a periodic accrual.
            AccountKind::Savings => Decimal::new(3, 2),
            AccountKind::Checking => Decimal::ZERO,
        }
    }
}

/// Represents the state of a single bank account.
///
/// Identity fields are fixed at creation; the balance only changes through
/// [`Account::deposit`] and [`Account::withdraw`]. Accounts are never
/// removed, so there is no terminal state.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    holder_name: String,
    kind: AccountKind,
    balance: Decimal,
}

impl Account {
    /// Creates a new account with the given opening balance.
    pub fn new(
        kind: AccountKind,
        account_number: AccountNumber,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Self {
        Self {
            account_number,
            holder_name: holder_name.into(),
            kind,
            balance: initial_balance,
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Current balance. Pure read, no side effect.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Credits `amount` according to the variant policy.
    ///
    /// Savings accounts earn the per-deposit bonus on top of the amount;
    /// checking accounts are credited the amount exactly. Deposits cannot
    /// fail.
    pub fn deposit(&mut self, amount: Decimal) {
        let bonus = amount * self.kind.deposit_bonus_rate();
        self.balance += amount + bonus;
    }

    /// Attempts to debit `amount`.
    ///
    /// # Errors
    /// Returns `InsufficientFunds` (savings) or `OverdraftLimitExceeded`
    /// (checking) when the debit would push the balance below the variant
    /// floor. The balance is left untouched on failure; landing exactly on
    /// the floor succeeds.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        let remaining = self.balance - amount;

        if remaining < self.kind.floor() {
            return Err(match self.kind {
                AccountKind::Savings => BankError::InsufficientFunds {
                    account_number: self.account_number,
                    requested: amount,
                    balance: self.balance,
                },
                AccountKind::Checking => BankError::OverdraftLimitExceeded {
                    account_number: self.account_number,
                    requested: amount,
                    balance: self.balance,
                },
            });
        }

        self.balance = remaining;

        Ok(())
    }
}
