use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Account, AccountKind, BankError, Customer, Transaction, TransactionKind};
use crate::types::{AccountNumber, CustomerId, TransactionId};

/// The bank aggregate: the account collection, the append-only transaction
/// ledger, and the customer registry.
///
/// A `Bank` is an explicitly constructed value with no global state. It is
/// single-threaded and synchronous; callers that need shared access wrap
/// the whole instance in a lock, since [`Bank::make_transaction`] must be
/// observed as one unit (balance check, mutation and ledger append).
#[derive(Debug, Default)]
pub struct Bank {
    accounts: HashMap<AccountNumber, Account>,
    ledger: Vec<Transaction>,
    transaction_counter: TransactionId,
    customers: Vec<Customer>,
}

impl Bank {
    /// Creates an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new account under its account number.
    ///
    /// # Errors
    /// Returns `DuplicateAccountNumber` when the number is already taken;
    /// the existing account is left untouched.
    pub fn open_account(
        &mut self,
        kind: AccountKind,
        account_number: AccountNumber,
        holder_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<(), BankError> {
        if self.accounts.contains_key(&account_number) {
            return Err(BankError::DuplicateAccountNumber { account_number });
        }

        let account = Account::new(kind, account_number, holder_name, initial_balance);
        debug!("opened {} account [{}]", account.kind(), account_number);
        self.accounts.insert(account_number, account);

        Ok(())
    }

    /// Looks up an account by number.
    pub fn account(&self, account_number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&account_number)
    }

    /// All accounts in ascending account number order.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.account_number());
        accounts
    }

    /// Reads the current balance of an account. Mutates nothing.
    ///
    /// # Errors
    /// Returns `AccountNotFound` when the number has no matching account.
    pub fn balance_of(&self, account_number: AccountNumber) -> Result<Decimal, BankError> {
        self.account(account_number)
            .map(Account::balance)
            .ok_or(BankError::AccountNotFound { account_number })
    }

    /// Applies a deposit or withdrawal to an account and records the event
    /// in the ledger.
    ///
    /// The balance mutation, the counter increment and the ledger append
    /// succeed or fail together: a rejected operation consumes no
    /// transaction id and appends nothing. Returns the appended record.
    ///
    /// # Errors
    /// Returns `NonPositiveAmount` for amounts that are zero or negative,
    /// `AccountNotFound` for unknown account numbers, and the variant
    /// policy error for a rejected withdrawal.
    pub fn make_transaction(
        &mut self,
        account_number: AccountNumber,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<Transaction, BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::NonPositiveAmount { amount });
        }

        let account = self
            .accounts
            .get_mut(&account_number)
            .ok_or(BankError::AccountNotFound { account_number })?;

        match kind {
            TransactionKind::Deposit => account.deposit(amount),
            TransactionKind::Withdrawal => account.withdraw(amount)?,
        }

        self.transaction_counter += 1;
        let transaction = Transaction {
            id: self.transaction_counter,
            account_number,
            amount,
            kind,
            timestamp: Utc::now(),
        };
        debug!("ledger append: {transaction}");
        self.ledger.push(transaction.clone());

        Ok(transaction)
    }

    /// The ledger contents in append order. The caller renders
    /// "no transactions" for an empty slice.
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger
    }

    /// Adds a customer to the registry and returns the assigned id.
    pub fn register_customer(&mut self, name: impl Into<String>) -> CustomerId {
        let customer_id = self.customers.len() as CustomerId + 1;
        self.customers.push(Customer::new(customer_id, name));
        customer_id
    }

    /// Looks up a customer by id.
    pub fn customer(&self, customer_id: CustomerId) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| customer.id() == customer_id)
    }

    /// Links an existing account to an existing customer. Linking the same
    /// account twice is a no-op.
    ///
    /// # Errors
    /// Returns `AccountNotFound` or `CustomerNotFound` when either side of
    /// the link is missing.
    pub fn link_account(
        &mut self,
        customer_id: CustomerId,
        account_number: AccountNumber,
    ) -> Result<(), BankError> {
        if !self.accounts.contains_key(&account_number) {
            return Err(BankError::AccountNotFound { account_number });
        }

        let customer = self
            .customers
            .iter_mut()
            .find(|customer| customer.id() == customer_id)
            .ok_or(BankError::CustomerNotFound { customer_id })?;

        customer.link_account(account_number);

        Ok(())
    }
}
