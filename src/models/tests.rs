use super::{Account, AccountKind, BankError, Customer};

use rust_decimal_macros::dec;

fn savings(balance: rust_decimal::Decimal) -> Account {
    Account::new(AccountKind::Savings, 1, "Alice", balance)
}

fn checking(balance: rust_decimal::Decimal) -> Account {
    Account::new(AccountKind::Checking, 2, "Bob", balance)
}

#[test]
fn test_savings_deposit_credits_bonus() {
    let mut account = savings(dec!(100.00));

    account.deposit(dec!(100));

    assert_eq!(account.balance(), dec!(203.00));
}

#[test]
fn test_checking_deposit_credits_exact_amount() {
    let mut account = checking(dec!(50.00));

    account.deposit(dec!(25.50));

    assert_eq!(account.balance(), dec!(75.50));
}

#[test]
fn test_savings_withdrawal_cannot_go_negative() {
    let mut account = savings(dec!(50));

    let result = account.withdraw(dec!(60));

    assert!(matches!(result, Err(BankError::InsufficientFunds { .. })));
    assert_eq!(account.balance(), dec!(50));
}

#[test]
fn test_savings_withdrawal_to_exactly_zero_succeeds() {
    let mut account = savings(dec!(50));

    assert!(account.withdraw(dec!(50)).is_ok());
    assert_eq!(account.balance(), dec!(0));
}

#[test]
fn test_checking_withdrawal_may_use_overdraft() {
    let mut account = checking(dec!(0));

    assert!(account.withdraw(dec!(400)).is_ok());
    assert_eq!(account.balance(), dec!(-400));
}

#[test]
fn test_checking_withdrawal_stops_at_overdraft_limit() {
    let mut account = checking(dec!(-400));

    let result = account.withdraw(dec!(200));

    assert!(matches!(result, Err(BankError::OverdraftLimitExceeded { .. })));
    assert_eq!(account.balance(), dec!(-400));

    // Landing exactly on the floor is still allowed.
    assert!(account.withdraw(dec!(100)).is_ok());
    assert_eq!(account.balance(), dec!(-500));
}

#[test]
fn test_account_identity_is_preserved() {
    let account = Account::new(AccountKind::Savings, 7, "Carol", dec!(10));

    assert_eq!(account.account_number(), 7);
    assert_eq!(account.holder_name(), "Carol");
    assert_eq!(account.kind(), AccountKind::Savings);
}

#[test]
fn test_error_messages_match_reported_phrases() {
    let not_found = BankError::AccountNotFound { account_number: 999 };
    assert_eq!(not_found.to_string(), "account 999 not found");

    let insufficient = BankError::InsufficientFunds {
        account_number: 1,
        requested: dec!(60),
        balance: dec!(50),
    };
    assert!(insufficient.to_string().starts_with("insufficient funds"));

    let overdraft = BankError::OverdraftLimitExceeded {
        account_number: 2,
        requested: dec!(200),
        balance: dec!(-400),
    };
    assert!(overdraft.to_string().starts_with("overdraft limit reached"));
}

#[test]
fn test_customer_links_accounts_in_order_without_duplicates() {
    let mut customer = Customer::new(1, "Alice");

    customer.link_account(10);
    customer.link_account(20);
    customer.link_account(10);

    assert_eq!(customer.id(), 1);
    assert_eq!(customer.name(), "Alice");
    assert_eq!(customer.accounts(), &[10, 20]);
}
