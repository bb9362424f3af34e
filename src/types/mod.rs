//! Identifier types shared across the banking core.

/// Unique identifier of an account within a bank, fixed at creation.
pub type AccountNumber = u32;

/// Unique identifier of a customer within a bank's registry.
pub type CustomerId = u32;

/// Ledger sequence number, assigned by the bank at append time and never
/// reused.
pub type TransactionId = u64;
