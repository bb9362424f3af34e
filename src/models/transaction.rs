use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::TransactionKind;
use crate::types::{AccountNumber, TransactionId};

/// Represents one completed ledger event.
///
/// A transaction is constructed by the bank after the balance mutation has
/// succeeded and is never modified afterwards; rejected operations produce
/// no transaction at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Ledger sequence number, strictly increasing per bank.
    pub id: TransactionId,
    /// The affected account, referenced by number (lookup only).
    pub account_number: AccountNumber,
    /// Positive magnitude of the operation.
    pub amount: Decimal,
    /// The operation that produced this record.
    pub kind: TransactionKind,
    /// Capture time of the event.
    pub timestamp: DateTime<Utc>,
}

impl Display for Transaction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "[{}] {} {} on account {} at {}",
            self.id,
            self.kind,
            self.amount,
            self.account_number,
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}
