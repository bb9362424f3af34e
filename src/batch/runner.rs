use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, warn};

use crate::bank::Bank;
use crate::models::{AccountKind, TransactionKind};
use crate::types::AccountNumber;

/// The operations accepted in a batch file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Open,
    Deposit,
    Withdraw,
}

/// Represents a single row from a batch operations file.
///
/// `kind` and `holder` are only meaningful for `open` rows; `amount` is the
/// opening balance for `open` (empty means zero) and the operation amount
/// otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationRecord {
    pub op: Operation,
    pub account: AccountNumber,
    pub kind: Option<AccountKind>,
    pub holder: Option<String>,
    pub amount: Option<Decimal>,
}

/// Applies every row of a CSV operations file to the bank, in file order.
///
/// Rows that fail to parse or are rejected by the bank are logged and
/// skipped; the rest of the file still applies. Returns the number of rows
/// applied.
///
/// # Errors
/// Only the file itself is fatal: a path that cannot be opened is reported
/// as an error, individual rows never are.
pub fn apply_file(bank: &mut Bank, path: &Path) -> anyhow::Result<usize> {
    let file = File::open(path)
        .with_context(|| format!("opening batch file {}", path.display()))?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut applied = 0;
    for (row, result) in reader.deserialize::<OperationRecord>().enumerate() {
        // Header is line 1, the first record line 2.
        let line = row + 2;
        match result {
            Ok(record) => match apply_record(bank, &record) {
                Ok(()) => applied += 1,
                Err(reason) => warn!("line {line} skipped: {reason:#}"),
            },
            Err(reason) => error!("line {line} unreadable: {reason}"),
        }
    }

    Ok(applied)
}

fn apply_record(bank: &mut Bank, record: &OperationRecord) -> anyhow::Result<()> {
    match record.op {
        Operation::Open => {
            let kind = record.kind.context("open row is missing the account kind")?;
            let holder = record
                .holder
                .as_deref()
                .context("open row is missing the holder name")?;
            let initial_balance = record.amount.unwrap_or(Decimal::ZERO);

            bank.open_account(kind, record.account, holder, initial_balance)?;
        }
        Operation::Deposit => {
            let amount = record.amount.context("deposit row is missing an amount")?;
            bank.make_transaction(record.account, amount, TransactionKind::Deposit)?;
        }
        Operation::Withdraw => {
            let amount = record.amount.context("withdraw row is missing an amount")?;
            bank.make_transaction(record.account, amount, TransactionKind::Withdrawal)?;
        }
    }

    Ok(())
}
