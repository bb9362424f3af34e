use super::apply_file;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use rust_decimal_macros::dec;
use tempfile::NamedTempFile;

use crate::bank::Bank;

fn create_temporary_csv(rows: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;

    writeln!(file, "op,account,kind,holder,amount")?;

    for row in rows {
        writeln!(file, "{row}")?;
    }

    Ok(file)
}

#[test]
fn test_batch_applies_valid_rows_in_file_order() -> Result<()> {
    let file = create_temporary_csv(&[
        "open,1,savings,Alice,100.0",
        "open,2,checking,Bob,0",
        "deposit,1,,,100",
        "withdraw,2,,,400",
    ])?;

    let mut bank = Bank::new();
    let applied = apply_file(&mut bank, file.path())?;

    assert_eq!(applied, 4);
    assert_eq!(bank.balance_of(1)?, dec!(203.00));
    assert_eq!(bank.balance_of(2)?, dec!(-400));
    assert_eq!(bank.transactions().len(), 2);

    Ok(())
}

#[test]
fn test_batch_skips_unreadable_rows_and_continues() -> Result<()> {
    let file = create_temporary_csv(&[
        "open,1,savings,Alice,10.0",
        "freeze,1,,,",
        "deposit,not-a-number,,,5",
        "deposit,1,,,10",
    ])?;

    let mut bank = Bank::new();
    let applied = apply_file(&mut bank, file.path())?;

    assert_eq!(applied, 2);
    assert_eq!(bank.balance_of(1)?, dec!(20.30));

    Ok(())
}

#[test]
fn test_batch_skips_rows_the_bank_rejects() -> Result<()> {
    let file = create_temporary_csv(&[
        "open,1,savings,Alice,50",
        "withdraw,1,,,60",
        "deposit,99,,,10",
        "open,1,checking,Mallory,0",
    ])?;

    let mut bank = Bank::new();
    let applied = apply_file(&mut bank, file.path())?;

    assert_eq!(applied, 1);
    assert_eq!(bank.balance_of(1)?, dec!(50));
    assert!(bank.transactions().is_empty());

    Ok(())
}

#[test]
fn test_batch_skips_open_rows_with_missing_fields() -> Result<()> {
    let file = create_temporary_csv(&[
        "open,1,savings,,100",
        "open,2,,Bob,100",
        "open,3,checking,Carol,",
    ])?;

    let mut bank = Bank::new();
    let applied = apply_file(&mut bank, file.path())?;

    // An omitted opening balance means zero; omitted kind or holder is a
    // skipped row.
    assert_eq!(applied, 1);
    assert!(bank.account(1).is_none());
    assert!(bank.account(2).is_none());
    assert_eq!(bank.balance_of(3)?, dec!(0));

    Ok(())
}

#[test]
fn test_batch_reports_a_missing_file() {
    let mut bank = Bank::new();

    assert!(apply_file(&mut bank, Path::new("missing.csv")).is_err());
    assert!(bank.transactions().is_empty());
}
