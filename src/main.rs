use std::fmt::Display;
use std::io::{self, BufRead, BufWriter, Write, stdout};
use std::path::Path;
use std::process::exit;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use bank_ledger::Bank;
use bank_ledger::batch;
use bank_ledger::models::{AccountKind, TransactionKind};
use bank_ledger::types::AccountNumber;

type InputLines = io::Lines<io::StdinLock<'static>>;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: bank-ledger [operations.csv] [log_level]");
        eprintln!("Without a batch file an interactive teller menu is started.");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(0);
    }

    let log_level = args
        .get(2)
        .map(|level| parse_log_level(level))
        .unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let mut bank = Bank::new();

    match args.get(1) {
        Some(path) => run_batch(&mut bank, Path::new(path)),
        None => run_interactive(&mut bank),
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries program output, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

fn run_batch(bank: &mut Bank, path: &Path) -> Result<()> {
    let timer = Instant::now();
    let applied = batch::apply_file(bank, path)?;
    info!("applied {applied} operations in {:?}", timer.elapsed());

    write_summary(bank)
}

fn write_summary(bank: &Bank) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "account,holder,kind,balance")?;

    for account in bank.accounts() {
        writeln!(
            output,
            "{},{},{},{}",
            account.account_number(),
            account.holder_name(),
            account.kind(),
            account.balance()
        )?;
    }

    writeln!(output)?;

    if bank.transactions().is_empty() {
        writeln!(output, "no transactions")?;
    } else {
        for transaction in bank.transactions() {
            writeln!(output, "{transaction}")?;
        }
    }

    output.flush()?;

    Ok(())
}

fn run_interactive(bank: &mut Bank) -> Result<()> {
    let mut lines = io::stdin().lock().lines();

    loop {
        print_menu()?;
        let Some(choice) = next_line(&mut lines)? else {
            break;
        };

        match choice.trim() {
            "1" => open_account_flow(bank, &mut lines)?,
            "2" => transaction_flow(bank, &mut lines, TransactionKind::Deposit)?,
            "3" => transaction_flow(bank, &mut lines, TransactionKind::Withdrawal)?,
            "4" => balance_flow(bank, &mut lines)?,
            "5" => list_transactions(bank),
            "6" | "q" => break,
            "" => {}
            other => println!("unknown option: {other}"),
        }
    }

    Ok(())
}

fn print_menu() -> Result<()> {
    println!();
    println!("1) open account");
    println!("2) deposit");
    println!("3) withdraw");
    println!("4) view balance");
    println!("5) list transactions");
    println!("6) exit");
    print!("> ");
    stdout().flush()?;

    Ok(())
}

fn next_line(lines: &mut InputLines) -> Result<Option<String>> {
    Ok(lines.next().transpose()?)
}

fn prompt(label: &str, lines: &mut InputLines) -> Result<Option<String>> {
    print!("{label}: ");
    stdout().flush()?;

    next_line(lines)
}

/// Reads one value from the console; a line that does not parse is reported
/// and aborts the current flow, so malformed input never reaches the bank.
fn read_parsed<T>(label: &str, lines: &mut InputLines) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = prompt(label, lines)? else {
        return Ok(None);
    };

    match raw.trim().parse::<T>() {
        Ok(value) => Ok(Some(value)),
        Err(reason) => {
            println!("invalid {label}: {reason}");
            Ok(None)
        }
    }
}

fn open_account_flow(bank: &mut Bank, lines: &mut InputLines) -> Result<()> {
    let Some(kind) = prompt("account type (1 savings, 2 checking)", lines)? else {
        return Ok(());
    };
    let kind = match kind.trim() {
        "1" => AccountKind::Savings,
        "2" => AccountKind::Checking,
        other => {
            println!("unknown account type: {other}");
            return Ok(());
        }
    };

    let Some(account_number) = read_parsed::<AccountNumber>("account number", lines)? else {
        return Ok(());
    };
    let Some(holder_name) = prompt("holder name", lines)? else {
        return Ok(());
    };
    let Some(initial_balance) = read_parsed::<Decimal>("initial balance", lines)? else {
        return Ok(());
    };

    match bank.open_account(kind, account_number, holder_name.trim(), initial_balance) {
        Ok(()) => println!("account {account_number} opened"),
        Err(reason) => println!("{reason}"),
    }

    Ok(())
}

fn transaction_flow(bank: &mut Bank, lines: &mut InputLines, kind: TransactionKind) -> Result<()> {
    let Some(account_number) = read_parsed::<AccountNumber>("account number", lines)? else {
        return Ok(());
    };
    let Some(amount) = read_parsed::<Decimal>("amount", lines)? else {
        return Ok(());
    };

    match bank.make_transaction(account_number, amount, kind) {
        Ok(transaction) => {
            let balance = bank.balance_of(account_number)?;
            println!("recorded {transaction}; new balance {balance}");
        }
        Err(reason) => println!("{reason}"),
    }

    Ok(())
}

fn balance_flow(bank: &Bank, lines: &mut InputLines) -> Result<()> {
    let Some(account_number) = read_parsed::<AccountNumber>("account number", lines)? else {
        return Ok(());
    };

    match bank.balance_of(account_number) {
        Ok(balance) => println!("balance of account {account_number}: {balance}"),
        Err(reason) => println!("{reason}"),
    }

    Ok(())
}

fn list_transactions(bank: &Bank) {
    if bank.transactions().is_empty() {
        println!("no transactions");
        return;
    }

    for transaction in bank.transactions() {
        println!("{transaction}");
    }
}
