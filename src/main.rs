use std::io::{self, BufRead};

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use serde::Deserialize;
use tracing::{info, warn};

use restbook::{
    config::{LogFormat, LoggingConfig},
    BTreeBook, Book, Order, OrderId, OrderRequest, PlainOrder, Price, Side,
};

#[derive(Debug, Parser)]
#[command(version, about = "Resting limit order book")]
struct Cli {
    /// Log level filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Seed a book, then modify and cancel orders, printing it after each step
    Demo,
    /// Read one JSON instruction per line from stdin
    Stdin {
        /// Print snapshots as JSON instead of the text ladder
        #[arg(long)]
        json: bool,
    },
}

/// A line of input for the `stdin` command, e.g.
/// `{"op":"add","price":"100.10","quantity":10,"side":"BUY"}`
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
enum Instruction {
    Add(OrderRequest),
    Cancel { id: OrderId },
    Modify { id: OrderId, quantity: i64 },
    Snapshot,
}

fn p(price: &str) -> eyre::Result<Price> {
    price.parse().wrap_err_with(|| format!("bad demo price {price}"))
}

fn demo() -> eyre::Result<()> {
    let mut book: BTreeBook<PlainOrder> = BTreeBook::new();

    book.add(p("100.10")?, 10, Side::Buy)?;
    let order2 = book.add(p("100.20")?, 45, Side::Sell)?;
    book.add(p("100.20")?, 15, Side::Sell)?;
    book.add(p("99.90")?, 25, Side::Buy)?;
    book.add(p("98.50")?, 5, Side::Sell)?;
    book.add(p("112.40")?, 200, Side::Sell)?;
    book.add(p("98.50")?, 50, Side::Buy)?;
    let order8 = book.add(p("98.50")?, 60, Side::Buy)?;
    let order9 = book.add(p("99.90")?, 160, Side::Buy)?;
    print!("{}", book.snapshot());

    book.modify(order2.id(), 145)?;
    print!("{}", book.snapshot());

    book.cancel(order9.id());
    print!("{}", book.snapshot());

    book.modify(order8.id(), 65)?;
    print!("{}", book.snapshot());

    Ok(())
}

fn run_stdin(json: bool) -> eyre::Result<()> {
    let stdin = io::stdin();
    let mut book: BTreeBook<PlainOrder> = BTreeBook::new();

    for line in stdin.lock().lines() {
        let line = line.wrap_err("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }

        let instruction: Instruction = match serde_json::from_str(line) {
            Ok(x) => x,
            Err(e) => {
                warn!(error = %e, "malformed instruction");
                continue;
            }
        };

        match instruction {
            Instruction::Add(request) => match book.submit(request) {
                Ok(order) => println!("added {order}"),
                Err(e) => warn!(error = %e, "order rejected"),
            },
            Instruction::Cancel { id } => match book.cancel(id) {
                Some(order) => println!("cancelled {order}"),
                None => println!("no order {id}"),
            },
            Instruction::Modify { id, quantity } => match book.modify(id, quantity) {
                Ok(Some(order)) => println!("modified {order}"),
                Ok(None) => println!("no order {id}"),
                Err(e) => warn!(error = %e, "modify rejected"),
            },
            Instruction::Snapshot if json => {
                println!("{}", serde_json::to_string(&book.snapshot())?)
            }
            Instruction::Snapshot => print!("{}", book.snapshot()),
        }
    }

    info!(resting = book.len(), "input exhausted");
    Ok(())
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    LoggingConfig {
        level: cli.log_level,
        format: cli.log_format,
    }
    .init()?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => demo(),
        Command::Stdin { json } => run_stdin(json),
    }
}
