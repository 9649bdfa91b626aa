use trader_ledger::{Book, Ledger, Trader, Transaction};

use std::{fs, path::{Path, PathBuf}};
use anyhow::{self, Context};
use colored::Colorize;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to the TOML book of traders and transactions
    #[clap(value_parser)]
    path: PathBuf,

    /// Print results as JSON instead of text
    #[clap(long)]
    json: bool,

    /// Query to run
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Size, total, highest value and lowest transaction
    Summary,
    /// Transactions of one year, sorted by value
    Year(YearArgs),
    /// All transactions grouped by year
    ByYear,
    /// Distinct cities
    Cities,
    /// Traders based in a city, sorted by name
    Traders(CityArgs),
    /// Whether any trader is based in a city
    HasCity(CityArgs),
    /// Distinct trader names, sorted
    Names(NamesArgs),
    /// Move all traders of one city to another
    Relocate(Relocate),
}

#[derive(Args, Debug)]
struct YearArgs {
    #[clap(value_parser)]
    year: i32,
}

#[derive(Args, Debug)]
struct CityArgs {
    #[clap(value_parser)]
    city: String,
}

#[derive(Args, Debug)]
struct NamesArgs {
    /// Separator placed between names
    #[clap(short, long, value_parser, default_value_t = String::new())]
    separator: String,
}

#[derive(Args, Debug)]
struct Relocate {
    /// City the traders currently live in
    #[clap(short = 'f', long, value_parser)]
    from: String,

    /// City the traders move to
    #[clap(short = 't', long, value_parser)]
    to: String,
}

#[derive(Serialize)]
struct Summary<'a> {
    size: usize,
    total: i64,
    highest: i32,
    lowest: &'a Transaction,
}

fn read_ledger(path: &Path) -> anyhow::Result<Ledger> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read book {}", path.display()))?;
    let ledger = Book::from_toml(&content)?.into_ledger()
        .with_context(|| "failed to build ledger")?;
    return Ok(ledger);
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    return Ok(());
}

fn print_transactions(transactions: &[&Transaction]) {
    for t in transactions {
        println!("{} {}: {}", t.year(), t.trader(), t.value().to_string().green());
    }
}

fn print_traders(traders: &[Trader]) {
    for trader in traders {
        println!("{}", trader);
    }
}

fn summary(ledger: &Ledger, json: bool) -> anyhow::Result<()> {
    let summary = Summary {
        size: ledger.size(),
        total: ledger.total_value(),
        highest: ledger.highest_value()?,
        lowest: ledger.lowest_value_transaction()?,
    };
    if json {
        return print_json(&summary);
    }
    println!("{}: {}", "Transactions".bold(), summary.size);
    println!("{}: {}", "Total value".bold(), summary.total);
    println!("{}: {}", "Highest value".bold(), summary.highest);
    println!("{}: {}", "Lowest".bold(), summary.lowest);
    return Ok(());
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let mut ledger = read_ledger(&args.path)?;

    match args.action {
        Subcommands::Summary => summary(&ledger, args.json)?,
        Subcommands::Year(year_args) => {
            let in_year = ledger.transactions_in_year(year_args.year);
            if args.json {
                print_json(&in_year)?;
            } else {
                print_transactions(&in_year);
            }
        },
        Subcommands::ByYear => {
            let by_year = ledger.transactions_by_year();
            if args.json {
                print_json(&by_year)?;
            } else {
                for (year, transactions) in &by_year {
                    println!("{}", year.to_string().bold());
                    print_transactions(transactions);
                }
            }
        },
        Subcommands::Cities => {
            let cities = ledger.cities();
            if args.json {
                print_json(&cities)?;
            } else {
                cities.iter().for_each(|city| println!("{}", city));
            }
        },
        Subcommands::Traders(city_args) => {
            let traders = ledger.traders(&city_args.city);
            if args.json {
                print_json(&traders)?;
            } else {
                print_traders(&traders);
            }
        },
        Subcommands::HasCity(city_args) => {
            let present = ledger.trader_in_city(&city_args.city);
            if args.json {
                print_json(&present)?;
            } else if present {
                println!("{}", "yes".green());
            } else {
                println!("{}", "no".bright_red());
            }
        },
        Subcommands::Names(names_args) => {
            let names = ledger.trader_names_joined(&names_args.separator);
            if args.json {
                print_json(&names)?;
            } else {
                println!("{}", names);
            }
        },
        Subcommands::Relocate(relocate) => {
            // clones share their traders, so they show the new city once moved
            let moved: Vec<Transaction> = ledger.transactions()
                .filter(|t| t.trader().is_in(&relocate.from))
                .cloned()
                .collect();
            ledger.relocate_traders(&relocate.from, &relocate.to);
            if args.json {
                print_json(&moved)?;
            } else {
                print_transactions(&moved.iter().collect::<Vec<_>>());
            }
        },
    }

    return Ok(());
}
