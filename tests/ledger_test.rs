use trader_ledger::{Book, Ledger, LedgerError, Trader, Transaction};

use rstest::{fixture, rstest};

#[fixture]
fn scenario() -> (Ledger, Trader, Trader) {
    let raoul = Trader::new("Raoul", "Cambridge");
    let mario = Trader::new("Mario", "Milan");
    let mut ledger = Ledger::new();
    ledger.add_transaction(Transaction::new(&raoul, 2011, 100));
    ledger.add_transaction(Transaction::new(&raoul, 2012, 200));
    ledger.add_transaction(Transaction::new(&mario, 2012, 300));
    return (ledger, raoul, mario);
}

#[rstest]
fn raoul_and_mario(scenario: (Ledger, Trader, Trader)) {
    let (mut ledger, _, mario) = scenario;

    assert_eq!(ledger.highest_value(), Ok(300));
    let in_2012: Vec<(&str, i32)> = ledger.transactions_in_year(2012).iter()
        .map(|t| (t.trader().name(), t.value()))
        .collect();
    assert_eq!(in_2012, vec![("Raoul", 200), ("Mario", 300)]);
    assert_eq!(ledger.cities(), vec!["Cambridge", "Milan"]);
    assert!(ledger.trader_in_city("Milan"));

    ledger.relocate_traders("Milan", "Cambridge");

    assert_eq!(ledger.cities(), vec!["Cambridge"]);
    let marios_trade = ledger.transactions().last().unwrap();
    assert_eq!(marios_trade.trader().city(), "Cambridge");
    assert_eq!(mario.city(), "Cambridge");
}

#[rstest]
fn relocation_seen_through_caller_handles(scenario: (Ledger, Trader, Trader)) {
    let (mut ledger, raoul, _) = scenario;

    ledger.relocate_traders("Cambridge", "Paris");

    assert_eq!(raoul.city(), "Paris");
    assert!(ledger.traders("Cambridge").is_empty());
    assert_eq!(ledger.traders("Paris"), vec![raoul]);
}

#[test]
fn empty_ledger_errors() {
    let ledger = Ledger::default();

    assert_eq!(ledger.highest_value(), Err(LedgerError::EmptyLedger));
    assert_eq!(ledger.lowest_value_transaction().unwrap_err().to_string(), "the ledger holds no transactions");
    assert_eq!(ledger.total_value(), 0);
    assert!(ledger.transactions_in_year(2011).is_empty());
    assert!(ledger.transactions_by_year().is_empty());
    assert!(ledger.cities().is_empty());
}

#[test]
fn demo_book_loads() {
    let content = include_str!("../demos/traders.toml");
    let ledger = Book::from_toml(content).unwrap().into_ledger().unwrap();

    assert_eq!(ledger.size(), 6);
    assert_eq!(ledger.total_value(), 4060);
    assert_eq!(ledger.trader_names(), "AlanBrianMarioRaoul");
    assert_eq!(ledger.lowest_value_transaction().unwrap().trader().name(), "Brian");
}
