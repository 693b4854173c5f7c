//! Seed a book, then interleave modify and cancel with snapshots.

use restbook::{
    book::snapshot::SNAPSHOT_TERMINATOR, BTreeBook, Book, Order, OrderError, OrderId,
    OrderRequest, PlainOrder, Price, Side,
};

fn p(price: &str) -> Price {
    price.parse().unwrap()
}

struct Seeded {
    book: BTreeBook<PlainOrder>,
    orders: Vec<PlainOrder>,
}

fn seed() -> Seeded {
    let mut book = BTreeBook::new();
    let orders = [
        ("100.10", 10, Side::Buy),
        ("100.20", 45, Side::Sell),
        ("100.20", 15, Side::Sell),
        ("99.90", 25, Side::Buy),
        ("98.50", 5, Side::Sell),
        ("112.40", 200, Side::Sell),
        ("98.50", 50, Side::Buy),
        ("98.50", 60, Side::Buy),
        ("99.90", 160, Side::Buy),
    ]
    .into_iter()
    .map(|(price, quantity, side)| book.add(p(price), quantity, side).unwrap())
    .collect();

    Seeded { book, orders }
}

fn ladder(book: &BTreeBook<PlainOrder>, side: Side) -> Vec<(String, Vec<u64>)> {
    book.snapshot()
        .side(side)
        .iter()
        .map(|level| (level.price.to_string(), level.quantities()))
        .collect()
}

fn owned(levels: &[(&str, &[u64])]) -> Vec<(String, Vec<u64>)> {
    levels
        .iter()
        .map(|(price, quantities)| (price.to_string(), quantities.to_vec()))
        .collect()
}

#[test]
fn test_seeded_ladder() {
    let Seeded { book, .. } = seed();

    assert_eq!(
        ladder(&book, Side::Buy),
        owned(&[
            ("98.50", &[50, 60]),
            ("99.90", &[25, 160]),
            ("100.10", &[10]),
        ])
    );
    assert_eq!(
        ladder(&book, Side::Sell),
        owned(&[
            ("98.50", &[5]),
            ("100.20", &[45, 15]),
            ("112.40", &[200]),
        ])
    );
}

#[test]
fn test_modify_cancel_modify() {
    let Seeded { mut book, orders } = seed();

    let modified = book.modify(orders[1].id(), 145).unwrap().unwrap();
    assert_eq!(modified.quantity(), 145);
    assert_eq!(
        ladder(&book, Side::Sell),
        owned(&[
            ("98.50", &[5]),
            ("100.20", &[15, 145]),
            ("112.40", &[200]),
        ])
    );

    assert_eq!(book.cancel(orders[8].id()), Some(orders[8].clone()));
    assert_eq!(
        ladder(&book, Side::Buy),
        owned(&[
            ("98.50", &[50, 60]),
            ("99.90", &[25]),
            ("100.10", &[10]),
        ])
    );

    book.modify(orders[7].id(), 65).unwrap().unwrap();
    assert_eq!(
        ladder(&book, Side::Buy),
        owned(&[
            ("98.50", &[50, 65]),
            ("99.90", &[25]),
            ("100.10", &[10]),
        ])
    );
    assert_eq!(book.len(), 8);
}

#[test]
fn test_cancel_only_order_removes_level() {
    let Seeded { mut book, orders } = seed();

    book.cancel(orders[0].id()).unwrap();

    let snapshot = book.snapshot();
    assert!(snapshot.level(Side::Buy, p("100.10")).is_none());
    assert!(!snapshot.to_string().contains("100.10|"));
}

#[test]
fn test_double_cancel() {
    let Seeded { mut book, orders } = seed();
    let id = orders[4].id();

    assert_eq!(book.cancel(id).map(|x| x.quantity()), Some(5));
    assert_eq!(book.cancel(id), None);
    assert_eq!(book.modify(id, 10), Ok(None));
}

#[test]
fn test_modify_after_modify_keeps_latest() {
    let Seeded { mut book, orders } = seed();
    let id = orders[1].id();

    let first = book.modify(id, 100).unwrap().unwrap();
    let second = book.modify(id, 7).unwrap().unwrap();

    assert!(second.placed_at() > first.placed_at());
    assert_eq!(book.order(id), Some(&second));
    assert_eq!(book.len(), 9);
}

#[test]
fn test_rejected_input_changes_nothing() {
    let Seeded { mut book, orders } = seed();
    let before = book.snapshot();

    assert_eq!(
        book.submit(OrderRequest {
            price: None,
            quantity: 5,
            side: Some(Side::Buy),
        }),
        Err(OrderError::MissingPrice)
    );
    assert_eq!(
        book.add(p("10"), -5, Side::Sell),
        Err(OrderError::NegativeQuantity(-5))
    );
    assert_eq!(
        book.submit(OrderRequest {
            price: Some(p("10")),
            quantity: 105,
            side: None,
        }),
        Err(OrderError::MissingSide)
    );
    assert_eq!(
        book.modify(orders[0].id(), -1),
        Err(OrderError::NegativeQuantity(-1))
    );
    assert_eq!("abc".parse::<Price>(), Err(OrderError::InvalidPrice("abc".into())));

    assert_eq!(book.len(), 9);
    assert_eq!(book.snapshot(), before);
}

#[test]
fn test_rendered_snapshot() {
    let mut book: BTreeBook<PlainOrder> = BTreeBook::new();
    let a = book.add(p("100.10"), 10, Side::Buy).unwrap();
    let b = book.add(p("100.20"), 45, Side::Sell).unwrap();
    let c = book.add(p("100.20"), 15, Side::Sell).unwrap();
    let d = book.add(p("99.90"), 25, Side::Buy).unwrap();

    let expected = format!(
        "[BUY]\n99.90| {d}\n100.10| {a}\n\n[SELL]\n100.20| {b} << {c}\n\n{SNAPSHOT_TERMINATOR}\n\n"
    );
    assert_eq!(book.snapshot().to_string(), expected);
}

#[test]
fn test_snapshot_serializes() {
    let Seeded { book, orders } = seed();
    let json = serde_json::to_value(book.snapshot()).unwrap();

    assert_eq!(json["buy"][0]["price"], "98.5");
    assert_eq!(json["sell"][1]["orders"][0]["quantity"], 45);
    assert_eq!(
        json["sell"][1]["orders"][0]["id"],
        orders[1].id().to_string()
    );
}

#[test]
fn test_unknown_id_is_not_an_error() {
    let Seeded { mut book, .. } = seed();
    assert_eq!(book.cancel(OrderId::new()), None);
    assert_eq!(book.modify(OrderId::new(), 1), Ok(None));
}
