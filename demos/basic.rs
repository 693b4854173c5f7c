use restbook::{
    book::btree_book::BTreeBook, event::EventKind, Book, Order, PlainOrder, Side,
};

fn main() -> eyre::Result<()> {
    let mut book: BTreeBook<PlainOrder> = BTreeBook::new();

    let bid = book.add("100.10".parse()?, 10, Side::Buy)?;
    let ask = book.add("100.20".parse()?, 45, Side::Sell)?;
    book.add("100.20".parse()?, 15, Side::Sell)?;
    book.add("99.90".parse()?, 25, Side::Buy)?;
    println!("{}", book);

    let replacement = book.modify(ask.id(), 145)?;
    println!("{:?}", replacement);
    println!("{}", book);

    let cancelled = book.cancel(bid.id());
    println!("{:?}", cancelled);
    println!("{}", book);

    println!("top: {:?}", book.top());
    println!("depth: {:?}", book.depth());
    println!("levels: {}", serde_json::to_string(&book.levels())?);

    for event in book.events() {
        let label = match &event.kind {
            EventKind::Add(_) => "add",
            EventKind::Cancel(_) => "cancel",
            EventKind::Modify { .. } => "modify",
        };
        println!("{} {}", event.timestamp, label);
    }

    Ok(())
}
