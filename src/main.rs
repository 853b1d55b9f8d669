// Demonstration driver: walks the store through a begin/commit and a
// begin/rollback cycle, printing what a caller observes at each step.
// Illustrative only; the library surface is in `txnkv::InMemoryDB`.

use txnkv::{InMemoryDB, Result};

fn show(label: &str, value: Option<i64>) {
    match value {
        Some(v) => println!("get({label}) = {v}"),
        None => println!("get({label}) = <not found>"),
    }
}

fn report(op: &str, result: Result<()>) {
    match result {
        Ok(()) => println!("{op}: ok"),
        Err(e) => println!("{op}: error: {e}"),
    }
}

fn main() {
    env_logger::init();

    let mut db = InMemoryDB::new();

    // "A" has never been committed
    show("A", db.get("A"));

    // Writes outside a transaction are rejected
    report("put(A, 5)", db.put("A", 5));

    report("begin_transaction", db.begin_transaction());
    report("put(A, 5)", db.put("A", 5));

    // Uncommitted writes are invisible, even to this transaction
    show("A", db.get("A"));

    report("put(A, 6)", db.put("A", 6));
    report("commit", db.commit());

    // The last staged value won
    show("A", db.get("A"));

    // No transaction is open anymore
    report("commit", db.commit());
    report("rollback", db.rollback());

    show("B", db.get("B"));

    report("begin_transaction", db.begin_transaction());
    report("put(B, 10)", db.put("B", 10));
    report("rollback", db.rollback());

    // The write to "B" was discarded
    show("B", db.get("B"));
}
