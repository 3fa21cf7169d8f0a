// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use coffer::domain::{Cents, Ledger, Navigator};

/// Test fixture: a checking ledger opened with 1000 units
pub fn checking() -> Ledger {
    Ledger::open("checking", units(1000))
}

/// Convert whole currency units to cents
pub fn units(amount: i64) -> Cents {
    amount * 100
}

/// Signed amounts of a ledger's history, most recent first
pub fn history_amounts(ledger: &Ledger) -> Vec<Cents> {
    ledger.history().iter().map(|e| e.amount_cents).collect()
}

/// Test fixture: a six-track album
pub fn album() -> Navigator {
    Navigator::new(
        "KAT-TUN",
        "cast",
        [
            "moonlight",
            "one way love",
            "vivid love",
            "be alive",
            "ask your self",
            "new genesis",
        ],
    )
    .expect("album has tracks")
}
