use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, format_signed_cents};

pub type EntryId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Deposit => "deposit",
            EntryKind::Withdrawal => "withdrawal",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One accepted adjustment to a ledger's balance.
/// Entries are immutable once recorded; a ledger only ever prepends new ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
    /// Signed effect on the balance: positive for deposits, negated for withdrawals
    pub amount_cents: Cents,
    pub recorded_at: DateTime<Utc>,
}

impl Entry {
    pub(crate) fn new(kind: EntryKind, amount_cents: Cents) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount_cents,
            recorded_at: Utc::now(),
        }
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == EntryKind::Deposit
    }
}

/// Renders the signed amount, e.g. "+300.00" or "-100.00".
impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format_signed_cents(self.amount_cents))
    }
}
