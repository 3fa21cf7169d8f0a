use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::{Cents, Entry, EntryKind, format_cents};

/// Which amounts `deposit` and `withdraw` accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Any amount is accepted, including zero and negative values.
    #[default]
    Permissive,
    /// Zero and negative amounts are rejected before touching the balance.
    PositiveOnly,
}

impl AmountPolicy {
    fn check(&self, amount: Cents) -> Result<(), LedgerError> {
        match self {
            AmountPolicy::PositiveOnly if amount <= 0 => Err(LedgerError::InvalidAmount(amount)),
            _ => Ok(()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient funds in {label}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        label: String,
        balance: Cents,
        requested: Cents,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(Cents),

    #[error("Balance of {label} would overflow")]
    Overflow { label: String },
}

/// A balance with its append-only history of accepted adjustments.
///
/// `balance` always equals `opening_balance` plus the signed amounts of every
/// entry in `history`. Rejected operations leave both untouched.
#[derive(Debug, Clone)]
pub struct Ledger {
    label: String,
    opening_balance: Cents,
    balance: Cents,
    /// Most recent first
    history: VecDeque<Entry>,
    policy: AmountPolicy,
    opened_at: DateTime<Utc>,
}

impl Ledger {
    /// Open a ledger with a zero balance.
    pub fn new(label: impl Into<String>) -> Self {
        Self::open(label, 0)
    }

    /// Open a ledger with the given opening balance.
    pub fn open(label: impl Into<String>, opening_balance: Cents) -> Self {
        Self {
            label: label.into(),
            opening_balance,
            balance: opening_balance,
            history: VecDeque::new(),
            policy: AmountPolicy::default(),
            opened_at: Utc::now(),
        }
    }

    pub fn with_policy(mut self, policy: AmountPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn opening_balance(&self) -> Cents {
        self.opening_balance
    }

    pub fn policy(&self) -> AmountPolicy {
        self.policy
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Accepted entries, most recent first.
    pub fn history(&self) -> &VecDeque<Entry> {
        &self.history
    }

    /// Current balance formatted for display, e.g. "1200.00".
    pub fn show_balance(&self) -> String {
        format_cents(self.balance)
    }

    /// Add `amount` to the balance. Returns the new balance.
    pub fn deposit(&mut self, amount: Cents) -> Result<Cents, LedgerError> {
        self.check_amount(amount)?;
        let balance = self.balance.checked_add(amount).ok_or_else(|| self.overflow())?;
        Ok(self.record(EntryKind::Deposit, amount, balance))
    }

    /// Take `amount` from the balance. Returns the new balance, or
    /// `InsufficientFunds` when `amount` exceeds the current balance.
    pub fn withdraw(&mut self, amount: Cents) -> Result<Cents, LedgerError> {
        self.check_amount(amount)?;
        if amount > self.balance {
            warn!(
                ledger = %self.label,
                balance = self.balance,
                requested = amount,
                "withdrawal rejected: insufficient funds"
            );
            return Err(LedgerError::InsufficientFunds {
                label: self.label.clone(),
                balance: self.balance,
                requested: amount,
            });
        }

        let signed = amount.checked_neg().ok_or_else(|| self.overflow())?;
        let balance = self.balance.checked_add(signed).ok_or_else(|| self.overflow())?;
        Ok(self.record(EntryKind::Withdrawal, signed, balance))
    }

    /// Recompute the balance from the opening balance and history.
    pub fn is_consistent(&self) -> bool {
        compute_balance(self.opening_balance, self.history.iter()) == Some(self.balance)
    }

    /// Snapshot of the ledger suitable for display or export.
    pub fn statement(&self) -> Statement {
        Statement {
            label: self.label.clone(),
            opening_balance: self.opening_balance,
            balance: self.balance,
            history: self.history.iter().cloned().collect(),
            opened_at: self.opened_at,
            generated_at: Utc::now(),
        }
    }

    fn check_amount(&self, amount: Cents) -> Result<(), LedgerError> {
        self.policy.check(amount).inspect_err(|_| {
            warn!(ledger = %self.label, amount, policy = ?self.policy, "amount rejected by policy");
        })
    }

    fn record(&mut self, kind: EntryKind, signed_amount: Cents, new_balance: Cents) -> Cents {
        self.balance = new_balance;
        self.history.push_front(Entry::new(kind, signed_amount));
        debug!(
            ledger = %self.label,
            %kind,
            amount = signed_amount,
            balance = self.balance,
            "entry recorded"
        );
        self.balance
    }

    fn overflow(&self) -> LedgerError {
        LedgerError::Overflow {
            label: self.label.clone(),
        }
    }
}

/// Fold signed entry amounts onto an opening balance.
/// Returns `None` if the sum leaves the `Cents` range.
pub fn compute_balance<'a>(
    opening_balance: Cents,
    entries: impl IntoIterator<Item = &'a Entry>,
) -> Option<Cents> {
    entries
        .into_iter()
        .try_fold(opening_balance, |balance, entry| {
            balance.checked_add(entry.amount_cents)
        })
}

/// Point-in-time view of a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub label: String,
    pub opening_balance: Cents,
    pub balance: Cents,
    /// Most recent first
    pub history: Vec<Entry>,
    pub opened_at: DateTime<Utc>,
    pub generated_at: DateTime<Utc>,
}

/// Balance on the first line, then one signed entry per line.
impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, format_cents(self.balance))?;
        for entry in &self.history {
            write!(f, "\n{}", entry)?;
        }
        Ok(())
    }
}
