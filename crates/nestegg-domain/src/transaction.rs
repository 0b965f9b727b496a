//! Domain types for recorded income and expense entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single recorded cash movement, immutable once created.
///
/// The `date` field keeps the ISO-8601 text exactly as supplied by the
/// caller; month windows are resolved by string prefix, so reformatting the
/// value would change query results for date-only vs full-timestamp input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub date: String,
    pub owner: Owner,
}

impl Transaction {
    pub fn from_draft(id: String, draft: NewTransaction) -> Self {
        Self {
            id,
            kind: draft.kind,
            amount: draft.amount,
            category: draft.category,
            note: draft.note,
            date: draft.date,
            owner: draft.owner,
        }
    }

    /// Returns `true` when the entry's date falls inside the given
    /// `YYYY-MM` month key.
    pub fn in_month(&self, month: &str) -> bool {
        self.date.starts_with(month)
    }
}

/// Caller-supplied fields for a transaction prior to id assignment.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub note: Option<String>,
    pub date: String,
    pub owner: Owner,
}

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Which household member an entry belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Me,
    Partner,
}
