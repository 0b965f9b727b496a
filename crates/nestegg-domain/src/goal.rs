//! Domain types for savings goals.

use serde::{Deserialize, Serialize};

/// A savings target the user pays into incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: String,
    pub icon: String,
}

impl SavingsGoal {
    pub fn from_draft(id: String, draft: NewGoal) -> Self {
        Self {
            id,
            name: draft.name,
            target_amount: draft.target_amount,
            current_amount: 0.0,
            target_date: draft.target_date,
            icon: draft.icon,
        }
    }

    /// Applies a deposit or withdrawal. The balance is clamped at zero and
    /// deliberately not capped at the target (overshooting is allowed).
    pub fn apply_delta(&mut self, delta: f64) {
        self.current_amount = (self.current_amount + delta).max(0.0);
    }
}

/// Caller-supplied fields for a goal prior to id assignment.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: f64,
    pub target_date: String,
    pub icon: String,
}
