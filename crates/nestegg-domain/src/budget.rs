//! Domain type for per-category monthly spending limits.

use serde::{Deserialize, Serialize};

/// A monthly spending limit for one expense category.
///
/// The category string is the identity: at most one budget may exist per
/// category value. Budgets are never edited in place; replacing one means
/// deleting and re-adding it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub category: String,
    pub limit: f64,
    /// Presentation hint carried through for the caller, not interpreted here.
    pub color: String,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: f64, color: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            limit,
            color: color.into(),
        }
    }
}
