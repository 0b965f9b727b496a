//! The in-memory ledger aggregate owning every entity collection.

use serde::{Deserialize, Serialize};

use crate::{
    budget::Budget, goal::SavingsGoal, insurance::InsurancePolicy, mortgage::MortgageDetails,
    profile::Profile, superannuation::SuperDetails, transaction::Transaction,
};

/// Snapshot of all household finance state.
///
/// Collections are ordered: transactions newest-first, everything else in
/// insertion order. Entities never reference each other by id; budgets line
/// up with transactions only through the free-text category at query time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<SavingsGoal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mortgage: Option<MortgageDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superannuation: Option<SuperDetails>,
    #[serde(default)]
    pub insurance: Vec<InsurancePolicy>,
    #[serde(default)]
    pub profile: Profile,
}

impl Ledger {
    pub fn budget_for(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    pub fn has_budget(&self, category: &str) -> bool {
        self.budget_for(category).is_some()
    }

    pub fn goal(&self, id: &str) -> Option<&SavingsGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn goal_mut(&mut self, id: &str) -> Option<&mut SavingsGoal> {
        self.goals.iter_mut().find(|g| g.id == id)
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn policy(&self, id: &str) -> Option<&InsurancePolicy> {
        self.insurance.iter().find(|p| p.id == id)
    }
}
