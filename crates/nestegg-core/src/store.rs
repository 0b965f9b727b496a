//! The authoritative in-memory ledger store and its persistence lifecycle.

use std::{sync::Arc, thread};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use nestegg_domain::{
    entity_id, Budget, InsurancePolicy, Ledger, MortgageDetails, NewGoal, NewPolicy,
    NewTransaction, Profile, ProfileMode, SavingsGoal, SuperDetails, Transaction,
};

use crate::{
    forecast::{ForecastService, MortgageOutlook, RetirementOutlook},
    persist::PersistQueue,
    storage::{KeyValueStore, StoreKey},
    summary::SummaryService,
    time::Clock,
    CoreError,
};

/// Lifecycle of the store relative to its startup reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Loading,
    Ready,
}

/// Single authoritative owner of all ledger state.
///
/// Mutations update the in-memory snapshot synchronously and queue a
/// persist of the affected key; callers never block on, or hear about,
/// durability. One logical writer is assumed: the mutators take
/// `&mut self` and the host's event dispatch provides the serialisation.
pub struct LedgerStore {
    ledger: Ledger,
    status: StoreStatus,
    clock: Arc<dyn Clock>,
    prefix: String,
    queue: PersistQueue,
}

impl LedgerStore {
    /// Loads every persisted slot and returns a ready store.
    ///
    /// Reads are issued concurrently, one per key, and fail independently:
    /// an absent, unreadable, or unparseable slot falls back to its default
    /// rather than failing startup. The status flips `Loading` to `Ready`
    /// exactly once, after all reads have settled.
    pub fn open(
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        prefix: impl Into<String>,
    ) -> Self {
        let prefix = prefix.into();
        let mut store = Self {
            ledger: Ledger::default(),
            status: StoreStatus::Loading,
            clock,
            queue: PersistQueue::new(storage.clone()),
            prefix,
        };
        store.ledger = load_ledger(storage.as_ref(), &store.prefix);
        store.status = StoreStatus::Ready;
        debug!(prefix = %store.prefix, "ledger store ready");
        store
    }

    pub fn status(&self) -> StoreStatus {
        self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == StoreStatus::Ready
    }

    /// Current in-memory state, for rendering.
    pub fn snapshot(&self) -> &Ledger {
        &self.ledger
    }

    // --- transactions -----------------------------------------------------

    /// Records a transaction and returns it. New entries are prepended so
    /// the collection stays most-recent-first.
    pub fn add_transaction(&mut self, draft: NewTransaction) -> Transaction {
        let txn = Transaction::from_draft(entity_id(self.clock.now()), draft);
        self.ledger.transactions.insert(0, txn.clone());
        self.persist_slot(StoreKey::Transactions, &self.ledger.transactions);
        txn
    }

    /// Removes a transaction by id; unknown ids are a silent no-op.
    pub fn delete_transaction(&mut self, id: &str) {
        let before = self.ledger.transactions.len();
        self.ledger.transactions.retain(|txn| txn.id != id);
        if self.ledger.transactions.len() != before {
            self.persist_slot(StoreKey::Transactions, &self.ledger.transactions);
        }
    }

    /// Drops every transaction at once.
    pub fn clear_transactions(&mut self) {
        self.ledger.transactions.clear();
        self.persist_slot(StoreKey::Transactions, &self.ledger.transactions);
    }

    // --- budgets ----------------------------------------------------------

    /// Adds a monthly budget. The category is the identity, so a second
    /// budget for the same category is rejected.
    pub fn add_budget(&mut self, budget: Budget) -> Result<Budget, CoreError> {
        if self.ledger.has_budget(&budget.category) {
            return Err(CoreError::Validation(format!(
                "budget for category `{}` already exists",
                budget.category
            )));
        }
        self.ledger.budgets.push(budget.clone());
        self.persist_slot(StoreKey::Budgets, &self.ledger.budgets);
        Ok(budget)
    }

    /// Removes the budget for a category; absent categories are a no-op.
    pub fn delete_budget(&mut self, category: &str) {
        let before = self.ledger.budgets.len();
        self.ledger.budgets.retain(|b| b.category != category);
        if self.ledger.budgets.len() != before {
            self.persist_slot(StoreKey::Budgets, &self.ledger.budgets);
        }
    }

    // --- savings goals ----------------------------------------------------

    pub fn add_goal(&mut self, draft: NewGoal) -> SavingsGoal {
        let goal = SavingsGoal::from_draft(entity_id(self.clock.now()), draft);
        self.ledger.goals.push(goal.clone());
        self.persist_slot(StoreKey::Goals, &self.ledger.goals);
        goal
    }

    /// Applies a deposit (or withdrawal, with a negative delta) to a goal.
    /// The balance floors at zero; unknown ids are a silent no-op.
    pub fn update_goal_amount(&mut self, id: &str, delta: f64) {
        if let Some(goal) = self.ledger.goal_mut(id) {
            goal.apply_delta(delta);
            self.persist_slot(StoreKey::Goals, &self.ledger.goals);
        }
    }

    pub fn delete_goal(&mut self, id: &str) {
        let before = self.ledger.goals.len();
        self.ledger.goals.retain(|g| g.id != id);
        if self.ledger.goals.len() != before {
            self.persist_slot(StoreKey::Goals, &self.ledger.goals);
        }
    }

    // --- singletons -------------------------------------------------------

    /// Replaces the mortgage record wholesale.
    pub fn set_mortgage(&mut self, details: MortgageDetails) {
        self.ledger.mortgage = Some(details);
        if let Some(details) = &self.ledger.mortgage {
            self.persist_slot(StoreKey::Mortgage, details);
        }
    }

    /// Removes the mortgage record and its persisted key.
    pub fn clear_mortgage(&mut self) {
        self.ledger.mortgage = None;
        self.queue.remove(&StoreKey::Mortgage.scoped(&self.prefix));
    }

    /// Replaces the superannuation record wholesale.
    pub fn set_super(&mut self, details: SuperDetails) {
        self.ledger.superannuation = Some(details);
        if let Some(details) = &self.ledger.superannuation {
            self.persist_slot(StoreKey::Super, details);
        }
    }

    /// Removes the superannuation record and its persisted key.
    pub fn clear_super(&mut self) {
        self.ledger.superannuation = None;
        self.queue.remove(&StoreKey::Super.scoped(&self.prefix));
    }

    // --- insurance --------------------------------------------------------

    pub fn add_insurance(&mut self, draft: NewPolicy) -> InsurancePolicy {
        let policy = InsurancePolicy::from_draft(entity_id(self.clock.now()), draft);
        self.ledger.insurance.push(policy.clone());
        self.persist_slot(StoreKey::Insurance, &self.ledger.insurance);
        policy
    }

    pub fn delete_insurance(&mut self, id: &str) {
        let before = self.ledger.insurance.len();
        self.ledger.insurance.retain(|p| p.id != id);
        if self.ledger.insurance.len() != before {
            self.persist_slot(StoreKey::Insurance, &self.ledger.insurance);
        }
    }

    // --- profile ----------------------------------------------------------

    pub fn set_profile_mode(&mut self, mode: ProfileMode) {
        self.ledger.profile.mode = mode;
        self.persist_slot(StoreKey::ProfileMode, &self.ledger.profile.mode);
    }

    pub fn set_partner_name(&mut self, name: impl Into<String>) {
        self.ledger.profile.partner_name = name.into();
        self.persist_slot(StoreKey::PartnerName, &self.ledger.profile.partner_name);
    }

    // --- queries ----------------------------------------------------------

    /// Transactions in the given month, defaulting to the current one.
    pub fn monthly_transactions(&self, month: Option<&str>) -> Vec<Transaction> {
        let month = self.resolve_month(month);
        SummaryService::monthly_transactions(&self.ledger, &month)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn total_income(&self, month: Option<&str>) -> f64 {
        SummaryService::total_income(&self.ledger, &self.resolve_month(month))
    }

    pub fn total_expenses(&self, month: Option<&str>) -> f64 {
        SummaryService::total_expenses(&self.ledger, &self.resolve_month(month))
    }

    /// Expense total for a category in the current month. Always the
    /// current month; the per-category view has no month picker.
    pub fn spent_by_category(&self, category: &str) -> f64 {
        SummaryService::spent_by_category(&self.ledger, category, &self.clock.month_key())
    }

    pub fn total_insurance_cost(&self) -> f64 {
        SummaryService::total_insurance_cost(&self.ledger)
    }

    pub fn mortgage_outlook(&self) -> MortgageOutlook {
        ForecastService::mortgage_outlook(self.ledger.mortgage.as_ref(), self.clock.now())
    }

    pub fn retirement_outlook(&self) -> RetirementOutlook {
        ForecastService::retirement_outlook(self.ledger.superannuation.as_ref())
    }

    // --- lifecycle --------------------------------------------------------

    /// Blocks until all queued persistence work has been applied. Mutations
    /// never wait on this; it exists for shutdown and tests.
    pub fn flush(&self) {
        self.queue.flush();
    }

    fn resolve_month(&self, month: Option<&str>) -> String {
        match month {
            Some(value) => value.to_string(),
            None => self.clock.month_key(),
        }
    }

    fn persist_slot<T: Serialize>(&self, key: StoreKey, value: &T) {
        let scoped = key.scoped(&self.prefix);
        match serde_json::to_string(value) {
            Ok(json) => self.queue.put(&scoped, json),
            Err(err) => warn!(key = %scoped, error = %err, "skipping persist of unserializable state"),
        }
    }
}

/// Reads every slot concurrently and assembles the starting ledger.
fn load_ledger(storage: &dyn KeyValueStore, prefix: &str) -> Ledger {
    let keys: Vec<String> = StoreKey::ALL.iter().map(|key| key.scoped(prefix)).collect();
    thread::scope(|scope| {
        let transactions =
            scope.spawn(|| load_slot::<Vec<Transaction>>(storage, &keys[0]));
        let budgets = scope.spawn(|| load_slot::<Vec<Budget>>(storage, &keys[1]));
        let goals = scope.spawn(|| load_slot::<Vec<SavingsGoal>>(storage, &keys[2]));
        let mortgage = scope.spawn(|| load_slot::<MortgageDetails>(storage, &keys[3]));
        let superannuation = scope.spawn(|| load_slot::<SuperDetails>(storage, &keys[4]));
        let insurance =
            scope.spawn(|| load_slot::<Vec<InsurancePolicy>>(storage, &keys[5]));
        let profile_mode = scope.spawn(|| load_slot::<ProfileMode>(storage, &keys[6]));
        let partner_name = scope.spawn(|| load_slot::<String>(storage, &keys[7]));

        Ledger {
            transactions: transactions.join().ok().flatten().unwrap_or_default(),
            budgets: budgets.join().ok().flatten().unwrap_or_default(),
            goals: goals.join().ok().flatten().unwrap_or_default(),
            mortgage: mortgage.join().ok().flatten(),
            superannuation: superannuation.join().ok().flatten(),
            insurance: insurance.join().ok().flatten().unwrap_or_default(),
            profile: Profile {
                mode: profile_mode.join().ok().flatten().unwrap_or_default(),
                partner_name: partner_name
                    .join()
                    .ok()
                    .flatten()
                    .unwrap_or_else(Profile::default_partner_name),
            },
        }
    })
}

/// One startup read. Absent keys and failures of any kind resolve to
/// `None`; a failed slot must not take the rest of the ledger down.
fn load_slot<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    match storage.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key = %key, error = %err, "ignoring unparseable persisted value");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!(key = %key, error = %err, "read failed, using default");
            None
        }
    }
}
