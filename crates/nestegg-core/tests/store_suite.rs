use std::sync::Arc;

use chrono::{DateTime, Utc};

use nestegg_core::{
    storage::{KeyValueStore, MemoryStore, StoreKey},
    store::LedgerStore,
    time::Clock,
    CoreError,
};
use nestegg_domain::{
    Budget, InsuranceKind, NewGoal, NewPolicy, NewTransaction, Owner, PremiumFrequency,
    ProfileMode, RepaymentType, MortgageDetails, TransactionKind,
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn clock() -> Arc<FixedClock> {
    let instant = DateTime::parse_from_rfc3339("2025-03-15T10:00:00Z")
        .expect("timestamp")
        .with_timezone(&Utc);
    Arc::new(FixedClock(instant))
}

fn open_store(storage: Arc<MemoryStore>) -> LedgerStore {
    LedgerStore::open(storage, clock(), "nestegg")
}

fn expense(amount: f64, category: &str, date: &str) -> NewTransaction {
    NewTransaction {
        kind: TransactionKind::Expense,
        amount,
        category: category.into(),
        note: None,
        date: date.into(),
        owner: Owner::Me,
    }
}

#[test]
fn cold_start_yields_defaults_and_flips_to_ready() {
    let store = open_store(Arc::new(MemoryStore::new()));
    assert!(store.is_ready());
    let ledger = store.snapshot();
    assert!(ledger.transactions.is_empty());
    assert!(ledger.budgets.is_empty());
    assert!(ledger.goals.is_empty());
    assert!(ledger.insurance.is_empty());
    assert!(ledger.mortgage.is_none());
    assert!(ledger.superannuation.is_none());
    assert_eq!(ledger.profile.mode, ProfileMode::Individual);
    assert_eq!(ledger.profile.partner_name, "Partner");
}

#[test]
fn add_then_delete_returns_to_the_prior_set() {
    let mut store = open_store(Arc::new(MemoryStore::new()));
    store.add_transaction(expense(10.0, "Groceries", "2025-03-01"));
    let before = store.snapshot().transactions.clone();

    let added = store.add_transaction(expense(99.0, "Dining", "2025-03-02"));
    store.delete_transaction(&added.id);

    assert_eq!(store.snapshot().transactions, before);
}

#[test]
fn deleting_an_unknown_id_is_a_no_op() {
    let mut store = open_store(Arc::new(MemoryStore::new()));
    store.add_transaction(expense(10.0, "Groceries", "2025-03-01"));
    store.delete_transaction("missing-id");
    assert_eq!(store.snapshot().transactions.len(), 1);
}

#[test]
fn transactions_are_kept_newest_first() {
    let mut store = open_store(Arc::new(MemoryStore::new()));
    let first = store.add_transaction(expense(1.0, "A", "2025-03-01"));
    let second = store.add_transaction(expense(2.0, "B", "2025-03-02"));
    let ids: Vec<&str> = store
        .snapshot()
        .transactions
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec![second.id.as_str(), first.id.as_str()]);
}

#[test]
fn state_survives_a_reopen_after_flush() {
    let storage = Arc::new(MemoryStore::new());
    {
        let mut store = open_store(storage.clone());
        store.add_transaction(expense(42.0, "Groceries", "2025-03-01"));
        store
            .add_budget(Budget::new("Groceries", 600.0, "#4caf50"))
            .expect("first budget");
        store.add_goal(NewGoal {
            name: "Emergency fund".into(),
            target_amount: 10000.0,
            target_date: "2026-06-30".into(),
            icon: "shield".into(),
        });
        store.set_mortgage(MortgageDetails {
            loan_amount: 500000.0,
            interest_rate: 6.0,
            loan_term_years: 30,
            repayment_type: RepaymentType::PrincipalInterest,
            extra_repayment: 0.0,
            property_value: 750000.0,
            start_date: "2023-06-10".into(),
            lender: "First Bank".into(),
        });
        store.set_profile_mode(ProfileMode::Couple);
        store.set_partner_name("Alex");
        store.flush();
    }

    let reopened = open_store(storage);
    let ledger = reopened.snapshot();
    assert_eq!(ledger.transactions.len(), 1);
    assert_eq!(ledger.budgets.len(), 1);
    assert_eq!(ledger.goals.len(), 1);
    assert!(ledger.mortgage.is_some());
    assert_eq!(ledger.profile.mode, ProfileMode::Couple);
    assert_eq!(ledger.profile.partner_name, "Alex");
}

#[test]
fn goal_withdrawals_floor_at_zero() {
    let mut store = open_store(Arc::new(MemoryStore::new()));
    let goal = store.add_goal(NewGoal {
        name: "Car".into(),
        target_amount: 20000.0,
        target_date: "2027-01-01".into(),
        icon: "car".into(),
    });
    store.update_goal_amount(&goal.id, 500.0);
    store.update_goal_amount(&goal.id, -(500.0 + 100.0));
    let current = store
        .snapshot()
        .goal(&goal.id)
        .expect("goal present")
        .current_amount;
    assert_eq!(current, 0.0);
}

#[test]
fn duplicate_budget_categories_are_rejected() {
    let mut store = open_store(Arc::new(MemoryStore::new()));
    store
        .add_budget(Budget::new("Dining", 300.0, "#f44336"))
        .expect("first budget");
    let err = store
        .add_budget(Budget::new("Dining", 450.0, "#2196f3"))
        .expect_err("duplicate must be rejected");
    assert!(matches!(err, CoreError::Validation(_)));
    assert_eq!(store.snapshot().budgets.len(), 1);
}

#[test]
fn clearing_a_singleton_removes_its_persisted_key() {
    let storage = Arc::new(MemoryStore::new());
    let mut store = open_store(storage.clone());
    store.set_mortgage(MortgageDetails {
        loan_amount: 400000.0,
        interest_rate: 5.5,
        loan_term_years: 25,
        repayment_type: RepaymentType::PrincipalInterest,
        extra_repayment: 100.0,
        property_value: 600000.0,
        start_date: "2024-01-15".into(),
        lender: "Credit Union".into(),
    });
    store.flush();
    let key = StoreKey::Mortgage.scoped("nestegg");
    assert!(storage.get(&key).expect("get").is_some());

    store.clear_mortgage();
    store.flush();
    assert!(store.snapshot().mortgage.is_none());
    assert!(storage.get(&key).expect("get").is_none());
}

#[test]
fn queries_default_to_the_clock_month() {
    let mut store = open_store(Arc::new(MemoryStore::new()));
    store.add_transaction(expense(50.0, "Groceries", "2025-03-20"));
    store.add_transaction(expense(75.0, "Groceries", "2025-02-20"));

    assert_eq!(store.monthly_transactions(None).len(), 1);
    assert_eq!(store.total_expenses(None), 50.0);
    assert_eq!(store.total_expenses(Some("2025-02")), 75.0);
    assert_eq!(store.spent_by_category("Groceries"), 50.0);
}

#[test]
fn insurance_cost_and_forecasts_read_current_state() {
    let mut store = open_store(Arc::new(MemoryStore::new()));
    store.add_insurance(NewPolicy {
        kind: InsuranceKind::Health,
        provider: "Acme".into(),
        policy_number: None,
        premium: 100.0,
        premium_frequency: PremiumFrequency::Monthly,
        renewal_date: "2025-12-01".into(),
        cover_amount: 0.0,
    });
    store.add_insurance(NewPolicy {
        kind: InsuranceKind::Home,
        provider: "Acme".into(),
        policy_number: Some("H-1".into()),
        premium: 1200.0,
        premium_frequency: PremiumFrequency::Annually,
        renewal_date: "2025-06-01".into(),
        cover_amount: 650000.0,
    });
    assert_eq!(store.total_insurance_cost(), 2400.0);

    // No singletons recorded yet: both outlooks are all zeroes.
    assert_eq!(store.mortgage_outlook().monthly_repayment, 0.0);
    assert_eq!(store.retirement_outlook().at_retirement, 0.0);
}

#[test]
fn corrupted_slots_fall_back_to_defaults_independently() {
    let storage = Arc::new(MemoryStore::new());
    storage
        .set(&StoreKey::Transactions.scoped("nestegg"), "not json")
        .expect("seed corrupt value");
    storage
        .set(&StoreKey::PartnerName.scoped("nestegg"), "\"Sam\"")
        .expect("seed partner name");

    let store = open_store(storage);
    assert!(store.is_ready());
    assert!(store.snapshot().transactions.is_empty());
    assert_eq!(store.snapshot().profile.partner_name, "Sam");
}

struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), CoreError> {
        Err(CoreError::Storage("disk full".into()))
    }

    fn delete(&self, _key: &str) -> Result<(), CoreError> {
        Err(CoreError::Storage("disk full".into()))
    }
}

#[test]
fn persistence_failures_never_reach_the_caller() {
    let storage = Arc::new(ReadOnlyStore {
        inner: MemoryStore::new(),
    });
    let mut store = LedgerStore::open(storage, clock(), "nestegg");
    let added = store.add_transaction(expense(10.0, "Groceries", "2025-03-01"));
    store.flush();
    // The write was dropped, but in-memory state stays mutated.
    assert_eq!(store.snapshot().transactions[0].id, added.id);
}
