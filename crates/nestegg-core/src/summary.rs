//! Month-window aggregation helpers over ledger snapshots.

use nestegg_domain::{Ledger, Transaction, TransactionKind};

/// Stateless reporting utilities that operate over [`Ledger`] snapshots.
///
/// A month is a `YYYY-MM` key matched against the stored date text by
/// prefix. Dates are kept verbatim as entered, so prefix matching is the
/// semantics that treats `2025-03-14` and `2025-03-14T09:30:00Z` alike.
pub struct SummaryService;

impl SummaryService {
    /// All transactions dated within the given month, newest first.
    pub fn monthly_transactions<'a>(ledger: &'a Ledger, month: &str) -> Vec<&'a Transaction> {
        ledger
            .transactions
            .iter()
            .filter(|txn| txn.in_month(month))
            .collect()
    }

    /// Sum of income amounts in the month. Exact additions, no rounding.
    pub fn total_income(ledger: &Ledger, month: &str) -> f64 {
        Self::monthly_total(ledger, month, TransactionKind::Income)
    }

    /// Sum of expense amounts in the month.
    pub fn total_expenses(ledger: &Ledger, month: &str) -> f64 {
        Self::monthly_total(ledger, month, TransactionKind::Expense)
    }

    /// Expense total for one category in the month. The category label is
    /// compared case-sensitively; budgets relate to transactions only
    /// through this free-text match.
    pub fn spent_by_category(ledger: &Ledger, category: &str, month: &str) -> f64 {
        ledger
            .transactions
            .iter()
            .filter(|txn| {
                txn.kind == TransactionKind::Expense
                    && txn.in_month(month)
                    && txn.category == category
            })
            .map(|txn| txn.amount)
            .sum()
    }

    /// Combined yearly cost of every insurance policy.
    pub fn total_insurance_cost(ledger: &Ledger) -> f64 {
        ledger.insurance.iter().map(|policy| policy.annual_cost()).sum()
    }

    fn monthly_total(ledger: &Ledger, month: &str, kind: TransactionKind) -> f64 {
        ledger
            .transactions
            .iter()
            .filter(|txn| txn.kind == kind && txn.in_month(month))
            .map(|txn| txn.amount)
            .sum()
    }
}
