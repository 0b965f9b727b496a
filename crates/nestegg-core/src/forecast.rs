//! Deterministic repayment and retirement projections.

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use nestegg_domain::{MortgageDetails, RepaymentType, SuperDetails};

/// Assumed age of the account holder. There is no birth-date input upstream,
/// so every projection runs from this fixed starting point.
pub const ASSUMED_CURRENT_AGE: u32 = 30;
/// Assumed retirement age.
pub const ASSUMED_RETIREMENT_AGE: u32 = 67;
/// Nominal annual growth applied once per year, contributions first.
pub const ANNUAL_GROWTH_RATE: f64 = 0.07;
/// Fraction of the final balance withdrawn per year in retirement.
pub const ANNUAL_DRAWDOWN_RATE: f64 = 0.04;

/// Repayment figures derived from the mortgage singleton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MortgageOutlook {
    pub monthly_repayment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub months_elapsed: i32,
    pub years_remaining: f64,
}

/// Balance figures derived from the superannuation singleton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RetirementOutlook {
    pub years_to_retirement: u32,
    pub at_retirement: f64,
    pub monthly_in_retirement: f64,
}

/// Stateless projection calculations over the singleton entities.
pub struct ForecastService;

impl ForecastService {
    /// Computes the scheduled repayment picture for the mortgage, or an
    /// all-zero outlook when none is recorded.
    ///
    /// The extra repayment is added to the computed payment but the totals
    /// still assume the original schedule length; a shortened payoff date
    /// is intentionally not modelled.
    pub fn mortgage_outlook(
        mortgage: Option<&MortgageDetails>,
        now: DateTime<Utc>,
    ) -> MortgageOutlook {
        let Some(details) = mortgage else {
            return MortgageOutlook::default();
        };

        let principal = details.loan_amount;
        let monthly_rate = details.interest_rate / 100.0 / 12.0;
        let term_months = details.loan_term_years * 12;

        let base_monthly = match details.repayment_type {
            RepaymentType::InterestOnly => principal * monthly_rate,
            RepaymentType::PrincipalInterest => {
                if monthly_rate == 0.0 {
                    // Straight-line division; the annuity formula divides
                    // by zero at a 0 % rate.
                    principal / term_months as f64
                } else {
                    let growth = (1.0 + monthly_rate).powi(term_months as i32);
                    principal * monthly_rate * growth / (growth - 1.0)
                }
            }
        };

        let monthly_repayment = base_monthly + details.extra_repayment;
        let total_payment = monthly_repayment * term_months as f64;
        let total_interest = (total_payment - principal).max(0.0);

        let months_elapsed = months_between(&details.start_date, now);
        let years_remaining =
            ((term_months as f64 - months_elapsed as f64) / 12.0).max(0.0);

        MortgageOutlook {
            monthly_repayment,
            total_payment,
            total_interest,
            months_elapsed,
            years_remaining,
        }
    }

    /// Compounds the super balance forward to retirement age, or returns an
    /// all-zero outlook when no account is recorded.
    pub fn retirement_outlook(superannuation: Option<&SuperDetails>) -> RetirementOutlook {
        let Some(details) = superannuation else {
            return RetirementOutlook::default();
        };

        let years_to_retirement = ASSUMED_RETIREMENT_AGE - ASSUMED_CURRENT_AGE;
        let annual_contribution = details.salary * details.employer_rate / 100.0;

        let mut balance = details.balance;
        for _ in 0..years_to_retirement {
            balance = (balance + annual_contribution) * (1.0 + ANNUAL_GROWTH_RATE);
        }

        RetirementOutlook {
            years_to_retirement,
            at_retirement: balance,
            monthly_in_retirement: balance * ANNUAL_DRAWDOWN_RATE / 12.0,
        }
    }
}

/// Whole calendar months from the ISO date's year-month to `now`, ignoring
/// the day of month. An unparseable start date counts as zero elapsed.
fn months_between(start_date: &str, now: DateTime<Utc>) -> i32 {
    let now_index = now.year() * 12 + now.month() as i32 - 1;
    match year_month_index(start_date) {
        Some(start_index) => now_index - start_index,
        None => 0,
    }
}

fn year_month_index(date: &str) -> Option<i32> {
    let mut parts = date.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.get(0..2)?.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(year * 12 + month as i32 - 1)
}
