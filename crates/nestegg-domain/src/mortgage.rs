//! Domain types for the household mortgage record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The user's single mortgage, replaced wholesale on edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MortgageDetails {
    pub loan_amount: f64,
    /// Annual rate in percent, e.g. `6.0` for 6 %.
    pub interest_rate: f64,
    pub loan_term_years: u32,
    pub repayment_type: RepaymentType,
    /// Voluntary monthly add-on paid on top of the scheduled repayment.
    pub extra_repayment: f64,
    pub property_value: f64,
    pub start_date: String,
    pub lender: String,
}

/// How scheduled repayments are structured.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RepaymentType {
    PrincipalInterest,
    InterestOnly,
}

impl fmt::Display for RepaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RepaymentType::PrincipalInterest => "Principal & Interest",
            RepaymentType::InterestOnly => "Interest Only",
        };
        f.write_str(label)
    }
}
