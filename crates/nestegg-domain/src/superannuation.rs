//! Domain type for the superannuation (retirement) account record.

use serde::{Deserialize, Serialize};

/// The user's single super account snapshot, replaced wholesale on edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuperDetails {
    pub balance: f64,
    pub fund: String,
    /// Employer contribution rate in percent of salary.
    pub employer_rate: f64,
    /// Gross annual salary the contribution rate applies to.
    pub salary: f64,
    pub investment_option: String,
    pub last_updated: String,
}
