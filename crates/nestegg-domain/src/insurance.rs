//! Domain types for insurance policies.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// One insurance policy held by the household.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsurancePolicy {
    pub id: String,
    pub kind: InsuranceKind,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    pub premium: f64,
    pub premium_frequency: PremiumFrequency,
    pub renewal_date: String,
    pub cover_amount: f64,
}

impl InsurancePolicy {
    pub fn from_draft(id: String, draft: NewPolicy) -> Self {
        Self {
            id,
            kind: draft.kind,
            provider: draft.provider,
            policy_number: draft.policy_number,
            premium: draft.premium,
            premium_frequency: draft.premium_frequency,
            renewal_date: draft.renewal_date,
            cover_amount: draft.cover_amount,
        }
    }

    /// Premium cost normalised to a yearly figure.
    pub fn annual_cost(&self) -> f64 {
        self.premium * self.premium_frequency.occurrences_per_year()
    }
}

/// Caller-supplied fields for a policy prior to id assignment.
#[derive(Debug, Clone)]
pub struct NewPolicy {
    pub kind: InsuranceKind,
    pub provider: String,
    pub policy_number: Option<String>,
    pub premium: f64,
    pub premium_frequency: PremiumFrequency,
    pub renewal_date: String,
    pub cover_amount: f64,
}

/// Supported policy lines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceKind {
    Home,
    Car,
    Health,
    Life,
    IncomeProtection,
    Contents,
    Travel,
}

impl fmt::Display for InsuranceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InsuranceKind::Home => "Home",
            InsuranceKind::Car => "Car",
            InsuranceKind::Health => "Health",
            InsuranceKind::Life => "Life",
            InsuranceKind::IncomeProtection => "Income Protection",
            InsuranceKind::Contents => "Contents",
            InsuranceKind::Travel => "Travel",
        };
        f.write_str(label)
    }
}

/// How often a premium falls due.
///
/// Deserialization is lenient: persisted data carrying an unrecognised
/// frequency string falls back to `Monthly` rather than failing the load.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PremiumFrequency {
    Weekly,
    Fortnightly,
    Monthly,
    Quarterly,
    Annually,
}

impl PremiumFrequency {
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "weekly" => PremiumFrequency::Weekly,
            "fortnightly" => PremiumFrequency::Fortnightly,
            "quarterly" => PremiumFrequency::Quarterly,
            "annually" => PremiumFrequency::Annually,
            _ => PremiumFrequency::Monthly,
        }
    }

    /// How many premium payments land in a calendar year.
    pub fn occurrences_per_year(self) -> f64 {
        match self {
            PremiumFrequency::Weekly => 52.0,
            PremiumFrequency::Fortnightly => 26.0,
            PremiumFrequency::Monthly => 12.0,
            PremiumFrequency::Quarterly => 4.0,
            PremiumFrequency::Annually => 1.0,
        }
    }
}

impl fmt::Display for PremiumFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PremiumFrequency::Weekly => "Weekly",
            PremiumFrequency::Fortnightly => "Fortnightly",
            PremiumFrequency::Monthly => "Monthly",
            PremiumFrequency::Quarterly => "Quarterly",
            PremiumFrequency::Annually => "Annually",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for PremiumFrequency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(PremiumFrequency::from_str(&value))
    }
}
