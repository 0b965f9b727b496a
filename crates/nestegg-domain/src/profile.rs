//! Domain types for household profile settings.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// Whether the ledger tracks one person or a couple.
///
/// Unrecognised persisted values fall back to `Individual`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileMode {
    #[default]
    Individual,
    Couple,
}

impl ProfileMode {
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "couple" => ProfileMode::Couple,
            _ => ProfileMode::Individual,
        }
    }
}

impl fmt::Display for ProfileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProfileMode::Individual => "Individual",
            ProfileMode::Couple => "Couple",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for ProfileMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(ProfileMode::from_str(&value))
    }
}

/// Profile settings, updated in place rather than replaced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub mode: ProfileMode,
    pub partner_name: String,
}

impl Profile {
    pub fn default_partner_name() -> String {
        "Partner".into()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            mode: ProfileMode::default(),
            partner_name: Self::default_partner_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_individual_with_placeholder_partner() {
        let profile = Profile::default();
        assert_eq!(profile.mode, ProfileMode::Individual);
        assert_eq!(profile.partner_name, "Partner");
    }

    #[test]
    fn unknown_mode_falls_back_to_individual() {
        let parsed: ProfileMode = serde_json::from_str("\"household\"").expect("parse");
        assert_eq!(parsed, ProfileMode::Individual);
    }
}
