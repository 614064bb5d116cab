//! Shared newtypes and utilities used across all domain modules.
//!
//! `SeasonYear` serializes transparently as the 4-digit string the backend
//! expects in paths and request bodies.

pub mod fmt;
pub mod serde_util;

use crate::error::SdkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── SeasonYear ──────────────────────────────────────────────────────────────

/// A season identified by its starting year (e.g. `"2025"`).
///
/// Parsed from user text such as `"2025/26"` or `"2025-2026"`: only the leading
/// four digits are significant for API calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeasonYear(String);

impl SeasonYear {
    pub fn parse(input: &str) -> Result<Self, SdkError> {
        let trimmed = input.trim();
        let year: String = trimmed.chars().take(4).collect();
        if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(year))
        } else {
            Err(SdkError::Validation(format!(
                "season must start with a 4-digit year, got {:?}",
                input
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display label in the `"2025/26"` form.
    pub fn label(&self) -> String {
        match self.0.parse::<u32>() {
            Ok(year) => format!("{}/{:02}", year, (year + 1) % 100),
            Err(_) => self.0.clone(),
        }
    }
}

impl std::fmt::Display for SeasonYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SeasonYear {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SeasonYear {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SeasonYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SeasonYear::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// The club + season currently selected by the user.
///
/// Every fetch that depends on the selection is tagged with a copy of it at
/// dispatch time; a response is only applied if the copy still equals the
/// current selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub club: String,
    pub season: SeasonYear,
}

impl Selection {
    pub fn new(club: impl Into<String>, season: SeasonYear) -> Self {
        Self {
            club: club.into(),
            season,
        }
    }

    /// Parse both parts from user input.
    pub fn parse(club: &str, season: &str) -> Result<Self, SdkError> {
        Ok(Self::new(club.trim(), SeasonYear::parse(season)?))
    }

    /// Club name as the API expects it (lower-cased).
    pub fn api_club(&self) -> String {
        normalize_club(&self.club)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.club, self.season.label())
    }
}

/// Club names are matched case-insensitively by the backend's storage layout.
pub fn normalize_club(club: &str) -> String {
    club.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_year_from_display_label() {
        let season = SeasonYear::parse("2025/26").unwrap();
        assert_eq!(season.as_str(), "2025");
        assert_eq!(season.label(), "2025/26");
    }

    #[test]
    fn test_season_year_plain() {
        assert_eq!(SeasonYear::parse(" 2024 ").unwrap().as_str(), "2024");
        assert_eq!(SeasonYear::parse("1999").unwrap().label(), "1999/00");
    }

    #[test]
    fn test_season_year_rejects_non_digits() {
        assert!(SeasonYear::parse("25/26").is_err());
        assert!(SeasonYear::parse("").is_err());
        assert!(SeasonYear::parse("abcd").is_err());
    }

    #[test]
    fn test_season_year_serde_transparent() {
        let season = SeasonYear::parse("2023").unwrap();
        assert_eq!(serde_json::to_string(&season).unwrap(), r#""2023""#);
        let back: SeasonYear = serde_json::from_str(r#""2023/24""#).unwrap();
        assert_eq!(back, season);
    }

    #[test]
    fn test_selection_api_club_is_lowercase() {
        let sel = Selection::parse("Boca Juniors ", "2025/26").unwrap();
        assert_eq!(sel.club, "Boca Juniors");
        assert_eq!(sel.api_club(), "boca juniors");
        assert_eq!(sel.to_string(), "Boca Juniors 2025/26");
    }
}
