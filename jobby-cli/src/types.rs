//! Common types used across CLI modules

use anyhow::{Result, bail};
use uuid::Uuid;

/// Job reference typed by the user: a full UUID or an unambiguous prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdOrPrefix {
    /// Full UUID
    Full(Uuid),
    /// Lowercased prefix of the hyphenated UUID form
    Prefix(String),
}

impl IdOrPrefix {
    /// Parse user input into an IdOrPrefix
    ///
    /// Full UUIDs are accepted in any form `Uuid::parse_str` understands.
    /// Anything else must be a non-empty run of hex digits and hyphens.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if let Ok(uuid) = Uuid::parse_str(input) {
            return Ok(IdOrPrefix::Full(uuid));
        }

        if input.is_empty() {
            bail!("Job ID cannot be empty");
        }
        if !input.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
            bail!("'{}' is not a job ID or ID prefix", input);
        }

        Ok(IdOrPrefix::Prefix(input.to_lowercase()))
    }

    /// Whether `id` is identified by this reference
    pub fn matches(&self, id: Uuid) -> bool {
        match self {
            IdOrPrefix::Full(uuid) => *uuid == id,
            IdOrPrefix::Prefix(prefix) => id.hyphenated().to_string().starts_with(prefix.as_str()),
        }
    }
}

impl std::fmt::Display for IdOrPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdOrPrefix::Full(uuid) => write!(f, "{}", uuid),
            IdOrPrefix::Prefix(prefix) => write!(f, "{}", prefix),
        }
    }
}

impl From<Uuid> for IdOrPrefix {
    fn from(uuid: Uuid) -> Self {
        IdOrPrefix::Full(uuid)
    }
}

/// Short form of a job ID for list output
pub fn short_id(id: Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(
            IdOrPrefix::parse(&uuid.to_string()).unwrap(),
            IdOrPrefix::Full(uuid)
        );
    }

    #[test]
    fn test_parse_prefix_is_lowercased() {
        assert_eq!(
            IdOrPrefix::parse("AB12").unwrap(),
            IdOrPrefix::Prefix("ab12".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(IdOrPrefix::parse("").is_err());
        assert!(IdOrPrefix::parse("acme").is_err());
    }

    #[test]
    fn test_prefix_matches_hyphenated_form() {
        let uuid = Uuid::parse_str("12345678-9abc-def0-1234-56789abcdef0").unwrap();

        assert!(IdOrPrefix::parse("1234").unwrap().matches(uuid));
        assert!(IdOrPrefix::parse("12345678-9A").unwrap().matches(uuid));
        assert!(!IdOrPrefix::parse("9abc").unwrap().matches(uuid));
        assert_eq!(short_id(uuid), "12345678");
    }
}
