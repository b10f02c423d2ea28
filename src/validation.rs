//! Input validation for committee data.

use std::collections::HashSet;

use crate::error::{PlenumError, Result};
use crate::model::{AttendanceEntry, Organization};

/// Maximum allowed length for a title or item label.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum allowed length for free-text fields (agenda, minutes, notes).
pub const MAX_TEXT_LENGTH: usize = 50_000;

/// Maximum allowed length for an organization code.
pub const MAX_CODE_LENGTH: usize = 20;

/// Validates a title or item label.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(PlenumError::Validation("Title cannot be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(PlenumError::Validation(format!(
            "Title exceeds maximum length of {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    Ok(())
}

/// Validates a free-text field.
pub fn validate_text(text: &str) -> Result<()> {
    if text.len() > MAX_TEXT_LENGTH {
        return Err(PlenumError::Validation(format!(
            "Text exceeds maximum length of {} characters",
            MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

/// Validates an organization code.
pub fn validate_code(code: &str) -> Result<()> {
    if code.trim().is_empty() {
        return Err(PlenumError::Validation("Code cannot be empty".to_string()));
    }
    if code.len() > MAX_CODE_LENGTH {
        return Err(PlenumError::Validation(format!(
            "Code exceeds maximum length of {} characters",
            MAX_CODE_LENGTH
        )));
    }
    if code.chars().any(char::is_whitespace) {
        return Err(PlenumError::Validation(
            "Code cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validates a completion percentage. The engine enforces [0,100] rather
/// than trusting UI convention.
pub fn validate_percentage(value: i64) -> Result<()> {
    if !(0..=100).contains(&value) {
        return Err(PlenumError::Validation(format!(
            "Percentage must be between 0 and 100, got {}",
            value
        )));
    }
    Ok(())
}

/// Validates a participant or expectation count.
pub fn validate_count(label: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(PlenumError::Validation(format!(
            "{} cannot be negative, got {}",
            label, value
        )));
    }
    Ok(())
}

/// Validates that a register-attendance entry set covers the organization
/// roster exactly: every organization once, no unknowns, no duplicates.
/// Omission counts as an error rather than implicit absence.
pub fn validate_roster_coverage(
    entries: &[AttendanceEntry],
    organizations: &[Organization],
) -> Result<()> {
    let roster: HashSet<i64> = organizations.iter().map(|o| o.id).collect();

    let mut seen = HashSet::new();
    for entry in entries {
        if !roster.contains(&entry.organization_id) {
            return Err(PlenumError::Validation(format!(
                "Unknown organization id {} in attendance entries",
                entry.organization_id
            )));
        }
        if !seen.insert(entry.organization_id) {
            return Err(PlenumError::Validation(format!(
                "Duplicate attendance entry for organization id {}",
                entry.organization_id
            )));
        }
    }

    if seen.len() != roster.len() {
        let missing: Vec<String> = organizations
            .iter()
            .filter(|o| !seen.contains(&o.id))
            .map(|o| o.code.clone())
            .collect();
        return Err(PlenumError::Validation(format!(
            "Attendance entries must cover every organization; missing: {}",
            missing.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RepresentativeKind;
    use chrono::Utc;

    fn org(id: i64, code: &str) -> Organization {
        let now = Utc::now();
        Organization {
            id,
            code: code.to_string(),
            name: format!("Organization {code}"),
            rank: id,
            created: now,
            updated: now,
        }
    }

    fn entry(organization_id: i64, present: bool) -> AttendanceEntry {
        AttendanceEntry {
            organization_id,
            present,
            representative: RepresentativeKind::Primary,
        }
    }

    #[test]
    fn test_validate_title_empty() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_title_valid() {
        assert!(validate_title("Quarterly ordinary meeting").is_ok());
    }

    #[test]
    fn test_validate_title_too_long() {
        let long_title = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert!(validate_title(&long_title).is_err());
    }

    #[test]
    fn test_validate_code() {
        assert!(validate_code("SED").is_ok());
        assert!(validate_code("").is_err());
        assert!(validate_code("TWO WORDS").is_err());
        assert!(validate_code(&"X".repeat(MAX_CODE_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_percentage_bounds() {
        assert!(validate_percentage(0).is_ok());
        assert!(validate_percentage(100).is_ok());
        assert!(validate_percentage(-1).is_err());
        assert!(validate_percentage(101).is_err());
    }

    #[test]
    fn test_validate_count_negative() {
        assert!(validate_count("expected participants", 0).is_ok());
        assert!(validate_count("expected participants", -3).is_err());
    }

    #[test]
    fn test_roster_coverage_complete() {
        let orgs = vec![org(1, "A"), org(2, "B"), org(3, "C")];
        let entries = vec![entry(1, true), entry(2, false), entry(3, true)];
        assert!(validate_roster_coverage(&entries, &orgs).is_ok());
    }

    #[test]
    fn test_roster_coverage_missing_organization() {
        let orgs = vec![org(1, "A"), org(2, "B"), org(3, "C")];
        let entries = vec![entry(1, true), entry(2, false)];
        let err = validate_roster_coverage(&entries, &orgs).unwrap_err();
        assert!(err.to_string().contains("missing: C"));
    }

    #[test]
    fn test_roster_coverage_unknown_organization() {
        let orgs = vec![org(1, "A"), org(2, "B")];
        let entries = vec![entry(1, true), entry(2, false), entry(9, true)];
        let err = validate_roster_coverage(&entries, &orgs).unwrap_err();
        assert!(err.to_string().contains("Unknown organization"));
    }

    #[test]
    fn test_roster_coverage_duplicate_organization() {
        let orgs = vec![org(1, "A"), org(2, "B")];
        let entries = vec![entry(1, true), entry(1, false), entry(2, true)];
        let err = validate_roster_coverage(&entries, &orgs).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }
}
