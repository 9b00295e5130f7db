//! Gender category constraint.

use chrono::NaiveDate;

use domain::{Gender, RegistrationRequest, Violation, FIELD_GENDER};

use super::Constraint;

/// Check an optional gender value against the category set.
///
/// Absent or blank is accepted since the field is optional.
pub fn check_gender(value: Option<&str>) -> Option<Violation> {
    let value = value?;
    if value.trim().is_empty() || value.parse::<Gender>().is_ok() {
        return None;
    }

    Some(Violation::new(
        FIELD_GENDER,
        format!(
            "invalid gender '{}', accepted values: {}",
            value,
            Gender::accepted_values()
        ),
    ))
}

/// Request-level wrapper around [`check_gender`].
pub struct GenderConstraint;

impl Constraint for GenderConstraint {
    fn name(&self) -> &'static str {
        "gender"
    }

    fn check(&self, request: &RegistrationRequest, _today: NaiveDate) -> Vec<Violation> {
        check_gender(request.gender.as_deref()).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_blank_are_valid() {
        assert!(check_gender(None).is_none());
        assert!(check_gender(Some("")).is_none());
        assert!(check_gender(Some("   ")).is_none());
    }

    #[test]
    fn test_categories_match_in_any_case() {
        for value in ["MALE", "male", "Female", "oThEr", " other "] {
            assert!(check_gender(Some(value)).is_none(), "{} should be accepted", value);
        }
    }

    #[test]
    fn test_unknown_value_lists_accepted_values() {
        let violation = check_gender(Some("INVALID")).unwrap();
        assert_eq!(violation.field, "gender");
        assert!(violation.message.contains("'INVALID'"));
        assert!(violation.message.contains("MALE, FEMALE, OTHER"));
    }

    #[test]
    fn test_partial_names_are_rejected() {
        assert!(check_gender(Some("M")).is_some());
        assert!(check_gender(Some("fem")).is_some());
        assert!(check_gender(Some("MALE FEMALE")).is_some());
    }
}
