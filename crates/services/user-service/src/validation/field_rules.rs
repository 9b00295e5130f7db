//! Per-field syntactic rules.

use chrono::NaiveDate;
use validator::Validate;

use domain::{RegistrationRequest, Violation, FIELD_BIRTHDATE, REQUEST_FIELDS};

use super::Constraint;

/// Required, non-blank and phone-shape rules declared on the request type.
pub struct FieldRules;

impl Constraint for FieldRules {
    fn name(&self) -> &'static str {
        "field_rules"
    }

    fn check(&self, request: &RegistrationRequest, _today: NaiveDate) -> Vec<Violation> {
        let Err(errors) = request.validate() else {
            return Vec::new();
        };

        let field_errors = errors.field_errors();
        REQUEST_FIELDS
            .iter()
            .filter_map(|field| field_errors.get(*field).map(|errs| (*field, errs)))
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    Violation::new(field, message)
                })
            })
            .collect()
    }
}

/// The birthdate, when given, must be strictly before today.
pub struct PastBirthdate;

impl Constraint for PastBirthdate {
    fn name(&self) -> &'static str {
        "past_birthdate"
    }

    fn check(&self, request: &RegistrationRequest, today: NaiveDate) -> Vec<Violation> {
        match request.birthdate {
            Some(birthdate) if birthdate >= today => vec![Violation::new(
                FIELD_BIRTHDATE,
                "birthdate must be in the past",
            )],
            _ => Vec::new(),
        }
    }
}
