//! Request validation.
//!
//! Each rule is a [`Constraint`]; the [`ValidationEngine`] runs a fixed list
//! of them and gathers every violation instead of stopping at the first one.

mod eligibility;
mod field_rules;
mod gender;

use chrono::NaiveDate;

use common::RegistrationConfig;
use domain::{RegistrationRequest, Violation};

pub use eligibility::AdultResidentConstraint;
pub use field_rules::{FieldRules, PastBirthdate};
pub use gender::{check_gender, GenderConstraint};

/// A rule evaluated against a whole registration request.
///
/// Implementations never fail; an empty vector means the rule holds.
pub trait Constraint: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Check the request against `today` as the reference date.
    fn check(&self, request: &RegistrationRequest, today: NaiveDate) -> Vec<Violation>;
}

/// Runs every registration constraint in a fixed order.
pub struct ValidationEngine {
    constraints: Vec<Box<dyn Constraint>>,
}

impl ValidationEngine {
    /// Field rules, past date, gender, then eligibility.
    pub fn new(config: RegistrationConfig) -> Self {
        Self {
            constraints: vec![
                Box::new(FieldRules),
                Box::new(PastBirthdate),
                Box::new(GenderConstraint),
                Box::new(AdultResidentConstraint::new(config)),
            ],
        }
    }

    /// Collect all violations for `request`.
    ///
    /// An absent request is trivially valid here; the service rejects it
    /// before calling the engine.
    pub fn validate(&self, request: Option<&RegistrationRequest>, today: NaiveDate) -> Vec<Violation> {
        let Some(request) = request else {
            return Vec::new();
        };

        let violations: Vec<Violation> = self
            .constraints
            .iter()
            .flat_map(|constraint| {
                let found = constraint.check(request, today);
                if !found.is_empty() {
                    tracing::debug!(
                        constraint = constraint.name(),
                        count = found.len(),
                        "Constraint violated"
                    );
                }
                found
            })
            .collect();

        violations
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(RegistrationConfig::default())
    }
}
