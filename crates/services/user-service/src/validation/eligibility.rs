//! Adult resident eligibility: a cross-field rule over country and birthdate.

use chrono::NaiveDate;

use common::RegistrationConfig;
use domain::{RegistrationRequest, Violation, FIELD_BIRTHDATE, FIELD_COUNTRY};

use super::Constraint;

/// Only adults living in the configured country may register.
pub struct AdultResidentConstraint {
    country_name: String,
    country_code: String,
    minimum_age: u32,
}

impl AdultResidentConstraint {
    pub fn new(config: RegistrationConfig) -> Self {
        Self {
            country_name: config.country_name,
            country_code: config.country_code,
            minimum_age: config.minimum_age,
        }
    }

    /// Exact, case-insensitive match on the country name or its code.
    pub fn is_eligible_country(&self, country: &str) -> bool {
        let normalized = country.trim().to_lowercase();
        normalized == self.country_name.to_lowercase()
            || normalized == self.country_code.to_lowercase()
    }

    /// Evaluate both fields.
    ///
    /// A missing country is reported and checking continues; a missing
    /// birthdate is reported and ends the check.
    pub fn evaluate(
        &self,
        country: Option<&str>,
        birthdate: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Vec<Violation> {
        let mut violations = Vec::new();

        match country {
            None => violations.push(Violation::new(
                FIELD_COUNTRY,
                "country is required for eligibility",
            )),
            Some(country) if !self.is_eligible_country(country) => violations.push(
                Violation::new(
                    FIELD_COUNTRY,
                    format!("only residents of {} may register", self.country_name),
                ),
            ),
            Some(_) => {}
        }

        let Some(birthdate) = birthdate else {
            violations.push(Violation::new(
                FIELD_BIRTHDATE,
                "birthdate is required for eligibility",
            ));
            return violations;
        };

        if age_in_years(birthdate, today) < self.minimum_age {
            violations.push(Violation::new(
                FIELD_BIRTHDATE,
                format!("user must be at least {} years old", self.minimum_age),
            ));
        }

        violations
    }
}

impl Constraint for AdultResidentConstraint {
    fn name(&self) -> &'static str {
        "adult_resident"
    }

    fn check(&self, request: &RegistrationRequest, today: NaiveDate) -> Vec<Violation> {
        self.evaluate(request.country.as_deref(), request.birthdate, today)
    }
}

/// Completed years between `birthdate` and `today`; zero for future dates.
pub fn age_in_years(birthdate: NaiveDate, today: NaiveDate) -> u32 {
    today.years_since(birthdate).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Months};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn years_ago(years: u32) -> NaiveDate {
        today().checked_sub_months(Months::new(years * 12)).unwrap()
    }

    fn constraint() -> AdultResidentConstraint {
        AdultResidentConstraint::new(RegistrationConfig::default())
    }

    #[test]
    fn test_exactly_eighteen_is_eligible() {
        let violations = constraint().evaluate(Some("France"), Some(years_ago(18)), today());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_one_day_short_of_eighteen_is_rejected() {
        let birthdate = years_ago(18).checked_add_days(Days::new(1)).unwrap();
        let violations = constraint().evaluate(Some("France"), Some(birthdate), today());

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "birthdate");
        assert!(violations[0].message.contains("18"));
    }

    #[test]
    fn test_country_name_or_code_in_any_case() {
        for country in ["France", "france", "FRANCE", " France ", "FR", "fr", "Fr"] {
            let violations = constraint().evaluate(Some(country), Some(years_ago(30)), today());
            assert!(violations.is_empty(), "{} should be eligible", country);
        }
    }

    #[test]
    fn test_other_countries_are_rejected() {
        for country in ["Spain", "Friesland", "French Guiana", "FRA", "", "f r"] {
            let violations = constraint().evaluate(Some(country), Some(years_ago(30)), today());
            assert_eq!(violations.len(), 1, "{} should be rejected", country);
            assert_eq!(violations[0].field, "country");
            assert!(violations[0].message.contains("France"));
        }
    }

    #[test]
    fn test_missing_country_still_checks_age() {
        let violations = constraint().evaluate(None, Some(years_ago(10)), today());
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["country", "birthdate"]);
        assert_eq!(violations[0].message, "country is required for eligibility");
    }

    #[test]
    fn test_missing_birthdate_stops_the_check() {
        let violations = constraint().evaluate(Some("Spain"), None, today());
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[1].field, "birthdate");
        assert_eq!(violations[1].message, "birthdate is required for eligibility");
    }

    #[test]
    fn test_configured_country_and_age() {
        let constraint = AdultResidentConstraint::new(RegistrationConfig {
            country_name: "Belgium".to_string(),
            country_code: "BE".to_string(),
            minimum_age: 21,
        });

        assert!(constraint.is_eligible_country("be"));
        assert!(!constraint.is_eligible_country("France"));

        let violations = constraint.evaluate(Some("Belgium"), Some(years_ago(20)), today());
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("21"));
    }

    #[test]
    fn test_age_in_years() {
        let birthdate = NaiveDate::from_ymd_opt(2000, 6, 16).unwrap();
        assert_eq!(age_in_years(birthdate, today()), 23);
        assert_eq!(age_in_years(today(), today()), 0);
        assert_eq!(age_in_years(today().succ_opt().unwrap(), today()), 0);
    }
}
