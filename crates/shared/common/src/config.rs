//! Shared configuration structures.

use domain::{DEFAULT_REQUIRED_COUNTRY_CODE, DEFAULT_REQUIRED_COUNTRY_NAME, MINIMUM_AGE_YEARS};
use serde::{Deserialize, Serialize};

/// Registration eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// Full name of the country whose residents may register
    pub country_name: String,
    /// 2-letter code of that country
    pub country_code: String,
    /// Minimum age in completed years
    pub minimum_age: u32,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            country_name: DEFAULT_REQUIRED_COUNTRY_NAME.to_string(),
            country_code: DEFAULT_REQUIRED_COUNTRY_CODE.to_string(),
            minimum_age: MINIMUM_AGE_YEARS,
        }
    }
}
