//! Gender category set.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{GENDER_FEMALE, GENDER_MALE, GENDER_OTHER, VALID_GENDERS};
use crate::error::DomainError;

/// The fixed set of gender categories a user may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => GENDER_MALE,
            Gender::Female => GENDER_FEMALE,
            Gender::Other => GENDER_OTHER,
        }
    }

    /// Accepted names joined for display in messages, e.g. `MALE, FEMALE, OTHER`
    pub fn accepted_values() -> String {
        VALID_GENDERS.join(", ")
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    /// Case-insensitive after trimming; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            GENDER_MALE => Ok(Gender::Male),
            GENDER_FEMALE => Ok(Gender::Female),
            GENDER_OTHER => Ok(Gender::Other),
            _ => Err(DomainError::unknown_gender(s)),
        }
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
