//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Gender
// =============================================================================

/// Canonical name of the male category
pub const GENDER_MALE: &str = "MALE";

/// Canonical name of the female category
pub const GENDER_FEMALE: &str = "FEMALE";

/// Canonical name of the catch-all category
pub const GENDER_OTHER: &str = "OTHER";

/// All valid gender values, in the order they are listed to clients
pub const VALID_GENDERS: &[&str] = &[GENDER_MALE, GENDER_FEMALE, GENDER_OTHER];

// =============================================================================
// Eligibility
// =============================================================================

/// Country whose residents may register
pub const DEFAULT_REQUIRED_COUNTRY_NAME: &str = "France";

/// ISO 3166-1 alpha-2 code of the required country
pub const DEFAULT_REQUIRED_COUNTRY_CODE: &str = "FR";

/// Minimum age in completed years
pub const MINIMUM_AGE_YEARS: u32 = 18;

// =============================================================================
// Field paths
// =============================================================================

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_BIRTHDATE: &str = "birthdate";
pub const FIELD_COUNTRY: &str = "country";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_GENDER: &str = "gender";

/// Request fields in declaration order
pub const REQUEST_FIELDS: &[&str] = &[
    FIELD_USERNAME,
    FIELD_BIRTHDATE,
    FIELD_COUNTRY,
    FIELD_PHONE,
    FIELD_GENDER,
];

// =============================================================================
// Messages
// =============================================================================

/// Returned when a lookup by identifier finds nothing
pub const MSG_USER_NOT_FOUND: &str = "user not found";

/// Returned when the request body is `null`
pub const MSG_BODY_REQUIRED: &str = "request body is required";
