//! User domain entity and related types.

use std::borrow::Cow;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{DomainError, DomainResult};
use crate::gender::Gender;

/// French national number: `0` + 9 digits, or `+33` + 9 digits.
pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0\d{9}|\+33\d{9})$").expect("phone pattern is valid"));

/// Incoming registration payload.
///
/// Every field is optional at the type level so that a missing value is
/// reported as a violation rather than rejected by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegistrationRequest {
    /// Display name, must not be blank
    #[validate(
        required(message = "username is required"),
        custom(function = "not_blank", message = "username must not be blank")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "JeanDupont"))]
    pub username: Option<String>,
    /// Date of birth, strictly in the past
    #[validate(required(message = "birthdate is required"))]
    #[cfg_attr(feature = "openapi", schema(example = "1990-05-15"))]
    pub birthdate: Option<NaiveDate>,
    /// Country of residence, by name or 2-letter code
    #[validate(
        required(message = "country is required"),
        custom(function = "not_blank", message = "country must not be blank")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "France"))]
    pub country: Option<String>,
    /// Optional phone number
    #[validate(regex(
        path = *PHONE_PATTERN,
        message = "phone must be a French number (0XXXXXXXXX or +33XXXXXXXXX)"
    ))]
    #[cfg_attr(feature = "openapi", schema(example = "0612345678"))]
    pub phone: Option<String>,
    /// Optional gender: MALE, FEMALE or OTHER (any case)
    #[cfg_attr(feature = "openapi", schema(example = "MALE"))]
    pub gender: Option<String>,
}

/// Rejects strings that are empty once trimmed.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}

/// A validated user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub birthdate: NaiveDate,
    pub country: String,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
}

impl NewUser {
    /// Build a record from a request that already passed validation.
    ///
    /// Gender text is resolved again here; the record never holds an
    /// unrecognized category.
    pub fn from_request(request: RegistrationRequest) -> DomainResult<Self> {
        let gender = match request.gender.as_deref() {
            Some(text) if !text.trim().is_empty() => Some(text.parse::<Gender>()?),
            _ => None,
        };

        Ok(Self {
            username: request
                .username
                .ok_or(DomainError::MissingField("username"))?,
            birthdate: request
                .birthdate
                .ok_or(DomainError::MissingField("birthdate"))?,
            country: request.country.ok_or(DomainError::MissingField("country"))?,
            phone: request.phone,
            gender,
        })
    }

    /// Attach the identifier assigned by the store.
    pub fn with_id(self, id: i64) -> UserRecord {
        UserRecord {
            id,
            username: self.username,
            birthdate: self.birthdate,
            country: self.country,
            phone: self.phone,
            gender: self.gender,
        }
    }
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub birthdate: NaiveDate,
    pub country: String,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
}

/// User view returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserView {
    /// Identifier assigned on creation
    pub id: i64,
    pub username: String,
    pub birthdate: NaiveDate,
    pub country: String,
    pub phone: Option<String>,
    /// Canonical category name
    pub gender: Option<String>,
}

impl From<UserRecord> for UserView {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username,
            birthdate: user.birthdate,
            country: user.country,
            phone: user.phone,
            gender: user.gender.map(String::from),
        }
    }
}

impl From<&UserRecord> for UserView {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            birthdate: user.birthdate,
            country: user.country.clone(),
            phone: user.phone.clone(),
            gender: user.gender.map(String::from),
        }
    }
}
