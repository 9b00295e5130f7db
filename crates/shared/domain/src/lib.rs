//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The registration request, the stored record and the client view are all
//! defined here and shared by the service and the gateway.

pub mod constants;
pub mod error;
pub mod gender;
pub mod user;
pub mod violation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use gender::Gender;
pub use user::{NewUser, RegistrationRequest, UserRecord, UserView, PHONE_PATTERN};
pub use violation::Violation;
