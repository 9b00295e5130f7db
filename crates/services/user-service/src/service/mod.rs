//! Service layer - registration use cases.

mod traced;
mod user_service;

pub use traced::TracedUserService;
pub use user_service::{local_today, Clock, UserManager, UserService};
