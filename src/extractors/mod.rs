//! Request extractors and the authentication middleware.

pub mod principal;
pub use principal::{authenticate, AdminRole, Authorized, RoleRequirement, UserRole};
