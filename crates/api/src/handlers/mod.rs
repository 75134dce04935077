//! Request handlers, one submodule per resource.
//!
//! Handlers receive the caller as an explicit extractor ([`AuthUser`],
//! [`RequireAdmin`], [`RequireStudent`]), delegate persistence to the
//! repositories in `helpdesk_db`, and map failures via [`AppError`].
//!
//! [`AuthUser`]: crate::middleware::auth::AuthUser
//! [`RequireAdmin`]: crate::middleware::rbac::RequireAdmin
//! [`RequireStudent`]: crate::middleware::rbac::RequireStudent
//! [`AppError`]: crate::error::AppError

pub mod announcement;
pub mod auth;
pub mod feedback;
pub mod location;
pub mod request;
