//! Domain primitives shared by the database and API crates.
//!
//! Nothing in here performs I/O: it holds the id/timestamp aliases, the
//! [`error::CoreError`] taxonomy, role names, and the validation rules that
//! both the repositories and the HTTP handlers rely on.

pub mod announcement;
pub mod error;
pub mod feedback;
pub mod location;
pub mod request;
pub mod roles;
pub mod types;
pub mod validation;
