//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod announcement_repo;
pub mod feedback_repo;
pub mod location_repo;
pub mod request_repo;
pub mod user_repo;

pub use announcement_repo::AnnouncementRepo;
pub use feedback_repo::FeedbackRepo;
pub use location_repo::LocationRepo;
pub use request_repo::RequestRepo;
pub use user_repo::UserRepo;
