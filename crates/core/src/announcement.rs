//! Announcement visibility rules.

use crate::types::Timestamp;

/// An announcement is visible to students until its expiry passes.
///
/// Announcements without an expiry never expire.
pub fn is_active(expires_at: Option<Timestamp>, now: Timestamp) -> bool {
    match expires_at {
        Some(expiry) => expiry > now,
        None => true,
    }
}
