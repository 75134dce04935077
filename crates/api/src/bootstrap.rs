//! Startup tasks that run once before the server accepts traffic.

use helpdesk_core::error::CoreError;
use helpdesk_db::models::user::{CreateUser, UserRole};
use helpdesk_db::repositories::UserRepo;
use helpdesk_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};

/// Make sure the configured administrator account exists.
///
/// Registration only ever creates students, so this is the one way an
/// `ADMIN` enters the system. An existing user with the same username is
/// left untouched. Returns `true` if a new account was created.
pub async fn ensure_admin(pool: &DbPool, seed: &AdminSeed) -> AppResult<bool> {
    if UserRepo::exists_by_username(pool, &seed.username).await? {
        tracing::debug!(username = %seed.username, "Admin account already present");
        return Ok(false);
    }
    if UserRepo::exists_by_email(pool, &seed.email).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Email {} already belongs to another user",
            seed.email
        ))));
    }

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = UserRepo::create(
        pool,
        &CreateUser {
            username: seed.username.clone(),
            email: seed.email.clone(),
            password_hash,
            role: UserRole::Admin,
        },
    )
    .await?;

    tracing::info!(user_id = admin.id, username = %admin.username, "Admin account created");
    Ok(true)
}
