use crate::db::pool::DbPool;
use crate::db::queries::load_session_user_id;
use crate::db::store::UserStore;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;

/// The logged-in user, passed explicitly to every operation acting on
/// their behalf.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// Load the session persisted by `login`/`register`.
    pub fn current(pool: &DbPool) -> AppResult<Self> {
        let id = load_session_user_id(pool)?.ok_or(AppError::NotLoggedIn)?;
        let user = pool.user_by_id(&id)?.ok_or(AppError::NotLoggedIn)?;
        Ok(Self::new(user))
    }
}
