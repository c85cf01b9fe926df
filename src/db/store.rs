//! Storage seams used by the core logic.
//!
//! The core only needs to append punches, read a user's punches back in
//! insertion order, and look users up by email. [`DbPool`](crate::db::pool::DbPool)
//! implements both traits on top of SQLite.

use crate::errors::AppResult;
use crate::models::punch::{NewPunch, PunchRecord};
use crate::models::user::{NewUser, User};

/// Append-only punch storage. Duplicates are accepted; the
/// once-per-day rule lives in the punch logic.
pub trait RecordStore {
    fn append(&mut self, punch: NewPunch) -> AppResult<PunchRecord>;

    /// All punches of `user_id`, oldest first.
    fn query(&self, user_id: &str) -> AppResult<Vec<PunchRecord>>;
}

pub trait UserStore {
    fn create_user(&mut self, user: NewUser) -> AppResult<User>;

    fn user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    fn user_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Returns `false` when no user has `email`.
    fn update_password(&mut self, email: &str, password: &str) -> AppResult<bool>;
}
