//! Registration, login and password reset.
//!
//! Credentials are stored as given; this is a demo time clock, not an
//! identity provider. Every validation runs before the user store is
//! touched, so a rejected request never changes stored data.

use crate::core::session::Session;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_session, count_users, insert_user, save_session};
use crate::db::store::UserStore;
use crate::errors::{AppError, AppResult};
use crate::models::user::{Address, NewUser, User};
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email regex is valid")
});

const PASSWORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const GENERATED_PASSWORD_LEN: usize = 8;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Random lowercase alphanumeric password for self-registered users.
pub fn generate_password() -> String {
    let mut rng = rand::rng();
    (0..GENERATED_PASSWORD_LEN)
        .map(|_| PASSWORD_ALPHABET[rng.random_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}

/// Registration form, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub company: String,
    pub address: Address,
}

pub struct AuthLogic;

impl AuthLogic {
    /// Validate and create a user with a generated password, then log
    /// them in. The returned user carries the generated password.
    pub fn register(pool: &mut DbPool, form: Registration) -> AppResult<Session> {
        let name = form.name.trim();
        let email = form.email.trim();
        let company = form.company.trim();

        if name.is_empty() || email.is_empty() || company.is_empty() {
            return Err(AppError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(AppError::InvalidEmail(email.to_string()));
        }
        if pool.user_by_email(email)?.is_some() {
            return Err(AppError::EmailTaken(email.to_string()));
        }

        let user = pool.create_user(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: generate_password(),
            company: company.to_string(),
            address: trim_address(form.address),
        })?;

        save_session(pool, &user.id)?;
        audit(&pool.conn, "register", &user.email, &format!("User '{}' registered", user.name));

        Ok(Session::new(user))
    }

    pub fn login(pool: &mut DbPool, email: &str, password: &str) -> AppResult<Session> {
        let email = email.trim();

        if email.is_empty() || password.is_empty() {
            return Err(AppError::MissingFields);
        }

        let user = match pool.user_by_email(email)? {
            Some(u) if u.password == password => u,
            _ => {
                audit(&pool.conn, "login_failed", email, "Invalid email or password");
                return Err(AppError::InvalidCredentials);
            }
        };

        save_session(pool, &user.id)?;
        audit(&pool.conn, "login", &user.email, "User logged in");

        Ok(Session::new(user))
    }

    /// Returns `false` when nobody was logged in.
    pub fn logout(pool: &mut DbPool) -> AppResult<bool> {
        let had_session = clear_session(pool)?;
        if had_session {
            audit(&pool.conn, "logout", "", "User logged out");
        }
        Ok(had_session)
    }

    /// First step of the reset flow: the email must belong to a user.
    pub fn find_email(pool: &DbPool, email: &str) -> AppResult<User> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::MissingFields);
        }
        pool.user_by_email(email)?
            .ok_or_else(|| AppError::EmailNotFound(email.to_string()))
    }

    pub fn reset_password(
        pool: &mut DbPool,
        email: &str,
        new_password: &str,
        confirm: &str,
        min_len: usize,
    ) -> AppResult<()> {
        let user = Self::find_email(pool, email)?;

        if new_password.is_empty() || confirm.is_empty() {
            return Err(AppError::MissingFields);
        }
        if new_password != confirm {
            return Err(AppError::PasswordMismatch);
        }
        if new_password.chars().count() < min_len {
            return Err(AppError::PasswordTooShort(min_len));
        }

        if !pool.update_password(&user.email, new_password)? {
            return Err(AppError::EmailNotFound(user.email));
        }

        audit(&pool.conn, "reset_password", &user.email, "Password changed");
        Ok(())
    }

    /// Insert the two demo accounts when the users table is empty.
    /// Returns the number of users inserted.
    pub fn seed_demo_users(pool: &DbPool) -> AppResult<usize> {
        if count_users(pool)? > 0 {
            return Ok(0);
        }

        let demo = [
            ("1", "João Silva", "joao.silva@empresa.com", "Tech Solutions"),
            ("2", "Maria Santos", "maria.santos@empresa.com", "Inovação Digital"),
        ];

        for (id, name, email, company) in demo {
            insert_user(
                pool,
                id,
                &NewUser {
                    name: name.into(),
                    email: email.into(),
                    password: "senha123".into(),
                    company: company.into(),
                    address: Address::default(),
                },
            )?;
        }

        audit(&pool.conn, "seed", "users", "Demo users created");
        Ok(demo.len())
    }
}

fn trim_address(addr: Address) -> Address {
    let clean = |v: Option<String>| {
        v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
    };
    Address {
        cep: clean(addr.cep),
        street: clean(addr.street),
        neighborhood: clean(addr.neighborhood),
        city: clean(addr.city),
    }
}
