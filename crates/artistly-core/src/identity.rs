//! Sign-up and sign-in.
//!
//! [`IdentityProvider`] is the boundary a real identity service sits behind.
//! The only implementation here, [`MockIdentityProvider`], is a
//! **non-production** stand-in that keeps accounts in a local
//! [`KeyValueStore`]. It stores a salted PBKDF2 digest per account, never
//! the password itself, but offers no protection beyond that: no rate
//! limiting, no lockout, and the store is readable by anyone with access to
//! the file.

use pbkdf2::pbkdf2_hmac;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::LazyLock;
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};
use crate::model::{Role, User};
use crate::session::store::{read_json, write_json, KeyValueStore};
use crate::validation::FieldErrors;

/// Store key holding the registered accounts.
pub const ACCOUNTS_KEY: &str = "artistly_users";

pub const MIN_PASSWORD_LEN: usize = 6;

const PBKDF2_ITERATIONS: u32 = 10_000;
const HASH_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;

#[allow(clippy::unwrap_used)]
static LOOSE_EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// A sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
}

/// A sign-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignIn {
    pub email: String,
    pub password: String,
}

/// Registers and authenticates users.
///
/// Both operations report form problems as [`Error::Validation`], keyed by
/// field (`name`, `email`, `password`, `confirmPassword`, `role`).
pub trait IdentityProvider {
    fn sign_up(&mut self, request: &SignUp) -> Result<User>;
    fn sign_in(&self, request: &SignIn) -> Result<User>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredAccount {
    name: String,
    email: String,
    role: Role,
    salt: String,
    password_hash: String,
}

impl StoredAccount {
    fn user(&self) -> User {
        User::new(self.name.clone(), self.email.clone(), self.role)
    }

    fn verify(&self, password: &str) -> Result<bool> {
        let salt = decode_hex(&self.salt, &self.email)?;
        let expected = decode_hex(&self.password_hash, &self.email)?;
        let computed = hash_password(password, &salt);
        Ok(computed.as_slice().ct_eq(expected.as_slice()).into())
    }
}

fn decode_hex(value: &str, email: &str) -> Result<Vec<u8>> {
    hex::decode(value)
        .map_err(|e| Error::InvalidData(format!("corrupt credentials for {email}: {e}")))
}

fn hash_password(password: &str, salt: &[u8]) -> [u8; HASH_LENGTH] {
    let mut hash = [0u8; HASH_LENGTH];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut hash);
    hash
}

/// Accounts kept in a local key-value store. Not for production use.
#[derive(Debug)]
pub struct MockIdentityProvider<S> {
    store: S,
}

impl<S: KeyValueStore> MockIdentityProvider<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn accounts(&self) -> Result<Vec<StoredAccount>> {
        Ok(read_json(&self.store, ACCOUNTS_KEY)?.unwrap_or_default())
    }

    fn find(&self, email: &str) -> Result<Option<StoredAccount>> {
        Ok(self.accounts()?.into_iter().find(|a| a.email == email))
    }

    /// Insert the account, replacing any existing one with the same email.
    fn save(&mut self, account: StoredAccount) -> Result<()> {
        let mut accounts = self.accounts()?;
        match accounts.iter_mut().find(|a| a.email == account.email) {
            Some(existing) => *existing = account,
            None => accounts.push(account),
        }
        write_json(&mut self.store, ACCOUNTS_KEY, &accounts)
    }
}

fn check_credentials(email: &str, password: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !LOOSE_EMAIL.is_match(email) {
        errors.insert("email", "Email is invalid");
    }

    if password.is_empty() {
        errors.insert("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }
}

impl<S: KeyValueStore> IdentityProvider for MockIdentityProvider<S> {
    fn sign_up(&mut self, request: &SignUp) -> Result<User> {
        let mut errors = FieldErrors::new();
        check_credentials(&request.email, &request.password, &mut errors);

        if request.name.is_empty() {
            errors.insert("name", "Name is required");
        }
        if request.confirm_password.is_empty() {
            errors.insert("confirmPassword", "Please confirm your password");
        } else if request.password != request.confirm_password {
            errors.insert("confirmPassword", "Passwords do not match");
        }
        if request.role.is_none() {
            errors.insert("role", "Please select your role");
        }
        if self.find(&request.email)?.is_some() {
            errors.insert(
                "email",
                "An account with this email already exists. Please sign in instead.",
            );
        }

        let role = match (errors.is_empty(), request.role) {
            (true, Some(role)) => role,
            _ => return Err(Error::Validation(errors)),
        };

        let salt: [u8; SALT_LENGTH] = rand::random();
        let account = StoredAccount {
            name: request.name.clone(),
            email: request.email.clone(),
            role,
            salt: hex::encode(salt),
            password_hash: hex::encode(hash_password(&request.password, &salt)),
        };
        let user = account.user();
        self.save(account)?;
        log::info!("Registered {} as {}", user.email, user.role);
        Ok(user)
    }

    fn sign_in(&self, request: &SignIn) -> Result<User> {
        let mut errors = FieldErrors::new();
        check_credentials(&request.email, &request.password, &mut errors);

        let account = self.find(&request.email)?;
        match &account {
            None => errors.insert(
                "email",
                "No account found with this email. Please sign up first.",
            ),
            Some(account) if !account.verify(&request.password)? => {
                errors.insert("password", "Incorrect password");
            }
            Some(_) => {}
        }

        match account {
            Some(account) if errors.is_empty() => {
                log::info!("Signed in {}", account.email);
                Ok(account.user())
            }
            _ => Err(Error::Validation(errors)),
        }
    }
}
