use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::form::is_email;
use crate::session::{Credentials, UserSession, normalize_email};
use crate::{Error, Result};

/// Storage key suffix for the persisted account list.
pub const ACCOUNTS_STORAGE_KEY: &str = "accounts";

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: String,
    password_digest: String,
}

impl Account {
    fn session(&self) -> UserSession {
        UserSession {
            user_id: self.user_id,
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Accounts able to sign in, keyed by normalized email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDirectory {
    accounts: BTreeMap<String, Account>,
}

impl AccountDirectory {
    pub fn register(
        &mut self,
        display_name: &str,
        credentials: &Credentials,
    ) -> Result<UserSession> {
        let email = credentials.normalized_email();
        let display_name = display_name.trim();

        if display_name.is_empty() {
            return Err("a display name is required".into());
        }
        if !is_email(&email) {
            let entered = credentials.email.trim();
            return Err(format!("'{entered}' is not a valid email address").into());
        }
        if credentials.password.expose_secret().chars().count() < MIN_PASSWORD_LEN {
            return Err(format!("passwords must be at least {MIN_PASSWORD_LEN} characters").into());
        }
        if self.accounts.contains_key(&email) {
            return Err(format!("an account already exists for {email}").into());
        }

        let account = Account {
            user_id: Uuid::new_v4(),
            password_digest: password_digest(&email, credentials.password.expose_secret()),
            display_name: display_name.to_string(),
            email: email.clone(),
        };
        let session = account.session();
        self.accounts.insert(email, account);
        Ok(session)
    }

    pub fn authenticate(&self, credentials: &Credentials) -> Result<UserSession> {
        let email = credentials.normalized_email();
        let digest = password_digest(&email, credentials.password.expose_secret());

        self.accounts
            .get(&email)
            .filter(|account| account.password_digest == digest)
            .map(Account::session)
            .ok_or_else(|| Error::from("invalid email or password"))
    }

    /// Whether a restored session still belongs to a known account.
    pub fn recognizes(&self, session: &UserSession) -> bool {
        self.accounts
            .get(&normalize_email(&session.email))
            .is_some_and(|account| account.user_id == session.user_id)
    }

    /// Fold in accounts from `other`, keeping ours on conflict.
    pub fn merge(&mut self, other: AccountDirectory) {
        for (email, account) in other.accounts {
            self.accounts.entry(email).or_insert(account);
        }
    }
}

fn password_digest(email: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}
