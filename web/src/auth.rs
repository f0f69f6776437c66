use dioxus::prelude::*;
use secrecy::ExposeSecret;
use types::{
    AccountDirectory, Credentials, Result, UserSession, account::ACCOUNTS_STORAGE_KEY,
    decode_session, encode_session, session::SESSION_STORAGE_KEY,
};

use crate::config::CONFIG;
use crate::storage;

/// Process-wide authentication state. Only the methods here write to it.
#[derive(Clone, Copy)]
pub struct AuthState {
    session: Signal<Option<UserSession>>,
    loading: Signal<bool>,
    accounts: Signal<AccountDirectory>,
}

impl AuthState {
    fn new(accounts: AccountDirectory) -> Self {
        Self {
            session: Signal::new(None),
            loading: Signal::new(true),
            accounts: Signal::new(accounts),
        }
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn session(&self) -> Option<UserSession> {
        self.session.read().clone()
    }

    /// Pick up accounts and the session left by a previous visit, then settle loading.
    async fn restore(mut self) {
        if let Some(json) = storage::load(ACCOUNTS_STORAGE_KEY).await {
            match serde_json::from_str::<AccountDirectory>(&json) {
                Ok(stored) => self.accounts.write().merge(stored),
                Err(error) => tracing::warn!(%error, "discarding unreadable account list"),
            }
        }

        if let Some(token) = storage::load(SESSION_STORAGE_KEY).await {
            match decode_session(&token) {
                Ok(session) if self.accounts.read().recognizes(&session) => {
                    tracing::info!(email = %session.email, "restored session");
                    self.session.set(Some(session));
                }
                Ok(session) => {
                    tracing::info!(email = %session.email, "dropping session for unknown account");
                    storage::remove(SESSION_STORAGE_KEY);
                }
                Err(error) => {
                    tracing::warn!(%error, "discarding unreadable session");
                    storage::remove(SESSION_STORAGE_KEY);
                }
            }
        }

        self.loading.set(false);
    }

    pub fn sign_in(&mut self, credentials: &Credentials) -> Result<UserSession> {
        let session = self.accounts.read().authenticate(credentials).inspect_err(|error| {
            tracing::info!(email = %credentials.normalized_email(), %error, "sign-in rejected");
        })?;
        tracing::info!(email = %session.email, "signed in");
        self.start(session.clone());
        Ok(session)
    }

    pub fn sign_up(
        &mut self,
        display_name: &str,
        credentials: &Credentials,
    ) -> Result<UserSession> {
        let session = self.accounts.write().register(display_name, credentials)?;
        tracing::info!(email = %session.email, "registered account");

        match serde_json::to_string(&*self.accounts.read()) {
            Ok(json) => storage::save(ACCOUNTS_STORAGE_KEY, &json),
            Err(error) => tracing::warn!(%error, "failed to persist accounts"),
        }

        self.start(session.clone());
        Ok(session)
    }

    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(email = %session.email, "signed out");
        }
        storage::remove(SESSION_STORAGE_KEY);
    }

    fn start(&mut self, session: UserSession) {
        match encode_session(&session) {
            Ok(token) => storage::save(SESSION_STORAGE_KEY, &token),
            Err(error) => tracing::warn!(%error, "failed to persist session"),
        }
        self.session.set(Some(session));
    }
}

fn initial_accounts() -> AccountDirectory {
    let mut accounts = AccountDirectory::default();
    if let Some(demo) = &CONFIG.demo_account {
        let credentials = Credentials::new(demo.email.clone(), demo.password.expose_secret());
        if let Err(error) = accounts.register(&demo.display_name, &credentials) {
            tracing::warn!(%error, "skipping demo account");
        }
    }
    accounts
}

/// Provides [`AuthState`] to everything below it and restores the previous session.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth = use_context_provider(|| AuthState::new(initial_accounts()));
    use_hook(move || spawn(auth.restore()));

    rsx! {
        {children}
    }
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
