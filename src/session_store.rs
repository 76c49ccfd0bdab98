use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Shop-level settings returned by the settings endpoint during [`Client::init()`].
///
/// [`Client::init()`]: crate::Client::init
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// Name of the shop the public token belongs to.
    #[serde(default)]
    pub shop_name: String,
    /// Currency code order totals are reported in.
    #[serde(default)]
    pub currency: String,
    /// Whether the affiliate program is currently accepting tracking events.
    #[serde(default = "tracking_enabled_default")]
    pub tracking_enabled: bool,
}

fn tracking_enabled_default() -> bool {
    true
}

/// A tracking session established by a successful [`Client::init()`] call.
///
/// [`Client::init()`]: crate::Client::init
#[derive(Debug, Clone)]
pub struct Session {
    /// The public token the session was initialized with.
    pub public_token: String,
    /// Settings fetched for the shop during initialization.
    pub settings: SiteSettings,
}

/// `SessionStore` provides a Sync storage for the tracking session and the cached referral code
/// that allows concurrent access for readers and writers.
pub(crate) struct SessionStore {
    session: RwLock<Option<Arc<Session>>>,
    referral_code: RwLock<Option<String>>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        Self {
            session: RwLock::new(None),
            referral_code: RwLock::new(None),
        }
    }

    pub(crate) fn session(&self) -> Option<Arc<Session>> {
        // self.session.read() should always return Ok(). Err() is possible only if the lock is
        // poisoned (writer panicked while holding the lock), which should never happen. Still,
        // using .ok()? here to not crash the app.
        let session = self.session.read().ok()?;
        session.clone()
    }

    /// Install a new session, returning the previous one.
    pub(crate) fn install_session(&self, session: Arc<Session>) -> Option<Arc<Session>> {
        let new_value = Some(session);

        let mut slot = self.session.write().ok()?;
        std::mem::replace(&mut *slot, new_value)
    }

    /// Public token of the active session, if any.
    pub(crate) fn public_token(&self) -> Option<String> {
        self.session().map(|session| session.public_token.clone())
    }

    pub(crate) fn referral_code(&self) -> Option<String> {
        let code = self.referral_code.read().ok()?;
        code.clone()
    }

    /// Store a referral code verbatim, returning the previous one.
    pub(crate) fn set_referral_code(&self, code: String) -> Option<String> {
        let new_value = Some(code);

        let mut slot = self.referral_code.write().ok()?;
        std::mem::replace(&mut *slot, new_value)
    }
}
