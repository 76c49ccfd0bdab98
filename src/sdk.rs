use std::sync::Arc;

use async_trait::async_trait;

use crate::{events::ConversionOrder, session_store::Session, Client, Result};

/// The call contract between an application and the tracking SDK.
///
/// [`Client`] is the HTTP-backed implementation. The handlers in [`crate::app`] are generic over
/// this trait, so they can be driven against any substitute client (the tests use a scripted
/// fake).
#[async_trait]
pub trait AffiliateSdk {
    /// Initialize a tracking session with the given public token.
    async fn init(&self, public_token: &str) -> Result<Arc<Session>>;

    /// Public token of the active session, or `None` before initialization. Synchronous.
    fn public_token(&self) -> Option<String>;

    /// Store a referral code verbatim.
    async fn set_referral_code(&self, code: String) -> Result<()>;

    /// The cached referral code, or `None` if none has been recorded.
    async fn referral_code(&self) -> Result<Option<String>>;

    /// Record a page view, returning the API's result object.
    async fn track_page_view(&self) -> Result<serde_json::Value>;

    /// Record a completed order, returning the API's result object.
    async fn track_conversion(&self, order: ConversionOrder) -> Result<serde_json::Value>;
}

#[async_trait]
impl AffiliateSdk for Client<'_> {
    async fn init(&self, public_token: &str) -> Result<Arc<Session>> {
        Client::init(self, public_token).await
    }

    fn public_token(&self) -> Option<String> {
        Client::public_token(self)
    }

    async fn set_referral_code(&self, code: String) -> Result<()> {
        Client::set_referral_code(self, code).await
    }

    async fn referral_code(&self) -> Result<Option<String>> {
        Client::referral_code(self).await
    }

    async fn track_page_view(&self) -> Result<serde_json::Value> {
        Client::track_page_view(self).await
    }

    async fn track_conversion(&self, order: ConversionOrder) -> Result<serde_json::Value> {
        Client::track_conversion(self, order).await
    }
}
