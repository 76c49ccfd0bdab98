use std::sync::Arc;

use chrono::Utc;
use reqwest::StatusCode;
use url::Url;
use uuid::Uuid;

use crate::{
    events::{ConversionEvent, ConversionOrder, PageViewEvent, TrackedEvent},
    session_store::{Session, SessionStore, SiteSettings},
    ClientConfig, Error, Result,
};

const SETTINGS_ENDPOINT: &str = "/sdk/settings";
const PAGE_VIEW_ENDPOINT: &str = "/track/pageview";
const CONVERSION_ENDPOINT: &str = "/track/conversion";

/// Header carrying the shop's public token on every API call.
const PUBLIC_TOKEN_HEADER: &str = "x-goaffpro-public-token";

/// A client for the Goaffpro tracking API.
///
/// In order to create a client instance, first create [`ClientConfig`].
///
/// # Sessions
///
/// Before recording any events, establish a session by calling [`Client::init()`] with the shop's
/// public token. Until then, tracking calls return [`Error::NotInitialized`].
///
/// # Examples
/// ```no_run
/// # async fn run() -> goaffpro::Result<()> {
/// let client = goaffpro::ClientConfig::new().to_client();
/// client.init("x-goaffpro-public-token").await?;
/// client.track_page_view().await?;
/// # Ok(()) }
/// ```
pub struct Client<'a> {
    store: Arc<SessionStore>,
    config: ClientConfig<'a>,
    // reqwest::Client holds a connection pool internally, so we're reusing it between requests.
    http: reqwest::Client,
}

impl<'a> Client<'a> {
    /// Create a new `Client` using the specified configuration.
    ///
    /// ```
    /// # use goaffpro::{Client, ClientConfig};
    /// let client = Client::new(ClientConfig::new());
    /// ```
    pub fn new(config: ClientConfig<'a>) -> Self {
        Client {
            store: Arc::new(SessionStore::new()),
            config,
            http: reqwest::Client::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn new_with_store(config: ClientConfig<'a>, store: Arc<SessionStore>) -> Self {
        Self {
            store,
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Initialize a tracking session with the given public token.
    ///
    /// Fetches the shop settings from the API and installs the session, making the token available
    /// through [`Client::public_token()`] and enabling the tracking calls. The token is sent as
    /// given; it is the caller's job to normalize user input (see [`crate::app::TokenForm`]).
    ///
    /// # Errors
    ///
    /// Returns an error in the following cases:
    /// - [`Error::EmptyPublicToken`] if `public_token` is empty.
    /// - [`Error::Unauthorized`] if the API does not recognize the token.
    /// - [`Error::InvalidBaseUrl`] or [`Error::Network`] for configuration and transport failures.
    pub async fn init(&self, public_token: &str) -> Result<Arc<Session>> {
        if public_token.is_empty() {
            return Err(Error::EmptyPublicToken);
        }

        let url = self.endpoint_url(SETTINGS_ENDPOINT)?;

        log::debug!(target: "goaffpro", "fetching shop settings");
        let response = self
            .http
            .get(url)
            .header(PUBLIC_TOKEN_HEADER, public_token)
            .send()
            .await?;
        let response = response.error_for_status().map_err(|err| {
            if err.status() == Some(StatusCode::UNAUTHORIZED) {
                log::warn!(target: "goaffpro", "client is not authorized. Check your public token");
                Error::Unauthorized
            } else {
                log::warn!(target: "goaffpro", "received non-200 response while fetching shop settings: {:?}", err);
                Error::from(err)
            }
        })?;

        let settings: SiteSettings = response.json().await?;
        log::debug!(target: "goaffpro", "successfully fetched shop settings");

        let session = Arc::new(Session {
            public_token: public_token.to_owned(),
            settings,
        });
        self.store.install_session(Arc::clone(&session));

        Ok(session)
    }

    /// Returns the public token of the active session, or `None` if no session has been
    /// established yet.
    pub fn public_token(&self) -> Option<String> {
        self.store.public_token()
    }

    /// Store a referral code, attributing subsequent tracked events to that affiliate.
    ///
    /// Normally the code is recorded from an inbound link; this call exists so hosts can set it
    /// directly. The code is cached verbatim, with no transformation.
    pub async fn set_referral_code(&self, code: impl Into<String>) -> Result<()> {
        let referral_code = code.into();
        log::trace!(target: "goaffpro", referral_code; "storing referral code");
        self.store.set_referral_code(referral_code);
        Ok(())
    }

    /// Returns the cached referral code, or `None` if none has been recorded.
    pub async fn referral_code(&self) -> Result<Option<String>> {
        Ok(self.store.referral_code())
    }

    /// Record a page view for the current referral code.
    ///
    /// Returns the raw result object produced by the API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] if called before a successful [`Client::init()`], and
    /// [`Error::Unauthorized`] or [`Error::Network`] for API failures.
    pub async fn track_page_view(&self) -> Result<serde_json::Value> {
        let session = self.store.session().ok_or(Error::NotInitialized)?;

        let event = PageViewEvent {
            uuid: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            referral_code: self.store.referral_code(),
        };
        let ack = self.post_event(PAGE_VIEW_ENDPOINT, &session, &event).await?;

        self.config
            .event_logger
            .log_event(TrackedEvent::PageView(event));

        Ok(ack)
    }

    /// Record a completed order for the current referral code.
    ///
    /// Order fields are forwarded verbatim. Returns the raw result object produced by the API.
    ///
    /// # Errors
    ///
    /// Same error cases as [`Client::track_page_view()`].
    pub async fn track_conversion(&self, order: ConversionOrder) -> Result<serde_json::Value> {
        let session = self.store.session().ok_or(Error::NotInitialized)?;

        let event = ConversionEvent {
            uuid: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            referral_code: self.store.referral_code(),
            order,
        };
        let ack = self
            .post_event(CONVERSION_ENDPOINT, &session, &event)
            .await?;

        self.config
            .event_logger
            .log_event(TrackedEvent::Conversion(event));

        Ok(ack)
    }

    async fn post_event<E: serde::Serialize>(
        &self,
        endpoint: &str,
        session: &Session,
        event: &E,
    ) -> Result<serde_json::Value> {
        let url = self.endpoint_url(endpoint)?;

        log::trace!(target: "goaffpro", event:serde; "delivering event");
        let response = self
            .http
            .post(url)
            .header(PUBLIC_TOKEN_HEADER, &session.public_token)
            .json(event)
            .send()
            .await?;
        let response = response.error_for_status().map_err(|err| {
            if err.status() == Some(StatusCode::UNAUTHORIZED) {
                log::warn!(target: "goaffpro", "client is not authorized. Check your public token");
                Error::Unauthorized
            } else {
                log::warn!(target: "goaffpro", "received non-200 response while delivering event: {:?}", err);
                Error::from(err)
            }
        })?;

        let ack = response.json().await?;
        Ok(ack)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}{}", self.config.base_url, endpoint),
            &[("sdkName", "rust"), ("sdkVersion", env!("CARGO_PKG_VERSION"))],
        )
        .map_err(Error::InvalidBaseUrl)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        session_store::{Session, SessionStore, SiteSettings},
        Client, ClientConfig, Error,
    };

    fn session(token: &str) -> Arc<Session> {
        Arc::new(Session {
            public_token: token.to_owned(),
            settings: SiteSettings {
                shop_name: "demo-shop".to_owned(),
                currency: "USD".to_owned(),
                tracking_enabled: true,
            },
        })
    }

    #[tokio::test]
    async fn init_rejects_empty_token() {
        let client = ClientConfig::new().to_client();

        assert!(matches!(
            client.init("").await,
            Err(Error::EmptyPublicToken)
        ));
    }

    #[tokio::test]
    async fn init_rejects_invalid_base_url() {
        let client = ClientConfig::new().base_url("not a url").to_client();

        assert!(matches!(
            client.init("a1b2c3").await,
            Err(Error::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn tracking_requires_session() {
        let client = ClientConfig::new().to_client();

        assert!(matches!(
            client.track_page_view().await,
            Err(Error::NotInitialized)
        ));
    }

    #[tokio::test]
    async fn public_token_reflects_installed_session() {
        let store = Arc::new(SessionStore::new());
        let client = Client::new_with_store(ClientConfig::new(), store.clone());

        assert_eq!(client.public_token(), None);

        // installing a session after the client is created
        store.install_session(session("a1b2c3"));
        assert_eq!(client.public_token().as_deref(), Some("a1b2c3"));
    }

    #[tokio::test]
    async fn referral_code_round_trips_through_client() {
        let client = ClientConfig::new().to_client();

        assert_eq!(client.referral_code().await.unwrap(), None);

        client.set_referral_code("Summer10").await.unwrap();
        assert_eq!(
            client.referral_code().await.unwrap().as_deref(),
            Some("Summer10")
        );
    }
}
