use crate::{events::NoopEventLogger, Client, EventLogger};

/// Configuration for [`Client`].
///
/// # Examples
/// ```
/// # use goaffpro::ClientConfig;
/// let client = ClientConfig::new()
///     .event_logger(|event| {
///         println!("{:?}", event);
///     })
///     .to_client();
/// ```
pub struct ClientConfig<'a> {
    pub(crate) base_url: String,
    pub(crate) event_logger: Box<dyn EventLogger + Send + Sync + 'a>,
}

impl<'a> ClientConfig<'a> {
    /// Create a default Goaffpro configuration.
    ///
    /// ```
    /// # use goaffpro::ClientConfig;
    /// ClientConfig::new();
    /// ```
    pub fn new() -> Self {
        ClientConfig {
            base_url: ClientConfig::DEFAULT_BASE_URL.to_owned(),
            event_logger: Box::new(NoopEventLogger),
        }
    }

    /// Set event logger to mirror delivered tracking events into your own storage.
    ///
    /// ```
    /// # use goaffpro::ClientConfig;
    /// let config = ClientConfig::new().event_logger(|event| {
    ///   println!("{:?}", event);
    /// });
    /// ```
    pub fn event_logger(mut self, event_logger: impl EventLogger + Send + Sync + 'a) -> Self {
        self.event_logger = Box::new(event_logger);
        self
    }

    /// Default base URL for API calls.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.goaffpro.com/v1";

    /// Override base URL for API calls. Clients should use the default setting in most cases.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create a new [`Client`] using the specified configuration.
    ///
    /// ```
    /// # use goaffpro::{Client, ClientConfig};
    /// let client: Client = ClientConfig::new().to_client();
    /// ```
    pub fn to_client(self) -> Client<'a> {
        Client::new(self)
    }
}

impl Default for ClientConfig<'_> {
    fn default() -> Self {
        Self::new()
    }
}
