use crate::{AffiliateSdk, Error};

/// State of the initialization form.
#[derive(Debug, Clone, Default)]
pub enum TokenFormState {
    /// No session has been established yet.
    #[default]
    NotInitialized,
    /// An initialization call is in flight.
    Loading,
    /// The SDK session is ready.
    Initialized,
    /// The last initialization attempt failed.
    Failed(Error),
}

/// The first step of the walkthrough: collects the shop's public token and initializes the SDK.
///
/// Token input is lowercased before display and before submission. Editing the token resets the
/// initialized state, and a failed submission lands in [`TokenFormState::Failed`] instead of
/// staying in loading forever.
#[derive(Debug, Default)]
pub struct TokenForm {
    public_token: String,
    state: TokenFormState,
}

impl TokenForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the form from a client that already holds a session.
    pub fn prefill(&mut self, sdk: &impl AffiliateSdk) {
        if let Some(token) = sdk.public_token() {
            if !token.is_empty() {
                self.public_token = token;
                self.state = TokenFormState::Initialized;
            }
        }
    }

    /// Current contents of the token field.
    pub fn public_token(&self) -> &str {
        &self.public_token
    }

    /// Replace the token field contents.
    ///
    /// The value is lowercased and any previous initialization is reset.
    pub fn set_public_token(&mut self, input: &str) {
        self.state = TokenFormState::NotInitialized;
        self.public_token = input.to_lowercase();
    }

    /// Whether the submit action is currently available.
    pub fn can_submit(&self) -> bool {
        !self.public_token.is_empty() && !matches!(self.state, TokenFormState::Loading)
    }

    /// Current form state.
    pub fn state(&self) -> &TokenFormState {
        &self.state
    }

    /// Whether a session has been established.
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, TokenFormState::Initialized)
    }

    /// Whether an initialization call is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, TokenFormState::Loading)
    }

    /// Submit the form, establishing an SDK session with the entered token.
    ///
    /// Does nothing unless [`TokenForm::can_submit()`] returns true.
    pub async fn submit(&mut self, sdk: &impl AffiliateSdk) {
        if !self.can_submit() {
            return;
        }

        self.state = TokenFormState::Loading;
        self.state = match sdk.init(&self.public_token).await {
            Ok(_session) => TokenFormState::Initialized,
            Err(err) => TokenFormState::Failed(err),
        };
    }
}
