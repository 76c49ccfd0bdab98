use crate::{AffiliateSdk, Result};

/// The second step of the walkthrough: captures an affiliate's referral code.
///
/// Normally the SDK records the referral code from an inbound link; this form lets the user enter
/// one by hand for testing.
#[derive(Debug, Default)]
pub struct ReferralForm {
    code: String,
}

impl ReferralForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a previously stored referral code.
    ///
    /// Pre-fills the field only when a non-empty code comes back; load failures leave the field
    /// untouched.
    pub async fn load(&mut self, sdk: &impl AffiliateSdk) {
        match sdk.referral_code().await {
            Ok(Some(code)) if !code.is_empty() => self.code = code,
            Ok(_) => {}
            Err(err) => {
                log::debug!(target: "goaffpro", "failed to load cached referral code: {:?}", err);
            }
        }
    }

    /// Current contents of the referral code field.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Record an edit, forwarding the exact string typed to the SDK with no transformation.
    ///
    /// The field keeps the new value even when the store call fails; the write outcome is returned
    /// for callers that want to surface it.
    pub async fn set_code(&mut self, sdk: &impl AffiliateSdk, input: &str) -> Result<()> {
        self.code = input.to_owned();
        sdk.set_referral_code(input.to_owned()).await
    }
}
