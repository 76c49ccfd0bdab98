//! The demonstration application layer: four form handlers wired to the SDK calls.
//!
//! Each handler owns the transient view state of one step of the walkthrough: the token form, the
//! referral code form, the page view tracker and the conversion tracker. A handler keeps at most
//! one SDK call outstanding at a time and takes the SDK as an explicit
//! [`AffiliateSdk`](crate::AffiliateSdk) handle rather than reaching for process-wide state.
//!
//! The handlers render nothing themselves. The `simple` demo drives them from a terminal; tests
//! drive them with a scripted fake.

mod conversion;
mod page_view;
mod referral;
mod token;

pub use conversion::ConversionTracker;
pub use page_view::PageViewTracker;
pub use referral::ReferralForm;
pub use token::{TokenForm, TokenFormState};

/// Display value shown in place of a failed tracking call.
pub(crate) fn error_marker() -> serde_json::Value {
    serde_json::json!({"error": "Unexpected error"})
}

/// Format a result object the way the demo displays it.
pub(crate) fn format_response(response: &serde_json::Value) -> String {
    serde_json::to_string_pretty(response).unwrap_or_else(|_| response.to_string())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use async_trait::async_trait;

    use crate::{
        events::ConversionOrder,
        session_store::{Session, SiteSettings},
        AffiliateSdk, Error, Result,
    };

    /// Scripted SDK used to drive the handlers in tests.
    pub(crate) struct FakeSdk {
        pub token: Mutex<Option<String>>,
        pub stored_code: Mutex<Option<String>>,
        pub fail_init: bool,
        pub fail_referral_write: bool,
        pub track_result: Result<serde_json::Value>,
        pub init_calls: AtomicUsize,
        pub page_view_calls: AtomicUsize,
        pub tracked_orders: Mutex<Vec<ConversionOrder>>,
    }

    impl Default for FakeSdk {
        fn default() -> Self {
            Self {
                token: Mutex::new(None),
                stored_code: Mutex::new(None),
                fail_init: false,
                fail_referral_write: false,
                track_result: Ok(serde_json::json!({"status": "ok"})),
                init_calls: AtomicUsize::new(0),
                page_view_calls: AtomicUsize::new(0),
                tracked_orders: Mutex::new(Vec::new()),
            }
        }
    }

    impl FakeSdk {
        pub(crate) fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl AffiliateSdk for FakeSdk {
        async fn init(&self, public_token: &str) -> Result<Arc<Session>> {
            self.init_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_init {
                return Err(Error::Unauthorized);
            }

            *self.token.lock().unwrap() = Some(public_token.to_owned());
            Ok(Arc::new(Session {
                public_token: public_token.to_owned(),
                settings: SiteSettings {
                    shop_name: "demo-shop".to_owned(),
                    currency: "USD".to_owned(),
                    tracking_enabled: true,
                },
            }))
        }

        fn public_token(&self) -> Option<String> {
            self.token.lock().unwrap().clone()
        }

        async fn set_referral_code(&self, code: String) -> Result<()> {
            if self.fail_referral_write {
                return Err(Error::Unauthorized);
            }
            *self.stored_code.lock().unwrap() = Some(code);
            Ok(())
        }

        async fn referral_code(&self) -> Result<Option<String>> {
            Ok(self.stored_code.lock().unwrap().clone())
        }

        async fn track_page_view(&self) -> Result<serde_json::Value> {
            self.page_view_calls.fetch_add(1, Ordering::SeqCst);
            self.track_result.clone()
        }

        async fn track_conversion(&self, order: ConversionOrder) -> Result<serde_json::Value> {
            self.tracked_orders.lock().unwrap().push(order);
            self.track_result.clone()
        }
    }
}
