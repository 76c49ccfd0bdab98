use super::{error_marker, format_response};
use crate::AffiliateSdk;

/// The third step of the walkthrough: records a page view and displays the result.
#[derive(Debug, Default)]
pub struct PageViewTracker {
    loading: bool,
    response: Option<serde_json::Value>,
}

impl PageViewTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tracking call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The most recent result object, if any.
    pub fn response(&self) -> Option<&serde_json::Value> {
        self.response.as_ref()
    }

    /// The most recent result formatted for display.
    pub fn response_text(&self) -> Option<String> {
        self.response.as_ref().map(format_response)
    }

    /// Record a page view.
    ///
    /// The resolved result object replaces the previous one; a failed call is displayed as the
    /// generic error marker.
    pub async fn track(&mut self, sdk: &impl AffiliateSdk) {
        if self.loading {
            return;
        }

        self.loading = true;
        self.response = Some(match sdk.track_page_view().await {
            Ok(response) => response,
            Err(_) => error_marker(),
        });
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use serde_json::json;

    use super::PageViewTracker;
    use crate::app::testing::FakeSdk;
    use crate::Error;

    #[tokio::test]
    async fn displays_the_resolved_result() {
        let sdk = FakeSdk::new();
        let mut tracker = PageViewTracker::new();
        assert_eq!(tracker.response(), None);

        tracker.track(&sdk).await;

        assert_eq!(tracker.response(), Some(&json!({"status": "ok"})));
        assert_eq!(
            tracker.response_text().as_deref(),
            Some("{\n  \"status\": \"ok\"\n}")
        );
        assert!(!tracker.is_loading());
        assert_eq!(sdk.page_view_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn displays_the_generic_marker_on_failure() {
        let sdk = FakeSdk {
            track_result: Err(Error::NotInitialized),
            ..FakeSdk::new()
        };
        let mut tracker = PageViewTracker::new();

        tracker.track(&sdk).await;

        assert_eq!(tracker.response(), Some(&json!({"error": "Unexpected error"})));
        assert!(!tracker.is_loading());
    }
}
