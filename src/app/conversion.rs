use super::{error_marker, format_response};
use crate::{AffiliateSdk, ConversionOrder};

/// The fourth step of the walkthrough: reports a dummy order and displays the result.
///
/// Starts out pre-filled with a sample order. Submission is available only while both order fields
/// are non-empty; the total stays a free-form string and is never parsed as a number.
#[derive(Debug)]
pub struct ConversionTracker {
    number: String,
    total: String,
    loading: bool,
    response: Option<serde_json::Value>,
}

impl Default for ConversionTracker {
    fn default() -> Self {
        Self {
            number: "#1001".to_owned(),
            total: "100".to_owned(),
            loading: false,
            response: None,
        }
    }
}

impl ConversionTracker {
    /// Create a tracker pre-filled with the sample order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the order number field.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Current contents of the order total field.
    pub fn total(&self) -> &str {
        &self.total
    }

    /// Replace the order number. Kept verbatim.
    pub fn set_number(&mut self, input: &str) {
        self.number = input.to_owned();
    }

    /// Replace the order total. Kept verbatim.
    pub fn set_total(&mut self, input: &str) {
        self.total = input.to_owned();
    }

    /// Whether the track action is currently available.
    pub fn can_submit(&self) -> bool {
        !self.number.is_empty() && !self.total.is_empty() && !self.loading
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

    /// Report the entered order, with both fields forwarded exactly as typed.
    ///
    /// Does nothing unless [`ConversionTracker::can_submit()`] returns true. A failed call is
    /// displayed as the generic error marker.
    pub async fn track(&mut self, sdk: &impl AffiliateSdk) {
        if !self.can_submit() {
            return;
        }

        self.loading = true;
        let order = ConversionOrder {
            number: self.number.clone(),
            total: self.total.clone(),
        };
        self.response = Some(match sdk.track_conversion(order).await {
            Ok(response) => response,
            Err(_) => error_marker(),
        });
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ConversionTracker;
    use crate::app::testing::FakeSdk;
    use crate::{ConversionOrder, Error};

    #[tokio::test]
    async fn issues_the_call_with_the_entered_strings() {
        let sdk = FakeSdk::new();
        let mut tracker = ConversionTracker::new();

        tracker.track(&sdk).await;

        assert_eq!(
            *sdk.tracked_orders.lock().unwrap(),
            vec![ConversionOrder {
                number: "#1001".to_owned(),
                total: "100".to_owned(),
            }]
        );
        assert_eq!(tracker.response(), Some(&json!({"status": "ok"})));
    }

    #[tokio::test]
    async fn is_disabled_when_either_field_is_empty() {
        let sdk = FakeSdk::new();
        let mut tracker = ConversionTracker::new();

        tracker.set_number("");
        assert!(!tracker.can_submit());
        tracker.track(&sdk).await;
        assert!(sdk.tracked_orders.lock().unwrap().is_empty());

        tracker.set_number("#1002");
        tracker.set_total("");
        assert!(!tracker.can_submit());
        tracker.track(&sdk).await;
        assert!(sdk.tracked_orders.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn keeps_the_total_as_a_free_form_string() {
        let sdk = FakeSdk::new();
        let mut tracker = ConversionTracker::new();
        tracker.set_total("99.90 ");

        tracker.track(&sdk).await;

        assert_eq!(sdk.tracked_orders.lock().unwrap()[0].total, "99.90 ");
    }

    #[tokio::test]
    async fn displays_the_generic_marker_on_failure() {
        let sdk = FakeSdk {
            track_result: Err(Error::NotInitialized),
            ..FakeSdk::new()
        };
        let mut tracker = ConversionTracker::new();

        tracker.track(&sdk).await;

        assert_eq!(tracker.response(), Some(&json!({"error": "Unexpected error"})));
        assert!(!tracker.is_loading());
    }
}
