use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A page view reported to the Goaffpro API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageViewEvent {
    /// Unique id of this event.
    pub uuid: String,
    /// Time the page view was recorded at.
    pub timestamp: DateTime<Utc>,
    /// Referral code of the affiliate the traffic is attributed to, if one is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// An order reported through a conversion tracking call.
///
/// Both fields are free-form strings and are forwarded to the API verbatim, exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOrder {
    /// Order number.
    pub number: String,
    /// Order total.
    pub total: String,
}

/// A completed order reported to the Goaffpro API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionEvent {
    /// Unique id of this event.
    pub uuid: String,
    /// Time the conversion was recorded at.
    pub timestamp: DateTime<Utc>,
    /// Referral code of the affiliate the sale is attributed to, if one is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    /// The order being reported.
    #[serde(flatten)]
    pub order: ConversionOrder,
}

/// An event delivered to the Goaffpro API.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "eventType", rename_all = "camelCase")]
pub enum TrackedEvent {
    /// A recorded page view.
    PageView(PageViewEvent),
    /// A recorded conversion.
    Conversion(ConversionEvent),
}

/// A logger invoked for every event successfully delivered to the API.
///
/// Set it with [`ClientConfig::event_logger`] to mirror tracked events into your own storage or
/// analytics pipeline.
///
/// [`ClientConfig::event_logger`]: crate::ClientConfig::event_logger
pub trait EventLogger {
    /// Called after `event` has been accepted by the API.
    fn log_event(&self, event: TrackedEvent);
}

pub(crate) struct NoopEventLogger;
impl EventLogger for NoopEventLogger {
    fn log_event(&self, _event: TrackedEvent) {}
}

impl<T: Fn(TrackedEvent)> EventLogger for T {
    fn log_event(&self, event: TrackedEvent) {
        self(event);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{ConversionEvent, ConversionOrder, PageViewEvent, TrackedEvent};

    #[test]
    fn page_view_serializes_in_camel_case() {
        let event = PageViewEvent {
            uuid: "e9168ac2-89f5-4bd1-a0ca-b9e326f0d8b8".to_owned(),
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            referral_code: Some("summer10".to_owned()),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["referralCode"], "summer10");
        assert_eq!(json["uuid"], "e9168ac2-89f5-4bd1-a0ca-b9e326f0d8b8");
    }

    #[test]
    fn page_view_omits_missing_referral_code() {
        let event = PageViewEvent {
            uuid: "u".to_owned(),
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            referral_code: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("referralCode").is_none());
    }

    #[test]
    fn conversion_flattens_order_fields() {
        let event = TrackedEvent::Conversion(ConversionEvent {
            uuid: "u".to_owned(),
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            referral_code: None,
            order: ConversionOrder {
                number: "#1001".to_owned(),
                total: "100".to_owned(),
            },
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventType"], "conversion");
        assert_eq!(json["number"], "#1001");
        assert_eq!(json["total"], "100");
    }
}
