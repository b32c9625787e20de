// --- File: crates/slotwise_engine/src/event.rs ---
use serde::{Deserialize, Serialize};

/// Start or end of a raw calendar event, as calendar providers ship it:
/// either a civil date (all-day entries) or an RFC 3339 timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// All-day marker, `YYYY-MM-DD`. End dates are exclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Timed marker, RFC 3339 with offset, e.g. `2025-05-05T10:00:00+02:00`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl EventTime {
    pub fn all_day(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            date_time: None,
        }
    }

    pub fn timed(date_time: impl Into<String>) -> Self {
        Self {
            date: None,
            date_time: Some(date_time.into()),
        }
    }
}

/// A raw busy record as handed over by the calendar client. The engine never
/// fetches these itself; it only normalizes what the caller provides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
}

impl RawEvent {
    /// An event is all-day when both endpoints carry a date and no timestamp.
    pub fn is_all_day(&self) -> bool {
        self.start.date.is_some()
            && self.end.date.is_some()
            && self.start.date_time.is_none()
            && self.end.date_time.is_none()
    }

    pub fn label(&self) -> &str {
        self.summary.as_deref().unwrap_or("(No title)")
    }
}
