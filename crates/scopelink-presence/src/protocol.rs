//! Payload types pushed to the presence-broadcasting service.
//!
//! These mirror the fields the broadcasting SDK accepts; the wire
//! encoding and IPC handshake are handled by the transport behind
//! `client::PresenceTransport`.

use serde::{Deserialize, Serialize};

/// One presence update: what the third-party client displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPayload {
    /// Primary status line.
    pub state: String,
    /// Secondary detail line.
    pub details: String,
    pub large_image_key: String,
    pub large_image_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image_text: Option<String>,
    /// Session start, epoch seconds; drives the elapsed-time display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<u64>,
    pub instance: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted_when_none() {
        let payload = ActivityPayload {
            state: "Watching the scope".into(),
            details: "No connection".into(),
            large_image_key: "logo".into(),
            large_image_text: "scopelink".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("small_image_key"));
        assert!(!json.contains("start_timestamp"));
    }

    #[test]
    fn payload_round_trips() {
        let payload = ActivityPayload {
            state: "LFPG_APP on 134.475".into(),
            details: "Tracking 3 of 12 aircraft (5 this session)".into(),
            large_image_key: "logo".into(),
            large_image_text: "scopelink".into(),
            small_image_key: Some("silver".into()),
            small_image_text: Some("Silver tier".into()),
            start_timestamp: Some(1_700_000_000),
            instance: false,
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: ActivityPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
