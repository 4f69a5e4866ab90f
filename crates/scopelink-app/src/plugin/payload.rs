//! Activity payload construction from a session snapshot.

use scopelink_presence::ActivityPayload;

use super::snapshot::{ConnectionRole, SessionSnapshot, Tier};

const LARGE_IMAGE_KEY: &str = "logo";
const LARGE_IMAGE_TEXT: &str = "scopelink";

pub(super) fn build_payload(
    snapshot: &SessionSnapshot,
    caption: &str,
    start_epoch: u64,
) -> ActivityPayload {
    let (state, details) = match snapshot.role {
        ConnectionRole::Idle => (caption.to_string(), "No connection".to_string()),
        ConnectionRole::Observing => (
            format!("Observing as {}", snapshot.callsign),
            format!("{} aircraft in view", snapshot.visible_aircraft),
        ),
        ConnectionRole::Controlling => {
            let state = if snapshot.frequency.is_empty() {
                snapshot.callsign.clone()
            } else {
                format!("{} on {}", snapshot.callsign, snapshot.frequency)
            };
            let details = format!(
                "Tracking {} of {} aircraft ({} this session)",
                snapshot.owned_aircraft, snapshot.visible_aircraft, snapshot.total_tracked
            );
            (state, details)
        }
    };

    let (small_image_key, small_image_text) = if snapshot.on_fire {
        (Some("onfire".to_string()), Some("On fire".to_string()))
    } else {
        match snapshot.tier {
            Tier::Gold => (Some("gold".to_string()), Some("Gold tier".to_string())),
            Tier::Silver => (Some("silver".to_string()), Some("Silver tier".to_string())),
            Tier::None => (None, None),
        }
    };

    ActivityPayload {
        state,
        details,
        large_image_key: LARGE_IMAGE_KEY.to_string(),
        large_image_text: LARGE_IMAGE_TEXT.to_string(),
        small_image_key,
        small_image_text,
        start_timestamp: Some(start_epoch),
        instance: false,
    }
}
