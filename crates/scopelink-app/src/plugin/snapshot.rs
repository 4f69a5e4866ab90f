//! Session snapshot derivation and classification.

use std::collections::HashSet;
use std::time::Duration;

use scopelink_config::ReporterConfig;
use scopelink_host::{format_frequency, ConnectionInfo, HostApis};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// What the controller is doing, as far as presence is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ConnectionRole {
    Idle,
    Controlling,
    Observing,
}

/// Uptime-based reward tier, cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Tier {
    None,
    Silver,
    Gold,
}

pub(super) fn classify_role(connection: Option<&ConnectionInfo>) -> ConnectionRole {
    match connection {
        None => ConnectionRole::Idle,
        Some(info) if info.facility.is_observer() => ConnectionRole::Observing,
        Some(_) => ConnectionRole::Controlling,
    }
}

pub(super) fn tier_for(elapsed: Duration, threshold: Duration) -> Tier {
    if elapsed > threshold * 2 {
        Tier::Gold
    } else if elapsed > threshold {
        Tier::Silver
    } else {
        Tier::None
    }
}

pub(super) fn is_on_fire(owned: usize, threshold: u32) -> bool {
    owned >= threshold as usize
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Derived view of the session, rebuilt every few ticks.
#[derive(Debug, Clone)]
pub(super) struct SessionSnapshot {
    pub role: ConnectionRole,
    pub callsign: String,
    /// Formatted `xxx.xxx`, empty when no frequency is tuned.
    pub frequency: String,
    pub visible_aircraft: usize,
    pub owned_aircraft: usize,
    /// Distinct callsigns ever owned this session.
    pub total_tracked: usize,
    pub tier: Tier,
    pub on_fire: bool,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            role: ConnectionRole::Idle,
            callsign: String::new(),
            frequency: String::new(),
            visible_aircraft: 0,
            owned_aircraft: 0,
            total_tracked: 0,
            tier: Tier::None,
            on_fire: false,
        }
    }
}

/// Pull fresh session state from the host APIs.
///
/// Missing data (no connection, empty frequency list) degrades to the
/// Idle/empty defaults for this cycle. The tracked set only grows.
pub(super) fn refresh(
    apis: &HostApis,
    tracked: &mut HashSet<String>,
    elapsed: Duration,
    config: &ReporterConfig,
) -> SessionSnapshot {
    let connection = apis.fsd.connection();
    let role = classify_role(connection.as_ref());

    let (callsign, frequency) = match &connection {
        Some(info) => (
            info.callsign.clone(),
            info.primary_frequency()
                .map(format_frequency)
                .unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    let visible_aircraft = apis.aircraft.visible_count();
    let owned = apis.aircraft.owned_callsigns();
    for callsign in &owned {
        tracked.insert(callsign.clone());
    }

    SessionSnapshot {
        role,
        callsign,
        frequency,
        visible_aircraft,
        owned_aircraft: owned.len(),
        total_tracked: tracked.len(),
        tier: tier_for(elapsed, Duration::from_secs(config.tier_threshold_secs)),
        on_fire: is_on_fire(owned.len(), config.onfire_threshold),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use scopelink_host::{ConnectionInfo, Facility, SimulatedHost};

    const HOUR_THRESHOLD: Duration = Duration::from_secs(7200);

    #[test]
    fn tier_is_none_up_to_the_threshold() {
        assert_eq!(tier_for(Duration::ZERO, HOUR_THRESHOLD), Tier::None);
        assert_eq!(tier_for(Duration::from_secs(7199), HOUR_THRESHOLD), Tier::None);
        assert_eq!(tier_for(Duration::from_secs(7200), HOUR_THRESHOLD), Tier::None);
    }

    #[test]
    fn tier_is_silver_between_one_and_two_thresholds() {
        assert_eq!(tier_for(Duration::from_secs(7201), HOUR_THRESHOLD), Tier::Silver);
        assert_eq!(tier_for(Duration::from_secs(14_400), HOUR_THRESHOLD), Tier::Silver);
    }

    #[test]
    fn tier_is_gold_past_two_thresholds() {
        assert_eq!(tier_for(Duration::from_secs(14_401), HOUR_THRESHOLD), Tier::Gold);
        assert_eq!(tier_for(Duration::from_secs(86_400), HOUR_THRESHOLD), Tier::Gold);
    }

    #[test]
    fn tier_is_monotonic_in_elapsed_time() {
        let mut last = Tier::None;
        for secs in (0..30_000).step_by(500) {
            let tier = tier_for(Duration::from_secs(secs), HOUR_THRESHOLD);
            assert!(tier >= last, "tier regressed at {secs}s");
            last = tier;
        }
    }

    #[test]
    fn on_fire_boundary() {
        assert!(!is_on_fire(9, 10));
        assert!(is_on_fire(10, 10));
        assert!(is_on_fire(11, 10));
        assert!(!is_on_fire(0, 10));
    }

    #[test]
    fn role_classification() {
        assert_eq!(classify_role(None), ConnectionRole::Idle);

        let obs = ConnectionInfo {
            callsign: "XX_OBS".into(),
            facility: Facility::Observer,
            frequencies_hz: vec![],
        };
        assert_eq!(classify_role(Some(&obs)), ConnectionRole::Observing);

        let app = ConnectionInfo {
            callsign: "LFPG_APP".into(),
            facility: Facility::Approach,
            frequencies_hz: vec![134_475_000],
        };
        assert_eq!(classify_role(Some(&app)), ConnectionRole::Controlling);
    }

    #[test]
    fn refresh_observer_with_empty_frequency_list() {
        let host = SimulatedHost::new();
        host.set_connection(Some(ConnectionInfo {
            callsign: "XX_OBS".into(),
            facility: Facility::Observer,
            frequencies_hz: vec![],
        }));

        let mut tracked = HashSet::new();
        let snapshot = refresh(
            &host.apis(),
            &mut tracked,
            Duration::ZERO,
            &ReporterConfig::default(),
        );
        assert_eq!(snapshot.role, ConnectionRole::Observing);
        assert_eq!(snapshot.frequency, "");
    }

    #[test]
    fn refresh_controller_formats_frequency() {
        let host = SimulatedHost::new();
        host.set_connection(Some(ConnectionInfo {
            callsign: "LFPG_APP".into(),
            facility: Facility::Approach,
            frequencies_hz: vec![134_475_000],
        }));

        let mut tracked = HashSet::new();
        let snapshot = refresh(
            &host.apis(),
            &mut tracked,
            Duration::ZERO,
            &ReporterConfig::default(),
        );
        assert_eq!(snapshot.role, ConnectionRole::Controlling);
        assert_eq!(snapshot.frequency, "134.475");
        assert_eq!(snapshot.callsign, "LFPG_APP");
    }

    #[test]
    fn refresh_without_connection_is_idle_defaults() {
        let host = SimulatedHost::new();
        let mut tracked = HashSet::new();
        let snapshot = refresh(
            &host.apis(),
            &mut tracked,
            Duration::ZERO,
            &ReporterConfig::default(),
        );
        assert_eq!(snapshot.role, ConnectionRole::Idle);
        assert_eq!(snapshot.callsign, "");
        assert_eq!(snapshot.frequency, "");
        assert_eq!(snapshot.owned_aircraft, 0);
    }

    #[test]
    fn tracked_set_only_grows() {
        let host = SimulatedHost::new();
        let mut tracked = HashSet::new();
        let config = ReporterConfig::default();

        host.set_owned_callsigns(vec!["AFR123".into(), "BAW456".into()]);
        let snapshot = refresh(&host.apis(), &mut tracked, Duration::ZERO, &config);
        assert_eq!(snapshot.total_tracked, 2);

        // Repeats do not bump the total
        let snapshot = refresh(&host.apis(), &mut tracked, Duration::ZERO, &config);
        assert_eq!(snapshot.total_tracked, 2);

        // Handoff: one aircraft leaves, a new one arrives
        host.set_owned_callsigns(vec!["BAW456".into(), "DLH789".into()]);
        let snapshot = refresh(&host.apis(), &mut tracked, Duration::ZERO, &config);
        assert_eq!(snapshot.total_tracked, 3);
        assert_eq!(snapshot.owned_aircraft, 2);
    }
}
