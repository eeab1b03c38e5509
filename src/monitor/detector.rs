//! Edge-triggered transition detection.
//!
//! Pure comparison of the previous persisted state against a fresh
//! snapshot. Produces the alerts for this cycle plus the next persisted
//! state; the caller decides when (and whether) to commit it.
//!
//! Every signal is edge-triggered: an alert fires on the transition into a
//! condition, never on cycles where the condition merely persists. On a
//! first run (uninitialized state) all currently-true conditions are
//! absorbed as already acknowledged, so a restart never replays alerts for
//! standing conditions.

use crate::domain::{Alert, InboxAlert, LandingAlert, Snapshot, TravelAlert};
use crate::monitor::state::MonitorState;

/// Landing alert window before arrival.
pub const LANDING_WINDOW_SECS: i64 = 120;

/// Education alert window before course completion.
pub const EDUCATION_WINDOW_SECS: i64 = 3600;

/// Result of one detection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub alerts: Vec<Alert>,
    pub next: MonitorState,
}

/// Compare the previous state against a snapshot taken at `now`.
#[must_use]
pub fn detect(prev: &MonitorState, snapshot: &Snapshot, now: i64) -> Detection {
    let armed = prev.initialized;
    let mut alerts = Vec::new();
    let mut next = MonitorState {
        initialized: true,
        ..prev.clone()
    };

    // Energy / nerve: fire on the rising edge of "full", re-arm as soon as
    // the bar drops below the cap.
    let energy_full = snapshot.energy.is_full();
    if armed && energy_full && !prev.energy_was_full {
        alerts.push(Alert::EnergyFull {
            current: snapshot.energy.current,
            maximum: snapshot.energy.maximum,
        });
    }
    next.energy_was_full = energy_full;

    let nerve_full = snapshot.nerve.is_full();
    if armed && nerve_full && !prev.nerve_was_full {
        alerts.push(Alert::NerveFull {
            current: snapshot.nerve.current,
            maximum: snapshot.nerve.maximum,
        });
    }
    next.nerve_was_full = nerve_full;

    // Hospital: a stored release time means "was in hospital"; fire only on
    // the in -> out transition, never while idling outside.
    let in_hospital = snapshot.in_hospital(now);
    if armed && prev.hospital_until.is_some() && !in_hospital {
        alerts.push(Alert::HospitalExit);
    }
    next.hospital_until = if in_hospital {
        snapshot.hospital_until
    } else {
        None
    };

    // Cooldowns: fire when a previously recorded future end time has
    // elapsed or disappeared.
    let drug_active = snapshot.cooldowns.drug_until.is_some_and(|t| t > now);
    if armed && prev.drug_until.is_some() && !drug_active {
        alerts.push(Alert::DrugReady);
    }
    next.drug_until = if drug_active {
        snapshot.cooldowns.drug_until
    } else {
        None
    };

    let booster_active = snapshot.cooldowns.booster_until.is_some_and(|t| t > now);
    if armed && prev.booster_until.is_some() && !booster_active {
        alerts.push(Alert::BoosterReady);
    }
    next.booster_until = if booster_active {
        snapshot.cooldowns.booster_until
    } else {
        None
    };

    // Travel departure: not-traveling -> traveling edge, capturing the
    // destination and arrival time at that instant. The return leg to Torn
    // stays silent; only outbound flights alert.
    let traveling = snapshot.travel.is_traveling(now);
    let outbound = snapshot.travel.is_outbound();
    if let Some(arrives_at) = snapshot.travel.arrives_at.filter(|t| *t > now) {
        if armed && outbound && !prev.was_traveling {
            alerts.push(Alert::TravelDeparture(TravelAlert {
                destination: snapshot.travel.destination.clone(),
                arrives_at,
                flight_seconds_left: arrives_at - now,
            }));
        }

        // Landing: once per distinct arrival time, no matter how many
        // cycles run inside the window.
        let seconds_left = arrives_at - now;
        if outbound
            && seconds_left <= LANDING_WINDOW_SECS
            && prev.landing_alerted_for != Some(arrives_at)
        {
            if armed {
                alerts.push(Alert::TravelLanding(LandingAlert {
                    destination: snapshot.travel.destination.clone(),
                    arrives_at,
                    seconds_left,
                }));
            }
            next.landing_alerted_for = Some(arrives_at);
        }
    }
    next.was_traveling = traveling;

    // Education: once per distinct course end time, inside the final hour.
    if let Some(ends_at) = snapshot.education.ends_at.filter(|t| *t > now) {
        let seconds_left = ends_at - now;
        if seconds_left <= EDUCATION_WINDOW_SECS && prev.education_alerted_for != Some(ends_at) {
            if armed {
                alerts.push(Alert::EducationSoon { seconds_left });
            }
            next.education_alerted_for = Some(ends_at);
        }
    }

    // Account events: the marker always advances to the newest timestamp;
    // several new items in one window still collapse into one alert.
    if let Some(latest) = snapshot.latest_event_ts {
        if latest > prev.last_event_ts {
            if armed {
                alerts.push(Alert::NewGlobalEvent { latest_ts: latest });
            }
            next.last_event_ts = latest;
        }
    }

    // Inbox: alert on a strictly increased unread count; the marker tracks
    // the observed count in both directions so reads re-arm the trigger.
    if armed && snapshot.inbox_unread > prev.last_inbox_unread {
        alerts.push(Alert::NewInboxMessage(InboxAlert {
            unread: snapshot.inbox_unread,
            new_count: snapshot.inbox_unread - prev.last_inbox_unread,
        }));
    }
    next.last_inbox_unread = snapshot.inbox_unread;

    Detection { alerts, next }
}
