//! Integration tests for edge-triggered transition detection.

use consigliere::domain::{Alert, Bar, Cooldowns, Education, Snapshot, Travel};
use consigliere::monitor::{detect, MonitorState, LANDING_WINDOW_SECS};

const NOW: i64 = 1_700_000_000;

fn armed() -> MonitorState {
    MonitorState {
        initialized: true,
        ..MonitorState::default()
    }
}

fn traveling_snapshot(destination: &str, arrives_at: i64) -> Snapshot {
    Snapshot {
        travel: Travel {
            destination: destination.into(),
            arrives_at: Some(arrives_at),
            departed_at: Some(arrives_at - 13_500),
        },
        ..Snapshot::default()
    }
}

#[test]
fn unchanged_condition_never_fires_twice() {
    // Idempotence across every edge-triggered signal at once.
    let busy = Snapshot {
        energy: Bar::new(150, 150),
        nerve: Bar::new(45, 45),
        cooldowns: Cooldowns {
            drug_until: Some(NOW + 600),
            booster_until: Some(NOW + 600),
        },
        inbox_unread: 3,
        latest_event_ts: Some(NOW - 5),
        ..Snapshot::default()
    };

    let first = detect(&armed(), &busy, NOW);
    // Energy, nerve, event, inbox fire once; cooldowns only arm.
    assert_eq!(first.alerts.len(), 4);

    let second = detect(&first.next, &busy, NOW + 60);
    assert!(second.alerts.is_empty());

    let third = detect(&second.next, &busy, NOW + 120);
    assert!(third.alerts.is_empty());
}

#[test]
fn first_run_emits_nothing_then_fires_on_real_transition() {
    let already_full = Snapshot {
        energy: Bar::new(150, 150),
        ..Snapshot::default()
    };

    let first = detect(&MonitorState::default(), &already_full, NOW);
    assert!(first.alerts.is_empty());

    // Must go false -> true to fire.
    let drained = Snapshot {
        energy: Bar::new(20, 150),
        ..Snapshot::default()
    };
    let second = detect(&first.next, &drained, NOW + 60);
    assert!(second.alerts.is_empty());

    let third = detect(&second.next, &already_full, NOW + 120);
    assert_eq!(third.alerts.len(), 1);
    assert!(matches!(third.alerts[0], Alert::EnergyFull { .. }));
}

#[test]
fn cooldown_ready_fires_on_elapse_only() {
    let dosed = Snapshot {
        cooldowns: Cooldowns {
            drug_until: Some(NOW + 300),
            booster_until: None,
        },
        ..Snapshot::default()
    };

    let first = detect(&armed(), &dosed, NOW);
    assert!(first.alerts.is_empty());
    assert_eq!(first.next.drug_until, Some(NOW + 300));

    // Cooldown elapsed: the API may report it as gone or as a past time.
    let ready = Snapshot::default();
    let second = detect(&first.next, &ready, NOW + 400);
    assert_eq!(second.alerts, vec![Alert::DrugReady]);

    let third = detect(&second.next, &ready, NOW + 460);
    assert!(third.alerts.is_empty());
}

#[test]
fn departure_fires_on_takeoff_with_details() {
    let grounded = Snapshot::default();
    let on_ground = detect(&armed(), &grounded, NOW);

    let flight = traveling_snapshot("Japan", NOW + 13_500);
    let takeoff = detect(&on_ground.next, &flight, NOW);

    assert_eq!(takeoff.alerts.len(), 1);
    match &takeoff.alerts[0] {
        Alert::TravelDeparture(e) => {
            assert_eq!(e.destination, "Japan");
            assert_eq!(e.arrives_at, NOW + 13_500);
            assert_eq!(e.flight_seconds_left, 13_500);
        }
        other => panic!("expected departure, got {other:?}"),
    }

    // Still in the air: nothing more.
    let cruising = detect(&takeoff.next, &flight, NOW + 60);
    assert!(cruising.alerts.is_empty());
}

#[test]
fn landing_fires_exactly_once_per_arrival_even_at_ten_second_cycles() {
    let arrives_at = NOW + 1000;
    let mut state = MonitorState {
        was_traveling: true,
        ..armed()
    };

    let mut landing_alerts = 0;
    // Poll every 10 seconds from well before the window through arrival.
    let mut t = arrives_at - 300;
    while t < arrives_at {
        let detection = detect(&state, &traveling_snapshot("Hawaii", arrives_at), t);
        landing_alerts += detection
            .alerts
            .iter()
            .filter(|a| matches!(a, Alert::TravelLanding(_)))
            .count();
        state = detection.next;
        t += 10;
    }

    assert_eq!(landing_alerts, 1);
    assert_eq!(state.landing_alerted_for, Some(arrives_at));
}

#[test]
fn next_flight_rearms_landing_alert() {
    let first_arrival = NOW + 100;
    let state = MonitorState {
        was_traveling: true,
        landing_alerted_for: Some(first_arrival),
        ..armed()
    };

    // A later flight has a different arrival time, so it alerts again.
    let second_arrival = NOW + 5000;
    let detection = detect(
        &state,
        &traveling_snapshot("Mexico", second_arrival),
        second_arrival - LANDING_WINDOW_SECS,
    );

    assert!(detection
        .alerts
        .iter()
        .any(|a| matches!(a, Alert::TravelLanding(_))));
}

#[test]
fn return_leg_to_torn_stays_silent() {
    let arrives_at = NOW + 1560;
    let homebound = traveling_snapshot("Torn", arrives_at);

    // Takeoff of the return flight: no departure alert.
    let takeoff = detect(&armed(), &homebound, NOW);
    assert!(takeoff.alerts.is_empty());
    assert!(takeoff.next.was_traveling);

    // Inside the landing window: no landing alert, no marker burned.
    let close = detect(&takeoff.next, &homebound, arrives_at - 60);
    assert!(close.alerts.is_empty());
    assert_eq!(close.next.landing_alerted_for, None);

    // The next outbound flight still alerts normally.
    let grounded = detect(&close.next, &Snapshot::default(), arrives_at + 60);
    let outbound = detect(
        &grounded.next,
        &traveling_snapshot("Japan", arrives_at + 15_000),
        arrives_at + 120,
    );
    assert!(outbound
        .alerts
        .iter()
        .any(|a| matches!(a, Alert::TravelDeparture(_))));
}

#[test]
fn education_fires_once_inside_final_hour() {
    let ends_at = NOW + 7200;
    let studying = |ends_at| Snapshot {
        education: Education {
            course_id: Some(77),
            ends_at: Some(ends_at),
        },
        ..Snapshot::default()
    };

    // Two hours out: nothing.
    let early = detect(&armed(), &studying(ends_at), NOW);
    assert!(early.alerts.is_empty());

    // Crossing into the final hour: one alert.
    let close = detect(&early.next, &studying(ends_at), ends_at - 3500);
    assert_eq!(close.alerts.len(), 1);
    assert!(matches!(close.alerts[0], Alert::EducationSoon { .. }));

    // Still inside the window: quiet.
    let closer = detect(&close.next, &studying(ends_at), ends_at - 600);
    assert!(closer.alerts.is_empty());

    // A new course re-arms.
    let next_course = detect(&closer.next, &studying(ends_at + 9000), ends_at + 8500);
    assert_eq!(next_course.alerts.len(), 1);
}

#[test]
fn event_marker_advances_once_for_a_burst_of_events() {
    let state = MonitorState {
        last_event_ts: NOW - 100,
        ..armed()
    };

    // Three events arrived since last cycle; snapshot carries the newest.
    let snapshot = Snapshot {
        latest_event_ts: Some(NOW - 2),
        ..Snapshot::default()
    };

    let detection = detect(&state, &snapshot, NOW);
    let events: Vec<_> = detection
        .alerts
        .iter()
        .filter(|a| matches!(a, Alert::NewGlobalEvent { .. }))
        .collect();
    assert_eq!(events.len(), 1);
    assert_eq!(detection.next.last_event_ts, NOW - 2);

    // Nothing newer: quiet.
    let again = detect(&detection.next, &snapshot, NOW + 60);
    assert!(again.alerts.is_empty());
}

#[test]
fn inbox_alert_reports_delta_and_total() {
    let state = MonitorState {
        last_inbox_unread: 2,
        ..armed()
    };
    let snapshot = Snapshot {
        inbox_unread: 5,
        ..Snapshot::default()
    };

    let detection = detect(&state, &snapshot, NOW);
    match &detection.alerts[..] {
        [Alert::NewInboxMessage(e)] => {
            assert_eq!(e.new_count, 3);
            assert_eq!(e.unread, 5);
        }
        other => panic!("expected one inbox alert, got {other:?}"),
    }
}

#[test]
fn crash_recovery_regenerates_the_same_alerts() {
    // The process crashed after dispatch but before commit: the persisted
    // state is stale and the snapshot already reflects the post-transition
    // world. Detection must produce the identical alert set again.
    let stale = MonitorState {
        hospital_until: Some(NOW - 30),
        drug_until: Some(NOW - 10),
        ..armed()
    };
    let post_transition = Snapshot {
        energy: Bar::new(150, 150),
        ..Snapshot::default()
    };

    let first = detect(&stale, &post_transition, NOW);
    let replay = detect(&stale, &post_transition, NOW + 60);

    assert_eq!(first.alerts, replay.alerts);
    assert_eq!(first.alerts.len(), 3); // hospital exit, drug ready, energy full
}
