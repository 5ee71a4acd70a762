//! End-to-end navigation through the host.

use std::sync::atomic::Ordering;

use confetti_nav::destinations::session_details::{
    SessionDetailsDestination, SESSION_DETAILS, SESSION_ID_ARG,
};
use confetti_nav::destinations::NavigationDestination;
use confetti_nav::host::NavError;
use confetti_nav::routing::{EncodingError, RouteParams};

mod common;

use common::{build_host, Screen};

#[test]
fn test_session_details_round_trip() {
    let (mut host, _) = build_host();

    for id in ["abc", "a/b", "100%", "q?x#y", "2024/keynote%2F?", "día ✨", " "] {
        let path = SessionDetailsDestination::create_navigation_route(id).unwrap();
        let screen = host.navigate(&path).unwrap();
        assert_eq!(screen.session_id(), Some(id), "path {path}");
        assert_eq!(
            SessionDetailsDestination::from_nav_args(host.current_entry().unwrap()),
            id
        );
    }
}

#[test]
fn test_escaped_path_shape() {
    assert_eq!(
        SESSION_DETAILS.build_path("abc").unwrap(),
        "session_details_route/abc"
    );
    assert_eq!(
        SESSION_DETAILS.build_path("a/b").unwrap(),
        "session_details_route/a%2Fb"
    );

    let params: RouteParams = [(SESSION_ID_ARG, "a%2Fb")].into_iter().collect();
    assert_eq!(SESSION_DETAILS.extract_argument(&params), "a/b");
}

#[test]
fn test_empty_session_id_is_rejected() {
    let (mut host, _) = build_host();
    let result =
        host.navigate_to(SessionDetailsDestination::destination(), &[(SESSION_ID_ARG, "")]);
    assert!(matches!(result, Err(NavError::Encoding(EncodingError::Empty { .. }))));
    assert_eq!(host.back_stack_len(), 0);
}

#[test]
#[should_panic(expected = "missing argument")]
fn test_missing_argument_panics() {
    SESSION_DETAILS.extract_argument(&RouteParams::new());
}

#[test]
fn test_back_callback_and_pop() {
    let (mut host, back_presses) = build_host();
    host.navigate("sessions").unwrap();
    host.navigate(&SESSION_DETAILS.build_path("s1").unwrap()).unwrap();

    host.current_screen().unwrap().press_back();
    assert_eq!(back_presses.load(Ordering::SeqCst), 1);

    assert!(host.pop_back());
    assert!(matches!(host.current_screen(), Some(Screen::Sessions)));
}

#[test]
fn test_typed_route() {
    let (mut host, _) = build_host();
    match host.navigate("schedule/3").unwrap() {
        Screen::Schedule { day } => assert_eq!(day, "3"),
        _ => panic!("expected schedule screen"),
    }
    assert!(matches!(host.navigate("schedule/monday"), Err(NavError::NoRoute(_))));
}

#[test]
fn test_deep_link_to_session() {
    let (mut host, _) = build_host();
    let screen = host
        .handle_deep_link("confetti://confetti.app/session_details_route/a%2Fb?from=share")
        .unwrap();
    assert_eq!(screen.session_id(), Some("a/b"));

    assert!(host
        .handle_deep_link("confetti://elsewhere/session_details_route/a")
        .is_err());
}

#[test]
fn test_deep_link_round_trip_matches_direct_navigation() {
    let (mut host, _) = build_host();

    for id in [".", "..", "a/..", "día ✨", "100%", "q?x#y"] {
        let path = SessionDetailsDestination::create_navigation_route(id).unwrap();
        let direct = host.navigate(&path).unwrap();
        assert_eq!(direct.session_id(), Some(id), "path {path}");

        let uri = format!("confetti://confetti.app/{path}");
        let linked = host.handle_deep_link(&uri).unwrap();
        assert_eq!(linked.session_id(), Some(id), "uri {uri}");
    }
}
