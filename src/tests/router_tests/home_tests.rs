// src/tests/router_tests/home_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_store};

#[test]
fn home_renders_empty_state_and_form() {
    let (store, _path) = make_store();

    let resp = handle(get("/"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("College Application Tracker"));
    assert!(body.contains("Add New College"));
    assert!(body.contains("No colleges added yet"));
}

#[test]
fn form_offers_both_countries_and_all_statuses() {
    let (store, _path) = make_store();

    let body = body_string(handle(get("/"), &store).unwrap());

    assert!(body.contains("United States"));
    assert!(body.contains("United Kingdom"));
    assert!(body.contains("value=\"RD\""));
    assert!(body.contains("value=\"UCAS\""));
    assert!(body.contains("value=\"waitlisted\""));
}

#[test]
fn unknown_route_is_not_found() {
    let (store, _path) = make_store();

    match handle(get("/nope"), &store) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|r| r.status())),
    }
}
