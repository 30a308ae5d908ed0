// src/tests/router_tests/record_flow_tests.rs

use crate::db::connection::Database;
use crate::domain::record::{Status, ValidationError};
use crate::errors::ServerError;
use crate::router::handle;
use crate::store::ApplicationStore;
use crate::tests::utils::{body_string, get, make_store, post};

#[test]
fn add_then_list_shows_the_record_in_its_group() {
    let (store, _path) = make_store();

    let resp = handle(
        post(
            "/add",
            "name=Harvard+University&country=US&type=REA&status=pending\
             &deadline=2026-11-01&major=Economics&notes=reach+school",
        ),
        &store,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/"
    );

    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(body.contains("US - REA"));
    assert!(body.contains("Harvard University"));
    assert!(body.contains("Major: Economics"));
    assert!(body.contains("Deadline: Nov 1, 2026"));
    assert!(body.contains("reach school"));
}

#[test]
fn add_with_empty_name_is_rejected_and_nothing_is_stored() {
    let (store, _path) = make_store();

    match handle(post("/add", "name=+&country=US&type=RD"), &store) {
        Err(ServerError::Validation(ValidationError::EmptyName)) => {}
        other => panic!("expected EmptyName, got {:?}", other.map(|r| r.status())),
    }

    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(body.contains("No colleges added yet"));
}

#[test]
fn add_with_type_from_the_wrong_country_is_rejected() {
    let (store, _path) = make_store();

    match handle(post("/add", "name=MIT&country=US&type=UCAS"), &store) {
        Err(ServerError::Validation(ValidationError::InvalidType)) => {}
        other => panic!("expected InvalidType, got {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn status_post_updates_exactly_that_record() {
    let (store, _path) = make_store();

    handle(post("/add", "name=Yale&country=US&type=RD"), &store).unwrap();
    handle(post("/add", "name=Brown&country=US&type=RD"), &store).unwrap();

    let yale_id = store.lock().unwrap().all()[0].id;
    let resp = handle(
        post("/status", &format!("id={yale_id}&status=accepted")),
        &store,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let guard = store.lock().unwrap();
    assert_eq!(guard.all()[0].status, Status::Accepted);
    assert_eq!(guard.all()[0].name, "Yale");
    assert_eq!(guard.all()[1].status, Status::Pending);
}

#[test]
fn status_post_with_unknown_value_is_rejected() {
    let (store, _path) = make_store();
    handle(post("/add", "name=Yale&country=US&type=RD"), &store).unwrap();
    let id = store.lock().unwrap().all()[0].id;

    match handle(post("/status", &format!("id={id}&status=ghosted")), &store) {
        Err(ServerError::Validation(ValidationError::InvalidStatus)) => {}
        other => panic!("expected InvalidStatus, got {:?}", other.map(|r| r.status())),
    }
    assert_eq!(store.lock().unwrap().all()[0].status, Status::Pending);
}

#[test]
fn delete_post_removes_the_record_and_repeats_harmlessly() {
    let (store, _path) = make_store();
    handle(post("/add", "name=Yale&country=US&type=RD"), &store).unwrap();
    let id = store.lock().unwrap().all()[0].id;

    let resp = handle(post("/delete", &format!("id={id}")), &store).unwrap();
    assert_eq!(resp.status(), 303);
    assert!(store.lock().unwrap().all().is_empty());

    // Replaying the same delete (stale tab) stays a no-op.
    let resp = handle(post("/delete", &format!("id={id}")), &store).unwrap();
    assert_eq!(resp.status(), 303);
}

#[test]
fn records_survive_a_server_restart() {
    let (store, path) = make_store();
    handle(
        post("/add", "name=Oxford&country=UK&type=Oxbridge"),
        &store,
    )
    .unwrap();
    drop(store);

    let reopened = ApplicationStore::open(Database::new(path)).unwrap();
    let store = std::sync::Mutex::new(reopened);

    let body = body_string(handle(get("/"), &store).unwrap());
    assert!(body.contains("UK - Oxbridge"));
    assert!(body.contains("Oxford"));
}
