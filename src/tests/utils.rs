use crate::db::connection::{init_db, Database};
use crate::store::ApplicationStore;
use astra::{Body, Request};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh database file under the system temp dir, schema applied.
pub fn make_db() -> (Database, PathBuf) {
    let path = std::env::temp_dir().join(format!(
        "tracker_test_{}_{:?}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        std::thread::current().id(),
    ));
    let db = Database::new(path.clone());
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    (db, path)
}

/// Store over a fresh database, wrapped the way the server holds it.
pub fn make_store() -> (Mutex<ApplicationStore>, PathBuf) {
    let (db, path) = make_db();
    let store = ApplicationStore::open(db).expect("Failed to open store");
    (Mutex::new(store), path)
}

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn post(path: &str, form_body: &str) -> Request {
    let mut req = Request::new(Body::new(form_body.to_string()));
    *req.method_mut() = Method::POST;
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}
