use astra::Server;
use college_tracker::db::connection::{init_db, Database};
use college_tracker::responses::error_to_response;
use college_tracker::router::handle;
use college_tracker::store::ApplicationStore;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

fn main() {
    // 1️⃣ Create the database handle
    let db = Database::new("colleges.sqlite3");

    // 2️⃣ Apply the schema (one key-value table)
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Load the record collection; a corrupted slot degrades to empty
    let store = match ApplicationStore::open(db) {
        Ok(store) => {
            println!("Loaded {} tracked college(s)", store.all().len());
            Arc::new(Mutex::new(store))
        }
        Err(e) => {
            eprintln!("❌ Could not load stored records: {e}");
            std::process::exit(1);
        }
    };

    // 4️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
