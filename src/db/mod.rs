pub mod connection;
pub mod records;

pub use connection::{init_db, Database};
pub use records::{load_records, save_records, COLLEGES_SLOT};
