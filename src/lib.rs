pub mod db;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod responses;
pub mod router;
pub mod store;
pub mod templates;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use db::connection::{init_db, Database};
pub use domain::record::{
    ApplicationDraft, ApplicationRecord, ApplicationType, Country, Status, ValidationError,
};
pub use errors::ServerError;
pub use router::handle;
pub use store::ApplicationStore;
