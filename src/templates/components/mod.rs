pub mod record;

pub use record::{record_card, status_select};
