pub mod grouping;
pub mod record;

pub use grouping::group_by_country_and_type;
pub use record::{
    create_record, ApplicationDraft, ApplicationRecord, ApplicationType, Country, Status,
    ValidationError,
};
