// src/domain/grouping.rs

use crate::domain::record::{ApplicationRecord, ApplicationType, Country};

pub type GroupKey = (Country, ApplicationType);

/// Groups records by (country, application type) for display.
///
/// Pure function over a snapshot. Group order is the order each key first
/// appears in the input, and records keep their relative order within a
/// group, so the rendered page stays stable as records are added.
pub fn group_by_country_and_type(
    records: &[ApplicationRecord],
) -> Vec<(GroupKey, Vec<&ApplicationRecord>)> {
    let mut groups: Vec<(GroupKey, Vec<&ApplicationRecord>)> = Vec::new();

    for record in records {
        let key = (record.country, record.application_type);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key, vec![record])),
        }
    }

    groups
}
