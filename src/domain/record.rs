// src/domain/record.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Country the college sits in. Each country has its own admission cycle and
/// therefore its own set of application types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    US,
    UK,
}

impl Country {
    /// Application types a college in this country actually offers.
    /// The first entry doubles as the default when the country changes.
    pub fn allowed_types(&self) -> &'static [ApplicationType] {
        match self {
            Country::US => &[
                ApplicationType::Rd,
                ApplicationType::Rea,
                ApplicationType::Ed,
                ApplicationType::Ed2,
                ApplicationType::Ea,
                ApplicationType::Rolling,
            ],
            Country::UK => &[
                ApplicationType::Ucas,
                ApplicationType::Direct,
                ApplicationType::Oxbridge,
                ApplicationType::Rolling,
            ],
        }
    }

    pub fn default_type(&self) -> ApplicationType {
        self.allowed_types()[0]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::US => "US",
            Country::UK => "UK",
        }
    }

    pub fn parse(s: &str) -> Option<Country> {
        match s {
            "US" => Some(Country::US),
            "UK" => Some(Country::UK),
            _ => None,
        }
    }

    pub const ALL: [Country; 2] = [Country::US, Country::UK];
}

/// Admission round the application was submitted under.
/// Serialized names match the values the form posts ("RD", "UCAS", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationType {
    #[serde(rename = "RD")]
    Rd,
    #[serde(rename = "REA")]
    Rea,
    #[serde(rename = "ED")]
    Ed,
    #[serde(rename = "ED2")]
    Ed2,
    #[serde(rename = "EA")]
    Ea,
    Rolling,
    #[serde(rename = "UCAS")]
    Ucas,
    Direct,
    Oxbridge,
}

impl ApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::Rd => "RD",
            ApplicationType::Rea => "REA",
            ApplicationType::Ed => "ED",
            ApplicationType::Ed2 => "ED2",
            ApplicationType::Ea => "EA",
            ApplicationType::Rolling => "Rolling",
            ApplicationType::Ucas => "UCAS",
            ApplicationType::Direct => "Direct",
            ApplicationType::Oxbridge => "Oxbridge",
        }
    }

    pub fn parse(s: &str) -> Option<ApplicationType> {
        match s {
            "RD" => Some(ApplicationType::Rd),
            "REA" => Some(ApplicationType::Rea),
            "ED" => Some(ApplicationType::Ed),
            "ED2" => Some(ApplicationType::Ed2),
            "EA" => Some(ApplicationType::Ea),
            "Rolling" => Some(ApplicationType::Rolling),
            "UCAS" => Some(ApplicationType::Ucas),
            "Direct" => Some(ApplicationType::Direct),
            "Oxbridge" => Some(ApplicationType::Oxbridge),
            _ => None,
        }
    }
}

/// Where the application currently stands. Only field that changes after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Accepted,
    Rejected,
    Deferred,
    Waitlisted,
    Withdrawn,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Accepted => "accepted",
            Status::Rejected => "rejected",
            Status::Deferred => "deferred",
            Status::Waitlisted => "waitlisted",
            Status::Withdrawn => "withdrawn",
        }
    }

    /// Human-facing label for selects and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Accepted => "Accepted",
            Status::Rejected => "Rejected",
            Status::Deferred => "Deferred",
            Status::Waitlisted => "Waitlisted",
            Status::Withdrawn => "Withdrawn",
        }
    }

    pub fn parse(s: &str) -> Option<Status> {
        match s {
            "pending" => Some(Status::Pending),
            "accepted" => Some(Status::Accepted),
            "rejected" => Some(Status::Rejected),
            "deferred" => Some(Status::Deferred),
            "waitlisted" => Some(Status::Waitlisted),
            "withdrawn" => Some(Status::Withdrawn),
            _ => None,
        }
    }

    pub const ALL: [Status; 6] = [
        Status::Pending,
        Status::Accepted,
        Status::Rejected,
        Status::Deferred,
        Status::Waitlisted,
        Status::Withdrawn,
    ];
}

/// One tracked college application. Immutable after creation except for
/// `status`, which the store replaces wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: i64,
    pub name: String,
    pub country: Country,
    #[serde(rename = "type")]
    pub application_type: ApplicationType,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Transient form input, before validation. The form controller fills this
/// in; nothing reaches the collection until `create_record` accepts it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDraft {
    pub name: String,
    pub country: Country,
    pub application_type: ApplicationType,
    pub status: Status,
    pub deadline: Option<NaiveDate>,
    pub major: Option<String>,
    pub notes: Option<String>,
}

impl Default for ApplicationDraft {
    fn default() -> Self {
        ApplicationDraft {
            name: String::new(),
            country: Country::US,
            application_type: Country::US.default_type(),
            status: Status::Pending,
            deadline: None,
            major: None,
            notes: None,
        }
    }
}

impl ApplicationDraft {
    /// Switch the draft to another country. The previously selected type is
    /// meaningless under the new country's cycle, so it resets to that
    /// country's first allowed type. Callers with an explicit type assign
    /// `application_type` afterwards.
    pub fn set_country(&mut self, country: Country) {
        if self.country != country {
            self.country = country;
            self.application_type = country.default_type();
        }
    }
}

/// Why a draft was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    InvalidType,
    InvalidStatus,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "College name must not be empty"),
            ValidationError::InvalidType => {
                write!(f, "Application type is not offered in the selected country")
            }
            ValidationError::InvalidStatus => write!(f, "Unknown application status"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a draft and turns it into an immutable record under the given
/// id. Pure: the store picks the id, this function never touches storage.
pub fn create_record(
    draft: ApplicationDraft,
    id: i64,
) -> Result<ApplicationRecord, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !draft.country.allowed_types().contains(&draft.application_type) {
        return Err(ValidationError::InvalidType);
    }

    Ok(ApplicationRecord {
        id,
        name: name.to_string(),
        country: draft.country,
        application_type: draft.application_type,
        status: draft.status,
        deadline: draft.deadline,
        major: draft.major,
        notes: draft.notes,
    })
}
