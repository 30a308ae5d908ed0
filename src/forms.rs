// src/forms.rs

use crate::domain::record::{ApplicationDraft, ApplicationType, Country, Status, ValidationError};
use crate::errors::ServerError;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Read;

/// Reads an `application/x-www-form-urlencoded` request body into a field
/// map. `+` is a space, values are percent-decoded.
pub fn read_form(req: astra::Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    parse_form(&body)
}

/// Parses the urlencoded pair syntax itself. Split out so tests can feed
/// strings directly.
pub fn parse_form(body: &str) -> Result<HashMap<String, String>, ServerError> {
    let mut fields = HashMap::new();

    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        let value = parts.next().unwrap_or("");
        fields.insert(decode_component(key)?, decode_component(value)?);
    }

    Ok(fields)
}

fn decode_component(raw: &str) -> Result<String, ServerError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|cow| cow.into_owned())
        .map_err(|e| ServerError::BadRequest(format!("bad form encoding: {e}")))
}

/// Builds a draft from posted form fields.
///
/// Missing selects fall back to the defaults the form renders with. An
/// explicitly posted type is kept as-is even when it does not match the
/// posted country; the store's validation rejects that pairing rather than
/// silently repairing it.
pub fn draft_from_form(fields: &HashMap<String, String>) -> Result<ApplicationDraft, ServerError> {
    let mut draft = ApplicationDraft::default();

    if let Some(country) = nonempty(fields, "country") {
        let country = Country::parse(country)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown country '{country}'")))?;
        draft.set_country(country);
    }

    if let Some(ty) = nonempty(fields, "type") {
        draft.application_type = ApplicationType::parse(ty)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown application type '{ty}'")))?;
    }

    if let Some(status) = nonempty(fields, "status") {
        draft.status = parse_status(status)?;
    }

    if let Some(deadline) = nonempty(fields, "deadline") {
        draft.deadline = Some(
            NaiveDate::parse_from_str(deadline, "%Y-%m-%d")
                .map_err(|e| ServerError::BadRequest(format!("bad deadline '{deadline}': {e}")))?,
        );
    }

    draft.name = fields.get("name").cloned().unwrap_or_default();
    draft.major = nonempty(fields, "major").map(str::to_string);
    draft.notes = nonempty(fields, "notes").map(str::to_string);

    Ok(draft)
}

/// The record id carried by the status and delete forms.
pub fn id_from_form(fields: &HashMap<String, String>) -> Result<i64, ServerError> {
    let raw = nonempty(fields, "id")
        .ok_or_else(|| ServerError::BadRequest("missing record id".to_string()))?;
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("bad record id '{raw}'")))
}

/// The status carried by the status form. Anything outside the six known
/// values is a validation failure, never stored.
pub fn status_from_form(fields: &HashMap<String, String>) -> Result<Status, ServerError> {
    let raw = nonempty(fields, "status")
        .ok_or_else(|| ServerError::BadRequest("missing status".to_string()))?;
    parse_status(raw)
}

fn parse_status(raw: &str) -> Result<Status, ServerError> {
    Status::parse(raw).ok_or(ServerError::Validation(ValidationError::InvalidStatus))
}

fn nonempty<'a>(fields: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    fields.get(key).map(String::as_str).filter(|v| !v.is_empty())
}
