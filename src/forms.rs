// src/forms.rs
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

pub type Params = HashMap<String, String>;

fn decode(raw: &[u8]) -> Params {
    url::form_urlencoded::parse(raw)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| decode(q.as_bytes()))
        .unwrap_or_default()
}

/// Reads an `application/x-www-form-urlencoded` body.
pub fn parse_form(req: Request) -> Result<Params, ServerError> {
    let mut raw = Vec::new();
    let mut body = req.into_body();
    body.reader()
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(decode(&raw))
}

/// Trimmed value, `None` when missing or blank.
pub fn field(params: &Params, key: &str) -> Option<String> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn text(params: &Params, key: &str) -> String {
    field(params, key).unwrap_or_default()
}

/// Checkbox semantics: present with "on"/"true"/"yes"/"1".
pub fn flag(params: &Params, key: &str) -> bool {
    matches!(
        params.get(key).map(|v| v.trim().to_lowercase()).as_deref(),
        Some("on" | "true" | "yes" | "1")
    )
}

pub fn number(params: &Params, key: &str) -> Result<Option<u32>, ServerError> {
    field(params, key)
        .map(|v| {
            v.parse::<u32>()
                .map_err(|_| ServerError::BadRequest(format!("{key} must be a whole number")))
        })
        .transpose()
}
