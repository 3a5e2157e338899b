use crate::db::Database;
use crate::router::handle;
use crate::state::AppState;
use astra::{Body, Response};
use http::Method;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seeded state over a fresh database in the temp dir.
pub fn make_state(prefix: &str) -> AppState {
    let path = std::env::temp_dir().join(format!(
        "{prefix}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().into_owned());
    AppState::seeded(db).expect("Failed to initialize state")
}

/// A second instance over the same database, as after a server restart.
pub fn restart(state: &AppState) -> AppState {
    AppState::seeded(state.db.clone()).expect("Failed to restart state")
}

pub fn get(state: &AppState, uri: &str) -> Response {
    let req = http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, state).unwrap()
}

pub fn post(state: &AppState, uri: &str, form: &str) -> Response {
    let req = http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    handle(req, state).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
