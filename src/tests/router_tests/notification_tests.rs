use crate::db::notifications::load_active;
use crate::domain::RecordId;
use crate::tests::utils::{body_string, get, location, make_state, post, restart};

#[test]
fn acknowledging_creation_notifies_and_counts() {
    let state = make_state("notify_ack");
    post(
        &state,
        "/company/jobs",
        "title=Backend+Intern&category=Engineering&skills_required=Rust&description=APIs",
    );

    let resp = post(&state, "/company/jobs/5/acknowledge", "");
    assert_eq!(location(&resp), "/company/jobs");
    assert_eq!(
        state
            .dashboards()
            .unwrap()
            .company_jobs
            .store
            .get(RecordId(5))
            .unwrap()
            .applicant_count,
        1
    );

    let body = body_string(get(&state, "/notifications"));
    assert!(body.contains("New applicant for"));
    assert!(body.contains("Backend Intern"));

    let stored = state.db.with_conn(|conn| load_active(conn)).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, 1);
}

#[test]
fn dismiss_removes_notice_everywhere() {
    let state = make_state("notify_dismiss");
    post(&state, "/company/jobs/2/acknowledge", "");

    let resp = post(&state, "/notifications/1/dismiss", "");
    assert_eq!(location(&resp), "/notifications");
    assert!(state.notifications().unwrap().notifications().is_empty());

    let stored = state.db.with_conn(|conn| load_active(conn)).unwrap();
    assert!(stored.is_empty());
    assert!(body_string(get(&state, "/")).contains("Notifications (0)"));
}

#[test]
fn acknowledging_unknown_job_is_not_found() {
    let state = make_state("notify_missing");
    let req = http::Request::builder()
        .method("POST")
        .uri("/company/jobs/42/acknowledge")
        .body(astra::Body::empty())
        .unwrap();
    match crate::router::handle(req, &state) {
        Err(err) => assert_eq!(err.status_code(), 404),
        Ok(resp) => panic!("expected 404, got {}", resp.status()),
    }
    assert!(state.notifications().unwrap().notifications().is_empty());
}

#[test]
fn notices_do_not_outlive_the_process() {
    let state = make_state("notify_restart");
    post(&state, "/company/jobs/2/acknowledge", "");
    assert_eq!(state.notifications().unwrap().notifications().len(), 1);

    let restarted = restart(&state);
    assert!(restarted.notifications().unwrap().notifications().is_empty());
    let stored = restarted.db.with_conn(|conn| load_active(conn)).unwrap();
    assert!(stored.is_empty());
    assert!(body_string(get(&restarted, "/")).contains("Notifications (0)"));
}
