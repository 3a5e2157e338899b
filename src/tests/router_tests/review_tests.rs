use crate::domain::record::Listing;
use crate::domain::status::{ApplicationStatus, ReportStatus};
use crate::domain::RecordId;
use crate::state::AppState;
use crate::tests::utils::{body_string, get, location, make_state, post, restart};
use std::io::Read;

fn scad_status(state: &AppState, id: u32) -> Option<ReportStatus> {
    state
        .dashboards()
        .unwrap()
        .scad_reports
        .store
        .get(RecordId(id))
        .and_then(|r| r.status())
}

#[test]
fn status_filter_narrows_the_board() {
    let state = make_state("review_filter");
    let body = body_string(get(&state, "/scad/reports?status=flagged"));
    assert!(body.contains("Campus campaign report"));
    assert!(!body.contains("Retail churn dashboards"));
}

#[test]
fn clicking_active_status_clears_it() {
    let state = make_state("review_toggle");

    let resp = post(&state, "/scad/reports/1/status", "status=accepted");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/scad/reports/1");
    assert_eq!(scad_status(&state, 1), Some(ReportStatus::Accepted));

    post(&state, "/scad/reports/1/status", "status=accepted");
    assert_eq!(scad_status(&state, 1), None);

    let body = body_string(get(&state, "/scad/reports/1"));
    assert!(body.contains("Status history"));
}

#[test]
fn reject_waits_for_a_clarification() {
    let state = make_state("review_reject");

    let resp = post(&state, "/scad/reports/1/status", "status=rejected");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Clarification required"));
    assert_eq!(scad_status(&state, 1), None);

    // Other clicks are blocked while the dialog is open.
    let resp = post(&state, "/scad/reports/1/status", "status=accepted");
    assert!(body_string(resp).contains("Clarification required"));
    assert_eq!(scad_status(&state, 1), None);

    // Blank text never commits.
    let resp = post(&state, "/scad/reports/clarify", "message=+++");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("A clarification message is required."));
    assert_eq!(scad_status(&state, 1), None);

    let resp = post(&state, "/scad/reports/clarify", "message=Missing+appendix");
    assert_eq!(location(&resp), "/scad/reports/1");
    assert_eq!(scad_status(&state, 1), Some(ReportStatus::Rejected));
    {
        let dashboards = state.dashboards().unwrap();
        let report = dashboards.scad_reports.store.get(RecordId(1)).unwrap();
        assert_eq!(report.clarification(), Some("Missing appendix"));
        assert!(dashboards.scad_reports.engine.pending().is_none());
    }

    let body = body_string(get(&state, "/scad/reports/1"));
    assert!(body.contains("Missing appendix"));
}

#[test]
fn cancel_leaves_status_unchanged() {
    let state = make_state("review_cancel");
    post(&state, "/scad/reports/2/status", "status=rejected");

    let resp = post(&state, "/scad/reports/cancel", "message=never+mind");
    assert_eq!(location(&resp), "/scad/reports/2");
    assert_eq!(scad_status(&state, 2), Some(ReportStatus::Accepted));
    assert!(state.dashboards().unwrap().scad_reports.engine.pending().is_none());
}

#[test]
fn clearing_a_rejection_needs_no_clarification() {
    let state = make_state("review_clear_reject");
    let resp = post(&state, "/company/applications/4/status", "status=rejected");
    assert_eq!(resp.status(), 302);

    let dashboards = state.dashboards().unwrap();
    let app = dashboards
        .company_applications
        .store
        .get(RecordId(4))
        .unwrap();
    assert_eq!(app.status(), None::<ApplicationStatus>);
    assert_eq!(app.clarification(), None);
}

#[test]
fn boards_keep_separate_state() {
    let state = make_state("review_boards");
    post(&state, "/scad/reports/4/status", "status=flagged");

    let dashboards = state.dashboards().unwrap();
    let faculty = dashboards.faculty_reports.store.get(RecordId(4)).unwrap();
    assert_eq!(faculty.status(), None);
    assert_eq!(
        dashboards.scad_reports.store.get(RecordId(4)).unwrap().status(),
        Some(ReportStatus::Flagged)
    );
}

#[test]
fn unknown_status_or_record_is_rejected() {
    let state = make_state("review_errors");
    let req = http::Request::builder()
        .method("POST")
        .uri("/faculty/reports/1/status")
        .body(astra::Body::from("status=approved".to_string()))
        .unwrap();
    match crate::router::handle(req, &state) {
        Err(err) => assert_eq!(err.status_code(), 400),
        Ok(resp) => panic!("expected 400, got {}", resp.status()),
    }

    let req = http::Request::builder()
        .method("GET")
        .uri("/faculty/reports/99")
        .body(astra::Body::empty())
        .unwrap();
    match crate::router::handle(req, &state) {
        Err(err) => assert_eq!(err.status_code(), 404),
        Ok(resp) => panic!("expected 404, got {}", resp.status()),
    }
}

fn export_rows(state: &AppState, uri: &str) -> String {
    let resp = get(state, uri);
    assert_eq!(resp.status(), 200);
    resp.headers()["X-Export-Rows"].to_str().unwrap().to_string()
}

#[test]
fn export_returns_filtered_workbook() {
    let state = make_state("review_export");
    let resp = get(&state, "/scad/reports/export?status=flagged");
    assert_eq!(resp.status(), 200);
    assert!(resp.headers()["Content-Type"]
        .to_str()
        .unwrap()
        .contains("spreadsheetml"));
    assert_eq!(resp.headers()["X-Export-Rows"], "1");

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));

    assert_eq!(export_rows(&state, "/scad/reports/export"), "4");
    assert_eq!(export_rows(&state, "/scad/reports/export?q=mobile"), "1");
    assert_eq!(export_rows(&state, "/company/applications/export?q=valeo&status=accepted"), "1");

    // Exports follow live decisions.
    post(&state, "/scad/reports/4/status", "status=flagged");
    assert_eq!(export_rows(&state, "/scad/reports/export?status=flagged"), "2");
}

#[test]
fn decisions_survive_a_restart() {
    let state = make_state("review_restart");
    post(&state, "/scad/reports/1/status", "status=rejected");
    post(&state, "/scad/reports/clarify", "message=Missing+appendix");
    post(&state, "/scad/reports/2/status", "status=accepted");

    let restarted = restart(&state);
    {
        let dashboards = restarted.dashboards().unwrap();
        let rejected = dashboards.scad_reports.store.get(RecordId(1)).unwrap();
        assert_eq!(rejected.status(), Some(ReportStatus::Rejected));
        assert_eq!(rejected.clarification(), Some("Missing appendix"));
        // Report 2 was accepted in the seed and cleared by the click.
        assert_eq!(
            dashboards.scad_reports.store.get(RecordId(2)).unwrap().status(),
            None
        );
        assert_eq!(
            dashboards.faculty_reports.store.get(RecordId(1)).unwrap().status(),
            None
        );
    }

    let body = body_string(get(&restarted, "/scad/reports/1"));
    assert!(body.contains("Missing appendix"));
}
