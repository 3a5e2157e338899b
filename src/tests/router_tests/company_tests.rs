use crate::domain::RecordId;
use crate::tests::utils::{body_string, get, location, make_state, post};

const NEW_JOB: &str = "title=Backend+Intern&company=Acme&category=Engineering&duration=3+months\
&paid=on&salary=5000&skills_required=Rust&description=Internal+APIs";

#[test]
fn home_page_loads() {
    let state = make_state("home");
    let resp = get(&state, "/");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Notifications"));
}

#[test]
fn unknown_path_is_not_found() {
    let state = make_state("not_found");
    let req = http::Request::builder()
        .method("GET")
        .uri("/nowhere/at/all/really")
        .body(astra::Body::empty())
        .unwrap();
    match crate::router::handle(req, &state) {
        Err(err) => assert_eq!(err.status_code(), 404),
        Ok(resp) => panic!("expected 404, got {}", resp.status()),
    }
}

#[test]
fn job_search_filters_by_title() {
    let state = make_state("job_search");
    let body = body_string(get(&state, "/company/jobs?q=engineer"));
    assert!(body.contains("Software Engineer Intern"));
    assert!(!body.contains("Data Analyst Intern"));

    // Plain navigation keeps the last query.
    let body = body_string(get(&state, "/company/jobs"));
    assert!(!body.contains("Data Analyst Intern"));
}

#[test]
fn incomplete_seed_listings_are_flagged() {
    let state = make_state("incomplete");
    let body = body_string(get(&state, "/company/jobs"));
    assert!(body.contains("UX Design Intern"));
    assert!(body.contains("Incomplete listing"));
}

#[test]
fn create_redirects_to_acknowledgment() {
    let state = make_state("create_job");
    let resp = post(&state, "/company/jobs", NEW_JOB);
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/company/jobs/5/created");

    let body = body_string(get(&state, "/company/jobs/5/created"));
    assert!(body.contains("Backend Intern"));

    let dashboards = state.dashboards().unwrap();
    let job = dashboards.company_jobs.store.get(RecordId(5)).unwrap();
    assert_eq!(job.visible_salary(), Some(5000));
    assert!(!job.is_incomplete());
}

#[test]
fn invalid_create_keeps_form_open() {
    let state = make_state("invalid_job");
    let resp = post(&state, "/company/jobs", "title=&company=Acme&category=Design");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Title and category are required."));
    assert!(body.contains("value=\"Acme\""));
    assert_eq!(state.dashboards().unwrap().company_jobs.store.len(), 4);
}

#[test]
fn unpaid_job_hides_salary() {
    let state = make_state("unpaid_job");
    post(
        &state,
        "/company/jobs",
        "title=Research+Intern&category=Science&salary=900&skills_required=R&description=Lab",
    );
    let dashboards = state.dashboards().unwrap();
    let job = dashboards.company_jobs.store.get(RecordId(5)).unwrap();
    assert_eq!(job.paid, Some(false));
    assert_eq!(job.visible_salary(), None);
}

#[test]
fn detail_edit_and_delete() {
    let state = make_state("edit_job");
    let body = body_string(get(&state, "/company/jobs/1"));
    assert!(body.contains("Edit posting"));

    let resp = post(
        &state,
        "/company/jobs/1/edit",
        "title=Firmware+Intern&category=Engineering&paid=on&salary=7000",
    );
    assert_eq!(location(&resp), "/company/jobs/1");
    {
        let dashboards = state.dashboards().unwrap();
        let job = dashboards.company_jobs.store.get(RecordId(1)).unwrap();
        assert_eq!(job.title, "Firmware Intern");
        assert_eq!(job.company, "Valeo");
        assert_eq!(job.salary, Some(7000));
    }

    let resp = post(&state, "/company/jobs/1/delete", "");
    assert_eq!(location(&resp), "/company/jobs");
    let dashboards = state.dashboards().unwrap();
    assert!(dashboards.company_jobs.store.get(RecordId(1)).is_none());
    assert_eq!(dashboards.company_jobs.presenter.selected(), None);
}

#[test]
fn applicants_layer_opens_and_closes() {
    let state = make_state("applicants");
    let body = body_string(get(&state, "/company/jobs/1/applicants"));
    assert!(body.contains("/company/jobs/1/applicants/close"));

    let resp = post(&state, "/company/jobs/1/applicants/close", "");
    assert_eq!(location(&resp), "/company/jobs/1");
    let dashboards = state.dashboards().unwrap();
    assert!(!dashboards.company_jobs.presenter.sub_records_open());
    assert_eq!(dashboards.company_jobs.presenter.selected(), Some(RecordId(1)));
}

#[test]
fn student_views_are_read_only_lists() {
    let state = make_state("student");
    let body = body_string(get(&state, "/student/jobs?q=valeo"));
    assert!(body.contains("Software Engineer Intern"));
    assert!(body.contains("Marketing Intern"));
    assert!(!body.contains("Data Analyst Intern"));

    let body = body_string(get(&state, "/student/applications?status=finalized"));
    assert!(body.contains("Data Analyst Intern"));
    assert!(!body.contains("UX Design Intern"));
}

#[test]
fn students_browse_the_company_stores() {
    let state = make_state("student_shared");
    post(&state, "/company/jobs", NEW_JOB);
    let body = body_string(get(&state, "/student/jobs?q=acme"));
    assert!(body.contains("Backend Intern"));

    post(&state, "/company/applications/1/status", "status=accepted");
    let body = body_string(get(&state, "/student/applications?status=accepted"));
    assert!(body.contains("Ahmed Samir"));
    assert!(body.contains("Laila Mostafa"));
}
