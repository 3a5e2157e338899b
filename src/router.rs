use crate::db::history::{history_for, record_change, StatusChange};
use crate::db::notifications::dismiss_notification;
use crate::domain::record::{JobPatch, JobPosting, Listing, RecordId, Tabular};
use crate::domain::status::{status_label, StatusKind};
use crate::domain::transition::{Clarification, Transition};
use crate::domain::{Query, ReviewBoard, ReviewBoardMut, ReviewKey};
use crate::errors::ServerError;
use crate::forms::{field, flag, number, parse_form, parse_query, text, Params};
use crate::responses::{html_response, redirect, ResultResp};
use crate::spreadsheets::export_board_xlsx;
use crate::state::AppState;
use crate::templates::pages::{
    browse_page, company_jobs_page, home_page, job_created_page, notifications_page, review_page,
    JobsVm, PendingVm, ReviewVm,
};
use astra::Request;
use chrono::Utc;

// Runs `$body` with `$b` bound to the typed board behind `$key`.
macro_rules! on_review_board {
    ($dashboards:expr, $key:expr, |$b:ident| $body:expr) => {
        match $dashboards.review($key) {
            ReviewBoardMut::Applications($b) => $body,
            ReviewBoardMut::Reports($b) => $body,
        }
    };
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => home(state),

        // Notifications
        ("GET", ["notifications"]) => notifications(state),
        ("POST", ["notifications", id, "dismiss"]) => dismiss(state, id),

        // Company job postings
        ("GET", ["company", "jobs"]) => company_jobs(&req, state),
        ("POST", ["company", "jobs"]) => create_job(req, state),
        ("GET", ["company", "jobs", id]) => select_job(state, parse_id(id)?, false),
        ("POST", ["company", "jobs", id, "close"]) => close_job(state, parse_id(id)?),
        ("POST", ["company", "jobs", id, "edit"]) => edit_job(req, state, parse_id(id)?),
        ("POST", ["company", "jobs", id, "delete"]) => delete_job(state, parse_id(id)?),
        ("GET", ["company", "jobs", id, "applicants"]) => select_job(state, parse_id(id)?, true),
        ("POST", ["company", "jobs", id, "applicants", "close"]) => {
            close_applicants(state, parse_id(id)?)
        }
        ("GET", ["company", "jobs", id, "created"]) => job_created(state, parse_id(id)?),
        ("POST", ["company", "jobs", id, "acknowledge"]) => acknowledge(state, parse_id(id)?),

        // Student views (read-only)
        ("GET", ["student", "jobs"]) => student_jobs(&req, state),
        ("GET", ["student", "applications"]) => student_applications(&req, state),

        // Review boards
        ("GET", [dashboard, collection]) => {
            let key = review_key(dashboard, collection)?;
            let params = parse_query(&req);
            let mut dashboards = state.dashboards()?;
            on_review_board!(dashboards, key, |board| {
                apply_query(&mut board.query, &params);
                render_review(state, key, board, None)
            })
        }
        ("GET", [dashboard, collection, "export"]) => {
            let key = review_key(dashboard, collection)?;
            let params = parse_query(&req);
            let query = Query::new(text(&params, "q"), text(&params, "status"));
            let mut dashboards = state.dashboards()?;
            on_review_board!(dashboards, key, |board| {
                export_board_xlsx(&board.visible_for(&query), key.dashboard())
            })
        }
        ("POST", [dashboard, collection, "clarify"]) => {
            let key = review_key(dashboard, collection)?;
            let params = parse_form(req)?;
            let mut dashboards = state.dashboards()?;
            on_review_board!(dashboards, key, |board| {
                submit_clarification(state, key, board, &params)
            })
        }
        ("POST", [dashboard, collection, "cancel"]) => {
            let key = review_key(dashboard, collection)?;
            let mut dashboards = state.dashboards()?;
            on_review_board!(dashboards, key, |board| cancel_clarification(key, board))
        }
        ("GET", [dashboard, collection, id]) => {
            let key = review_key(dashboard, collection)?;
            let id = parse_id(id)?;
            let mut dashboards = state.dashboards()?;
            on_review_board!(dashboards, key, |board| select_review(state, key, board, id))
        }
        ("POST", [dashboard, collection, id, "close"]) => {
            let key = review_key(dashboard, collection)?;
            let _ = parse_id(id)?;
            let mut dashboards = state.dashboards()?;
            on_review_board!(dashboards, key, |board| {
                board.presenter.close();
                redirect(key.path())
            })
        }
        ("POST", [dashboard, collection, id, "status"]) => {
            let key = review_key(dashboard, collection)?;
            let id = parse_id(id)?;
            let params = parse_form(req)?;
            let mut dashboards = state.dashboards()?;
            on_review_board!(dashboards, key, |board| {
                toggle_status(state, key, board, id, &params)
            })
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_id(raw: &str) -> Result<RecordId, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid id '{raw}'")))
}

fn review_key(dashboard: &str, collection: &str) -> Result<ReviewKey, ServerError> {
    ReviewKey::from_path(dashboard, collection).ok_or(ServerError::NotFound)
}

/// A search submit carries `q` and/or `status`; plain navigation keeps the
/// board's current query.
fn apply_query(query: &mut Query, params: &Params) {
    if params.contains_key("q") || params.contains_key("status") {
        *query = Query::new(text(params, "q"), text(params, "status"));
    }
}

// ---------------------------------------------------------------------------
// Home & notifications
// ---------------------------------------------------------------------------

fn home(state: &AppState) -> ResultResp {
    let open = state.notifications()?.notifications().len();
    html_response(home_page(open))
}

fn notifications(state: &AppState) -> ResultResp {
    let emitter = state.notifications()?;
    html_response(notifications_page(emitter.notifications()))
}

fn dismiss(state: &AppState, raw_id: &str) -> ResultResp {
    let id: u32 = raw_id
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid id '{raw_id}'")))?;
    if state.notifications()?.dismiss(id) {
        state.db.with_conn(|conn| dismiss_notification(conn, id))?;
    }
    redirect("/notifications")
}

// ---------------------------------------------------------------------------
// Company job postings
// ---------------------------------------------------------------------------

fn render_jobs(state: &AppState, draft: Option<&Params>) -> ResultResp {
    let dashboards = state.dashboards()?;
    let board = &dashboards.company_jobs;
    html_response(company_jobs_page(&JobsVm {
        query: &board.query,
        rows: board.visible(),
        detail: board.presenter.view(&board.store),
        draft,
    }))
}

fn company_jobs(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    apply_query(&mut state.dashboards()?.company_jobs.query, &params);
    render_jobs(state, None)
}

fn job_from_params(params: &Params) -> Result<JobPosting, ServerError> {
    let paid = flag(params, "paid");
    let mut job = JobPosting::draft(
        text(params, "title"),
        text(params, "company"),
        text(params, "category"),
    );
    job.duration = text(params, "duration");
    job.paid = Some(paid);
    job.salary = if paid { number(params, "salary")? } else { None };
    job.skills_required = field(params, "skills_required");
    job.description = field(params, "description");
    Ok(job)
}

fn create_job(req: Request, state: &AppState) -> ResultResp {
    let params = parse_form(req)?;
    let job = job_from_params(&params)?;
    let created = state.dashboards()?.company_jobs.store.create(job);
    match created {
        Some(id) => {
            tracing::info!(%id, "job posting created");
            redirect(&format!("/company/jobs/{id}/created"))
        }
        // Missing title/category: keep the form open with what was typed.
        None => render_jobs(state, Some(&params)),
    }
}

fn select_job(state: &AppState, id: RecordId, with_applicants: bool) -> ResultResp {
    {
        let mut dashboards = state.dashboards()?;
        let board = &mut dashboards.company_jobs;
        if board.store.get(id).is_none() {
            return Err(ServerError::NotFound);
        }
        if with_applicants {
            board.presenter.open_sub_records(id);
        } else {
            board.presenter.select(id);
        }
    }
    render_jobs(state, None)
}

fn close_job(state: &AppState, _id: RecordId) -> ResultResp {
    state.dashboards()?.company_jobs.presenter.close();
    redirect("/company/jobs")
}

fn close_applicants(state: &AppState, id: RecordId) -> ResultResp {
    state.dashboards()?.company_jobs.presenter.close_sub_records();
    redirect(&format!("/company/jobs/{id}"))
}

fn edit_job(req: Request, state: &AppState, id: RecordId) -> ResultResp {
    let params = parse_form(req)?;
    let paid = flag(&params, "paid");
    let patch = JobPatch {
        title: field(&params, "title"),
        company: field(&params, "company"),
        category: field(&params, "category"),
        duration: field(&params, "duration"),
        paid: Some(paid),
        salary: Some(if paid { number(&params, "salary")? } else { None }),
        skills_required: field(&params, "skills_required"),
        description: field(&params, "description"),
    };

    let mut dashboards = state.dashboards()?;
    let board = &mut dashboards.company_jobs;
    board.presenter.select(id);
    if !board.presenter.edit_selected(&mut board.store, patch) {
        board.presenter.close();
        return Err(ServerError::NotFound);
    }
    redirect(&format!("/company/jobs/{id}"))
}

fn delete_job(state: &AppState, id: RecordId) -> ResultResp {
    let mut dashboards = state.dashboards()?;
    let board = &mut dashboards.company_jobs;
    board.presenter.select(id);
    if board.presenter.delete_selected(&mut board.store) {
        tracing::info!(%id, "job posting deleted");
    }
    redirect("/company/jobs")
}

fn job_created(state: &AppState, id: RecordId) -> ResultResp {
    let dashboards = state.dashboards()?;
    let job = dashboards
        .company_jobs
        .store
        .get(id)
        .ok_or(ServerError::NotFound)?;
    html_response(job_created_page(job))
}

fn acknowledge(state: &AppState, id: RecordId) -> ResultResp {
    // Lock order: dashboards, then notifications.
    let mut dashboards = state.dashboards()?;
    let mut emitter = state.notifications()?;
    if emitter
        .acknowledge_created(&mut dashboards.company_jobs.store, id)
        .is_none()
    {
        return Err(ServerError::NotFound);
    }
    redirect("/company/jobs")
}

// ---------------------------------------------------------------------------
// Student views
// ---------------------------------------------------------------------------

fn student_jobs(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let mut guard = state.dashboards()?;
    let dashboards = &mut *guard;
    apply_query(&mut dashboards.student_jobs.query, &params);
    html_response(browse_page(
        "Browse internships",
        "/student/jobs",
        &dashboards.student_jobs.query,
        false,
        &dashboards.student_jobs.visible(&dashboards.company_jobs.store),
    ))
}

fn student_applications(req: &Request, state: &AppState) -> ResultResp {
    let params = parse_query(req);
    let mut guard = state.dashboards()?;
    let dashboards = &mut *guard;
    apply_query(&mut dashboards.student_applications.query, &params);
    html_response(browse_page(
        "My applications",
        "/student/applications",
        &dashboards.student_applications.query,
        true,
        &dashboards
            .student_applications
            .visible(&dashboards.company_applications.store),
    ))
}

// ---------------------------------------------------------------------------
// Review boards
// ---------------------------------------------------------------------------

fn render_review<T: Listing + Tabular>(
    state: &AppState,
    key: ReviewKey,
    board: &ReviewBoard<T>,
    draft: Option<(String, bool)>,
) -> ResultResp {
    let detail = board.presenter.view(&board.store);
    let history = match &detail {
        Some(d) => state
            .db
            .with_conn(|conn| history_for(conn, key.dashboard(), d.record.id().0))?,
        None => Vec::new(),
    };
    let (message, show_error) = draft.unwrap_or_default();
    let pending = board.engine.pending().and_then(|p| {
        board.store.get(p.id).map(|record| PendingVm {
            id: p.id,
            status: p.status,
            record_title: record.title(),
            message,
            show_error,
        })
    });

    html_response(review_page(&ReviewVm {
        key,
        query: &board.query,
        rows: board.visible(),
        detail,
        pending,
        history,
    }))
}

fn select_review<T: Listing + Tabular>(
    state: &AppState,
    key: ReviewKey,
    board: &mut ReviewBoard<T>,
    id: RecordId,
) -> ResultResp {
    if board.store.get(id).is_none() {
        return Err(ServerError::NotFound);
    }
    board.presenter.select(id);
    render_review(state, key, board, None)
}

/// Appends the committed transition of `id` to the status history.
fn record_transition<T: Listing>(
    state: &AppState,
    key: ReviewKey,
    board: &ReviewBoard<T>,
    id: RecordId,
    previous: Option<T::Status>,
) -> Result<(), ServerError> {
    let Some(record) = board.store.get(id) else {
        return Ok(());
    };
    let change = StatusChange {
        board: key.dashboard().to_string(),
        record_kind: T::KIND.to_string(),
        record_id: id.0,
        previous_status: previous.map(|s| s.label().to_string()),
        current_status: status_label(record.status()).to_string(),
        clarification: record.clarification().map(str::to_string),
        changed_at: Utc::now().naive_utc(),
    };
    state.db.with_conn(|conn| record_change(conn, &change))?;
    tracing::debug!(
        board = key.dashboard(),
        record = %id,
        revision = board.store.revision(),
        "status history recorded"
    );
    Ok(())
}

fn toggle_status<T: Listing + Tabular>(
    state: &AppState,
    key: ReviewKey,
    board: &mut ReviewBoard<T>,
    id: RecordId,
    params: &Params,
) -> ResultResp {
    let slug = field(params, "status")
        .ok_or_else(|| ServerError::BadRequest("missing status".into()))?;
    let status = T::Status::from_slug(&slug)
        .ok_or_else(|| ServerError::BadRequest(format!("unknown status '{slug}'")))?;

    let previous = board.store.get(id).and_then(|r| r.status());
    match board.engine.toggle(&mut board.store, id, status) {
        Transition::Applied { .. } | Transition::Cleared { .. } => {
            record_transition(state, key, board, id, previous)?;
            redirect(&format!("{}/{id}", key.path()))
        }
        Transition::AwaitingClarification { .. } => {
            board.presenter.select(id);
            render_review(state, key, board, None)
        }
        // The dialog is still open; show it again.
        Transition::Blocked => render_review(state, key, board, None),
        Transition::Ignored => Err(ServerError::NotFound),
    }
}

fn submit_clarification<T: Listing + Tabular>(
    state: &AppState,
    key: ReviewKey,
    board: &mut ReviewBoard<T>,
    params: &Params,
) -> ResultResp {
    let Some(pending) = board.engine.pending() else {
        return redirect(key.path());
    };
    let message = params.get("message").cloned().unwrap_or_default();
    let Some(clarification) = Clarification::new(message.clone()) else {
        return render_review(state, key, board, Some((message, true)));
    };

    let previous = board.store.get(pending.id).and_then(|r| r.status());
    match board.engine.submit(&mut board.store, clarification) {
        Transition::Applied { id, .. } => {
            record_transition(state, key, board, id, previous)?;
            redirect(&format!("{}/{id}", key.path()))
        }
        _ => redirect(key.path()),
    }
}

fn cancel_clarification<T: Listing>(key: ReviewKey, board: &mut ReviewBoard<T>) -> ResultResp {
    board.engine.cancel();
    match board.presenter.selected() {
        Some(id) => redirect(&format!("{}/{id}", key.path())),
        None => redirect(key.path()),
    }
}
