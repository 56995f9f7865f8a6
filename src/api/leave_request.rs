use super::{error::ApiError, lock};
use crate::db::SharedStore;
use crate::model::leave_request::{
    CreateLeave, LeaveDecision, LeaveFilter, LeaveRequest, LeaveRequestWithDecision,
};
use actix_web::{HttpResponse, Responder, web};
use tracing::{info, warn};

/* =========================
Submit leave request
========================= */
/// Submit a leave request for an employee
#[utoipa::path(
    post,
    path = "/leave-requests",
    request_body(
        content = CreateLeave,
        description = "Leave request payload",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request submitted", body = LeaveRequest),
        (status = 400, description = "Employee does not exist", body = Object, example = json!({
            "message": "Employee 999 does not exist"
        })),
        (status = 422, description = "Validation failed")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    store: SharedStore,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder, ApiError> {
    let new = payload.into_inner().validate().inspect_err(|e| {
        warn!(error = %e, "Rejected leave payload");
    })?;
    let employee_id = new.employee_id;

    let created = lock(&store)?.create_leave_request(new).inspect_err(|e| {
        warn!(error = %e, employee_id, "Leave request not stored");
    })?;
    info!(leave_id = created.id, employee_id, "Leave request submitted");

    Ok(HttpResponse::Created().json(created))
}

/// List leave requests, optionally filtered by employee or status
#[utoipa::path(
    get,
    path = "/leave-requests",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Matching leave requests in submission order", body = Vec<LeaveRequestWithDecision>),
        (status = 422, description = "Malformed query")
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    store: SharedStore,
    query: web::Query<LeaveFilter>,
) -> actix_web::Result<impl Responder, ApiError> {
    let leaves = lock(&store)?.list_leave_requests(&query);
    Ok(HttpResponse::Ok().json(leaves))
}

/// Retrieve a single leave request
#[utoipa::path(
    get,
    path = "/leave-requests/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveRequestWithDecision),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    store: SharedStore,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder, ApiError> {
    let leave_id = path.into_inner();

    let store = lock(&store)?;
    let leave = store
        .get_leave_request(leave_id)
        .ok_or(ApiError::LeaveRequestNotFound)?;

    Ok(HttpResponse::Ok().json(leave))
}

/* =========================
Approve / reject
========================= */
/// Record an approve or reject decision
#[utoipa::path(
    post,
    path = "/leave-requests/{leave_id}/decision",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to decide")
    ),
    request_body = LeaveDecision,
    responses(
        (status = 200, description = "Decision recorded", body = LeaveRequestWithDecision),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "Leave request 42 does not exist"
        })),
        (status = 422, description = "Status is not approved or rejected")
    ),
    tag = "Leave"
)]
pub async fn decide_leave(
    store: SharedStore,
    path: web::Path<u64>,
    payload: web::Json<LeaveDecision>,
) -> actix_web::Result<impl Responder, ApiError> {
    let leave_id = path.into_inner();

    let decision = payload.into_inner().validate().inspect_err(|e| {
        warn!(error = %e, leave_id, "Rejected decision payload");
    })?;
    let status = decision.status;

    let updated = lock(&store)?.apply_decision(leave_id, decision)?;
    info!(leave_id, status = %status, reviewer = ?updated.reviewer, "Leave decided");

    Ok(HttpResponse::Ok().json(updated))
}
