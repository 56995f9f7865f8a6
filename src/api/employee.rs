use super::{error::ApiError, lock};
use crate::db::SharedStore;
use crate::model::employee::{CreateEmployee, Employee};
use actix_web::{HttpResponse, Responder, web};
use tracing::{info, warn};

/// Register a new employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 422, description = "Validation failed", body = Object, example = json!({
            "message": "Validation failed",
            "errors": [{"field": "name", "message": "Employee name cannot be empty"}]
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: SharedStore,
    payload: web::Json<CreateEmployee>,
) -> actix_web::Result<impl Responder, ApiError> {
    let new = payload.into_inner().validate().inspect_err(|e| {
        warn!(error = %e, "Rejected employee payload");
    })?;

    let employee = lock(&store)?.create_employee(new)?;
    info!(employee_id = employee.id, "Employee created");

    Ok(HttpResponse::Created().json(employee))
}

/// Return all registered employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees in registration order", body = Vec<Employee>)
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: SharedStore) -> actix_web::Result<impl Responder, ApiError> {
    let store = lock(&store)?;
    Ok(HttpResponse::Ok().json(store.list_employees()))
}
