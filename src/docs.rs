use crate::model::employee::{CreateEmployee, Employee};
use crate::model::leave_request::{
    CreateLeave, LeaveDecision, LeaveFilter, LeaveRequest, LeaveRequestWithDecision, LeaveStatus,
};
use crate::utils::validation::FieldError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Management System",
        version = "1.0.0",
        description = r#"
## Leave Management System

Track employees and their leave requests.

### 🔹 Key Features
- **Employees**: register and list employees
- **Leave requests**: submit, list, filter by employee or status, and view
- **Decisions**: approve or reject a request with a reviewer and comment

### 📦 Response Format
- JSON responses; dates are `YYYY-MM-DD`
- Validation failures return `422` with per-field errors

---
Built with **Rust**, **Actix Web**, **Serde**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,

        crate::api::leave_request::create_leave,
        crate::api::leave_request::leave_list,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::decide_leave,

        crate::api::health::health_check
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            CreateLeave,
            LeaveRequest,
            LeaveRequestWithDecision,
            LeaveDecision,
            LeaveStatus,
            LeaveFilter,
            FieldError
        )
    ),
    tags(
        (name = "Employee", description = "Employee registry"),
        (name = "Leave", description = "Leave request APIs"),
        (name = "Health", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/employees",
            "/leave-requests",
            "/leave-requests/{leave_id}",
            "/leave-requests/{leave_id}/decision",
            "/health",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
        assert_eq!(doc.info.title, "Leave Management System");
    }
}
