use crate::api::{employee, health, leave_request};
use actix_web::{
    HttpResponse,
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    web,
};
use serde_json::json;
use tracing::warn;

/// Malformed bodies, queries and path segments are client errors with a 422,
/// matching how validation failures are reported.
fn unprocessable(err: impl std::fmt::Display + std::fmt::Debug + 'static) -> actix_web::Error {
    let message = err.to_string();
    warn!(error = %message, "Rejected malformed request");
    InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(json!({ "message": message })),
    )
    .into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err: JsonPayloadError, _| unprocessable(err)))
        .app_data(web::QueryConfig::default().error_handler(|err: QueryPayloadError, _| unprocessable(err)))
        .app_data(web::PathConfig::default().error_handler(|err: PathError, _| unprocessable(err)));

    cfg.service(web::resource("/health").route(web::get().to(health::health_check)));

    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            ),
    );

    cfg.service(
        web::scope("/leave-requests")
            // /leave-requests
            .service(
                web::resource("")
                    .route(web::get().to(leave_request::leave_list))
                    .route(web::post().to(leave_request::create_leave)),
            )
            // /leave-requests/{id}
            .service(web::resource("/{id}").route(web::get().to(leave_request::get_leave)))
            // /leave-requests/{id}/decision
            .service(
                web::resource("/{id}/decision")
                    .route(web::post().to(leave_request::decide_leave)),
            ),
    );
}
