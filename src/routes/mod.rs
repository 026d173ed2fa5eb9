use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::provider::TextProvider;
use crate::services::ServiceError;

pub mod api;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Uniform `{ "error": message }` response for any gateway failure.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorBody {
        error: err.public_message(),
    })
}

/// Register every gateway route. `P` is the provider stored in app data.
pub fn configure<P>(cfg: &mut web::ServiceConfig)
where
    P: TextProvider + 'static,
{
    cfg.app_data(api::json_config())
        .service(
            web::resource("/api/generate")
                .route(web::post().to(api::generate::<P>))
                .default_service(web::to(api::method_not_allowed)),
        )
        .service(api::categories);
}
