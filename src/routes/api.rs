use actix_web::error::InternalError;
use actix_web::{HttpResponse, Responder, get, web};

use crate::domain::category::ContentCategory;
use crate::forms::generate::GenerateForm;
use crate::provider::{ProviderCredentials, TextProvider};
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::generate::generate as generate_service;

/// JSON extractor settings: malformed bodies get the uniform error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected generate request body: {err}");
        let response = error_response(&ServiceError::Validation(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}

pub async fn generate<P>(
    web::Json(form): web::Json<GenerateForm>,
    credentials: web::Data<ProviderCredentials>,
    provider: web::Data<P>,
) -> impl Responder
where
    P: TextProvider + 'static,
{
    match generate_service(form, credentials.get_ref(), provider.get_ref()).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(err) => error_response(&err),
    }
}

pub async fn method_not_allowed() -> impl Responder {
    error_response(&ServiceError::MethodNotAllowed)
}

/// Selectable category labels in display order.
#[get("/api/categories")]
pub async fn categories() -> impl Responder {
    let labels: Vec<&str> = ContentCategory::ALL.iter().map(|c| c.label()).collect();
    HttpResponse::Ok().json(labels)
}
