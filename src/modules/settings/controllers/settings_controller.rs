use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::settings::models::UpdateExchangeRateRequest;
use crate::modules::settings::repositories::SettingsRepository;

/// Fetch the settings singleton (self-healing)
/// GET /settings
pub async fn get_settings(
    repository: web::Data<SettingsRepository>,
) -> Result<HttpResponse, AppError> {
    let settings = repository.get_or_create().await?;

    Ok(HttpResponse::Ok().json(settings))
}

/// Update the base exchange rate
/// PUT /settings/exchange-rate
pub async fn update_exchange_rate(
    repository: web::Data<SettingsRepository>,
    request: web::Json<UpdateExchangeRateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let updated_by = request.updated_by.as_deref().unwrap_or("Admin");
    let settings = repository
        .update_exchange_rate(request.exchange_rate, updated_by)
        .await?;

    Ok(HttpResponse::Ok().json(settings))
}

/// Configure settings routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/settings")
            .route("", web::get().to(get_settings))
            .route("/exchange-rate", web::put().to(update_exchange_rate)),
    );
}
