use actix_web::{web, HttpResponse};

use crate::core::{AppError, Region};
use crate::modules::accounts::models::{CreateAccountRequest, UpdateAccountRequest};
use crate::modules::store::RegionStore;

/// List a region's accounts
/// GET /regions/{region}/accounts
pub async fn list_accounts(
    store: web::Data<dyn RegionStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let region = parse_region(&path)?;
    let accounts = store.list_accounts(region).await?;

    Ok(HttpResponse::Ok().json(accounts))
}

/// Create an account
/// POST /regions/{region}/accounts
pub async fn create_account(
    store: web::Data<dyn RegionStore>,
    path: web::Path<String>,
    request: web::Json<CreateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    let region = parse_region(&path)?;
    let request = request.into_inner();

    if request.account_id.trim().is_empty() {
        return Err(AppError::validation("account_id cannot be empty"));
    }

    let account = store
        .create_account(region, &request.account_id, request.name.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(account))
}

/// Rename an account
/// PUT /regions/{region}/accounts/{account_id}
pub async fn update_account(
    store: web::Data<dyn RegionStore>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    let (region, account_id) = path.into_inner();
    let region = parse_region(&region)?;
    let account = store
        .update_account(region, &account_id, &request.name)
        .await?;

    Ok(HttpResponse::Ok().json(account))
}

/// Delete an account; refused while records still reference it
/// DELETE /regions/{region}/accounts/{account_id}
pub async fn delete_account(
    store: web::Data<dyn RegionStore>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (region, account_id) = path.into_inner();
    let region = parse_region(&region)?;
    store.delete_account(region, &account_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

pub(crate) fn parse_region(value: &str) -> Result<Region, AppError> {
    value.parse().map_err(AppError::Validation)
}

/// Configure account routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/regions/{region}/accounts")
            .route("", web::get().to(list_accounts))
            .route("", web::post().to(create_account))
            .route("/{account_id}", web::put().to(update_account))
            .route("/{account_id}", web::delete().to(delete_account)),
    );
}
