use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::accounts::controllers::account_controller::parse_region;
use crate::modules::records::models::{CreateRecordRequest, UpdateRecordRequest};
use crate::modules::store::RegionStore;

/// List a region's revenue records, newest first
/// GET /regions/{region}/records
pub async fn list_records(
    store: web::Data<dyn RegionStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let region = parse_region(&path)?;
    let records = store.list_records(region).await?;

    Ok(HttpResponse::Ok().json(records))
}

/// Create a revenue record
/// POST /regions/{region}/records
pub async fn create_record(
    store: web::Data<dyn RegionStore>,
    path: web::Path<String>,
    request: web::Json<CreateRecordRequest>,
) -> Result<HttpResponse, AppError> {
    let region = parse_region(&path)?;
    let record = store.create_record(region, request.into_inner()).await?;

    Ok(HttpResponse::Created().json(record))
}

/// Partially update a record
/// PUT /regions/{region}/records/{id}
pub async fn update_record(
    store: web::Data<dyn RegionStore>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateRecordRequest>,
) -> Result<HttpResponse, AppError> {
    let (region, id) = path.into_inner();
    let region = parse_region(&region)?;
    let record = store
        .update_record(region, &id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(record))
}

/// Delete a record
/// DELETE /regions/{region}/records/{id}
pub async fn delete_record(
    store: web::Data<dyn RegionStore>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (region, id) = path.into_inner();
    let region = parse_region(&region)?;
    store.delete_record(region, &id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Timestamp of the most recent record change in a region
/// GET /regions/{region}/records/last-update
pub async fn last_update(
    store: web::Data<dyn RegionStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let region = parse_region(&path)?;
    let last_update = store.last_update_time(region).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "last_update": last_update,
    })))
}

/// Configure record routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/regions/{region}/records")
            .route("", web::get().to(list_records))
            .route("", web::post().to(create_record))
            .route("/last-update", web::get().to(last_update))
            .route("/{id}", web::put().to(update_record))
            .route("/{id}", web::delete().to(delete_record)),
    );
}
