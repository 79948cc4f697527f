use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::core::{AppError, CrossRates, Region};
use crate::modules::dashboard::models::{
    AccountFilter, DateFilter, DateRange, RecordFilter, StatusFilter,
};
use crate::modules::dashboard::services::{
    calculate_bonus_totals, calculate_consolidated_totals, calculate_totals, filter_records,
    prepare_chart_data, prepare_chart_data_by_date, DashboardService,
};
use crate::modules::settings::repositories::SettingsRepository;

/// Query parameters for the dashboard view
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// `"all"` or an exact account id
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default, rename = "dateFilter")]
    pub date_filter: DateFilter,
    /// Custom range bounds (both required for the range to apply)
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub bucketing: Bucketing,
}

/// Chart bucketing mode. `Day` is the historical day-of-month grouping;
/// `Date` keeps different months apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucketing {
    #[default]
    Day,
    Date,
}

impl DashboardQuery {
    fn record_filter(&self) -> RecordFilter {
        RecordFilter {
            account: AccountFilter::parse(self.account.as_deref()),
            status: self.status,
            date: self.date_filter,
            range: DateRange {
                from: self.from,
                to: self.to,
            },
        }
    }
}

/// The dashboard view for one region or for the consolidated scope
/// GET /dashboard/{scope}  where scope is usa | uk | ale | geral
pub async fn get_dashboard(
    service: web::Data<DashboardService>,
    settings_repository: web::Data<SettingsRepository>,
    path: web::Path<String>,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let scope = path.into_inner();
    let filter = query.record_filter();
    // Date windows shift at midnight; evaluate against the request moment.
    let today = Utc::now().date_naive();

    let settings = settings_repository.get_or_create().await?;

    if scope == "geral" {
        let data = service.load_consolidated().await?;
        let filtered = filter_records(&data.records, &data.accounts, &filter, today);

        let totals =
            calculate_consolidated_totals(&filtered, &filter.account, settings.exchange_rate);
        let rates = CrossRates::from_base(settings.exchange_rate);
        let chart = chart_json(&filtered, Some(&rates), query.bucketing);

        return Ok(HttpResponse::Ok().json(serde_json::json!({
            "scope": "geral",
            "exchange_rate": settings.exchange_rate,
            "accounts": data.accounts,
            "records": filtered,
            "totals": totals,
            "chart": chart,
        })));
    }

    let region: Region = scope.parse().map_err(AppError::Validation)?;
    let data = service.load_region(region).await?;
    let filtered = filter_records(&data.records, &data.accounts, &filter, today);

    let totals = calculate_totals(&filtered, &filter.account, region);
    let bonus = calculate_bonus_totals(&filtered, region);
    let chart = chart_json(&filtered, None, query.bucketing);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "scope": region,
        "exchange_rate": settings.exchange_rate,
        "accounts": data.accounts,
        "records": filtered,
        "totals": totals,
        "bonus": bonus,
        "chart": chart,
    })))
}

fn chart_json(
    records: &[crate::modules::records::models::RevenueRecord],
    rates: Option<&CrossRates>,
    bucketing: Bucketing,
) -> serde_json::Value {
    match bucketing {
        Bucketing::Day => serde_json::json!(prepare_chart_data(records, rates)),
        Bucketing::Date => serde_json::json!(prepare_chart_data_by_date(records, rates)),
    }
}

/// Configure dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard").route("/{scope}", web::get().to(get_dashboard)),
    );
}
