//! HTTP handlers for weather statistics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use shared::{parse_calendar_component, validate_day, validate_month, City, WeatherStatistics};

use crate::error::{AppError, AppResult};
use crate::services::{CatalogService, WeatherService};
use crate::AppState;

/// Query parameters for the statistics endpoint.
///
/// Kept as raw strings so missing and malformed values get their own errors.
#[derive(Debug, Deserialize)]
pub struct StatisticsQuery {
    pub city: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

/// Validated form of [`StatisticsQuery`]
#[derive(Debug, PartialEq, Eq)]
pub struct StatisticsRequest {
    pub city: String,
    pub month: u32,
    pub day: u32,
}

impl StatisticsQuery {
    pub fn validate(self) -> AppResult<StatisticsRequest> {
        let present = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let (city, month, day) = match (present(self.city), present(self.month), present(self.day)) {
            (Some(city), Some(month), Some(day)) => (city, month, day),
            _ => {
                return Err(AppError::ValidationError(
                    "Missing required parameters: city, month, day".to_string(),
                ))
            }
        };

        let month = parse_calendar_component(&month)
            .map_err(|msg| AppError::field("month", msg, "월 또는 일 형식이 올바르지 않습니다"))?;
        let day = parse_calendar_component(&day)
            .map_err(|msg| AppError::field("day", msg, "월 또는 일 형식이 올바르지 않습니다"))?;

        let month = validate_month(month)
            .map_err(|msg| AppError::field("month", msg, "월은 1에서 12 사이여야 합니다"))?;
        let day = validate_day(day)
            .map_err(|msg| AppError::field("day", msg, "일은 1에서 31 사이여야 합니다"))?;

        Ok(StatisticsRequest {
            city: city.trim().to_string(),
            month,
            day,
        })
    }
}

/// Same-day statistics across every year of a city's archive
pub async fn get_weather_statistics(
    State(state): State<AppState>,
    Query(query): Query<StatisticsQuery>,
) -> AppResult<Json<WeatherStatistics>> {
    let request = query.validate()?;
    let service = WeatherService::new(state.archives.clone());
    let statistics = service
        .get_statistics(&request.city, request.month, request.day)
        .await?;
    Ok(Json(statistics))
}

#[derive(Debug, Serialize)]
pub struct CityListResponse {
    pub cities: Vec<City>,
}

/// List available cities
pub async fn list_cities(State(state): State<AppState>) -> AppResult<Json<CityListResponse>> {
    let service = CatalogService::new(state.archives.clone());
    let cities = service.list_cities().await?;
    Ok(Json(CityListResponse { cities }))
}
