//! Daily weather archive models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::DateRange;

/// All daily observations for one city, roughly a decade of them.
///
/// Produced offline and read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityArchive {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_korean: Option<String>,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default)]
    pub source: String,
    pub range: DateRange,
    pub daily: Vec<DailyRecord>,
}

/// One calendar day of observations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    #[serde(rename = "temp")]
    pub temperature: DailyTemperature,
    pub humidity: f64,
    pub precipitation_mm: f64,
    pub weather: WeatherCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_detail: Option<WeatherDetail>,
}

/// Daily temperature readings in degrees Celsius
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyTemperature {
    pub max: f64,
    pub min: f64,
    pub avg: f64,
}

/// Condition code plus its display label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherCondition {
    pub code: i32,
    pub label: String,
}

/// Intra-day breakdown attached to newer archives. Display only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherDetail {
    pub period_summary: PeriodSummary,
    pub rain_info: Option<RainInfo>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeriodSummary {
    pub dawn: String,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
}

/// Rain window within the day, hours in 0-23
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainInfo {
    pub hours: u32,
    pub start_hour: u32,
    pub end_hour: u32,
}

/// Coarse weather category derived from a condition code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
}

/// Map a condition code onto a category.
///
/// Checks run in this order and the first hit wins. Codes 4-50, 68-70,
/// 78-79, 83-84 and 87+ fall through to cloudy. Negative codes never reach
/// the fallback because `code <= 1` is tested first.
pub fn categorize_weather(code: i32) -> WeatherCategory {
    if code <= 1 {
        return WeatherCategory::Clear;
    }
    if code <= 3 {
        return WeatherCategory::Cloudy;
    }
    if (71..=77).contains(&code) {
        return WeatherCategory::Snow;
    }
    if (85..=86).contains(&code) {
        return WeatherCategory::Snow;
    }
    if (51..=67).contains(&code) {
        return WeatherCategory::Rain;
    }
    if (80..=82).contains(&code) {
        return WeatherCategory::Rain;
    }
    WeatherCategory::Cloudy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_archive_json() {
        let json = r#"{
            "city": "Seoul",
            "country": "KR",
            "lat": 37.5665,
            "lon": 126.978,
            "source": "open-meteo",
            "range": { "start": "2015-01-01", "end": "2024-12-31" },
            "daily": [{
                "date": "2016-03-05",
                "temp": { "max": 10.0, "min": 2.0, "avg": 6.0 },
                "humidity": 40,
                "precipitation_mm": 0,
                "weather": { "code": 0, "label": "맑음" }
            }]
        }"#;

        let archive: CityArchive = serde_json::from_str(json).unwrap();
        assert_eq!(archive.city, "Seoul");
        assert!(archive.city_korean.is_none());
        assert_eq!(archive.daily.len(), 1);
        assert_eq!(archive.daily[0].temperature.max, 10.0);
        assert_eq!(archive.daily[0].weather.code, 0);
        assert!(archive.daily[0].weather_detail.is_none());
    }

    #[test]
    fn parses_weather_detail() {
        let json = r#"{
            "date": "2019-07-14",
            "temp": { "max": 29.1, "min": 22.4, "avg": 25.3 },
            "humidity": 88.5,
            "precipitation_mm": 14.2,
            "weather": { "code": 63, "label": "비" },
            "weather_detail": {
                "period_summary": { "dawn": "흐림", "morning": "비", "afternoon": "비", "evening": "흐림" },
                "rain_info": { "hours": 6, "start_hour": 8, "end_hour": 14 },
                "summary": "오전부터 비"
            }
        }"#;

        let record: DailyRecord = serde_json::from_str(json).unwrap();
        let detail = record.weather_detail.unwrap();
        assert_eq!(detail.rain_info.unwrap().hours, 6);
        assert_eq!(detail.period_summary.morning, "비");
    }

    #[test]
    fn rejects_malformed_date() {
        let json = r#"{
            "date": "2019-13-40",
            "temp": { "max": 1, "min": 0, "avg": 0.5 },
            "humidity": 50,
            "precipitation_mm": 0,
            "weather": { "code": 0, "label": "" }
        }"#;
        assert!(serde_json::from_str::<DailyRecord>(json).is_err());
    }

    #[test]
    fn categorize_boundaries() {
        assert_eq!(categorize_weather(0), WeatherCategory::Clear);
        assert_eq!(categorize_weather(1), WeatherCategory::Clear);
        assert_eq!(categorize_weather(2), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(3), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(4), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(50), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(51), WeatherCategory::Rain);
        assert_eq!(categorize_weather(67), WeatherCategory::Rain);
        assert_eq!(categorize_weather(68), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(70), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(71), WeatherCategory::Snow);
        assert_eq!(categorize_weather(77), WeatherCategory::Snow);
        assert_eq!(categorize_weather(78), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(79), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(80), WeatherCategory::Rain);
        assert_eq!(categorize_weather(82), WeatherCategory::Rain);
        assert_eq!(categorize_weather(83), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(84), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(85), WeatherCategory::Snow);
        assert_eq!(categorize_weather(86), WeatherCategory::Snow);
        assert_eq!(categorize_weather(87), WeatherCategory::Cloudy);
        assert_eq!(categorize_weather(99), WeatherCategory::Cloudy);
    }

    #[test]
    fn negative_codes_are_clear() {
        // `code <= 1` is checked first, so negatives land in clear
        assert_eq!(categorize_weather(-1), WeatherCategory::Clear);
        assert_eq!(categorize_weather(-10), WeatherCategory::Clear);
    }
}
