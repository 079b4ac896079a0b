//! Same-day-across-years weather statistics

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::weather::{categorize_weather, CityArchive, DailyRecord, WeatherCategory};
use crate::types::MonthDay;

/// Errors from the aggregation step
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("No data found for {month}-{day}")]
    NoData { month: u32, day: u32 },
}

/// Highest, lowest and mean over a sample
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TempStat {
    pub highest: f64,
    pub lowest: f64,
    pub average: f64,
}

impl TempStat {
    /// Summarize `values`. An empty slice yields all zeros.
    ///
    /// The mean is kept inside `[lowest, highest]`; summing identical values
    /// can otherwise round one ulp past the extremes.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let highest = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lowest = values.iter().copied().fold(f64::INFINITY, f64::min);
        let average = (values.iter().sum::<f64>() / values.len() as f64)
            .max(lowest)
            .min(highest);

        Self {
            highest,
            lowest,
            average,
        }
    }
}

/// Precipitation has no useful minimum, so only highest and mean are kept
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PrecipitationStat {
    pub highest: f64,
    pub average: f64,
}

impl PrecipitationStat {
    pub fn from_values(values: &[f64]) -> Self {
        let stat = TempStat::from_values(values);
        Self {
            highest: stat.highest,
            average: stat.average,
        }
    }
}

/// Count of matched days per weather category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WeatherFrequency {
    pub clear: u32,
    pub cloudy: u32,
    pub rain: u32,
    pub snow: u32,
}

impl WeatherFrequency {
    pub fn record(&mut self, category: WeatherCategory) {
        match category {
            WeatherCategory::Clear => self.clear += 1,
            WeatherCategory::Cloudy => self.cloudy += 1,
            WeatherCategory::Rain => self.rain += 1,
            WeatherCategory::Snow => self.snow += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.clear + self.cloudy + self.rain + self.snow
    }
}

/// Statistics per daily temperature field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureStatistics {
    pub max: TempStat,
    pub min: TempStat,
    pub avg: TempStat,
}

/// The rolled-up numbers for one target date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub weather_frequency: WeatherFrequency,
    pub temperature: TemperatureStatistics,
    pub humidity: TempStat,
    pub precipitation: PrecipitationStat,
}

/// Result of aggregating one city's archive for one month-day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherStatistics {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_korean: Option<String>,
    pub country: String,
    /// `MM-DD`
    #[serde(rename = "date")]
    pub target_date: String,
    pub statistics: StatisticsSummary,
    /// Matched days, oldest first
    #[serde(rename = "yearlyData")]
    pub matched_records: Vec<DailyRecord>,
}

/// Aggregate every record in `archive` that falls on `month`-`day`.
///
/// Range checks on `month` and `day` belong to the caller; out-of-range or
/// impossible dates simply match nothing and return [`StatisticsError::NoData`].
pub fn aggregate(
    archive: &CityArchive,
    month: u32,
    day: u32,
) -> Result<WeatherStatistics, StatisticsError> {
    let target = MonthDay::new(month, day);

    let mut matched: Vec<DailyRecord> = archive
        .daily
        .iter()
        .filter(|record| target.matches(&record.date))
        .cloned()
        .collect();

    if matched.is_empty() {
        return Err(StatisticsError::NoData { month, day });
    }

    matched.sort_by_key(|record| record.date);

    let mut weather_frequency = WeatherFrequency::default();
    for record in &matched {
        weather_frequency.record(categorize_weather(record.weather.code));
    }

    let temperature = TemperatureStatistics {
        max: TempStat::from_values(&sample(&matched, |r| r.temperature.max)),
        min: TempStat::from_values(&sample(&matched, |r| r.temperature.min)),
        avg: TempStat::from_values(&sample(&matched, |r| r.temperature.avg)),
    };
    let humidity = TempStat::from_values(&sample(&matched, |r| r.humidity));
    let precipitation = PrecipitationStat::from_values(&sample(&matched, |r| r.precipitation_mm));

    Ok(WeatherStatistics {
        city: archive.city.clone(),
        city_korean: archive.city_korean.clone(),
        country: archive.country.clone(),
        target_date: target.to_string(),
        statistics: StatisticsSummary {
            weather_frequency,
            temperature,
            humidity,
            precipitation,
        },
        matched_records: matched,
    })
}

fn sample(records: &[DailyRecord], field: impl Fn(&DailyRecord) -> f64) -> Vec<f64> {
    records.iter().map(field).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather::{DailyTemperature, WeatherCondition};
    use crate::types::DateRange;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(d: &str, code: i32, temp: (f64, f64, f64), humidity: f64, precip: f64) -> DailyRecord {
        DailyRecord {
            date: date(d),
            temperature: DailyTemperature {
                max: temp.0,
                min: temp.1,
                avg: temp.2,
            },
            humidity,
            precipitation_mm: precip,
            weather: WeatherCondition {
                code,
                label: String::new(),
            },
            weather_detail: None,
        }
    }

    fn archive(daily: Vec<DailyRecord>) -> CityArchive {
        CityArchive {
            city: "Seoul".to_string(),
            city_korean: Some("서울".to_string()),
            country: "KR".to_string(),
            lat: None,
            lon: None,
            source: "test".to_string(),
            range: DateRange {
                start: date("2015-01-01"),
                end: date("2024-12-31"),
            },
            daily,
        }
    }

    #[test]
    fn temp_stat_empty_is_zeroed() {
        let stat = TempStat::from_values(&[]);
        assert_eq!(stat, TempStat { highest: 0.0, lowest: 0.0, average: 0.0 });
        assert!(!stat.average.is_nan());
    }

    #[test]
    fn temp_stat_single_value() {
        let stat = TempStat::from_values(&[-3.5]);
        assert_eq!(stat.highest, -3.5);
        assert_eq!(stat.lowest, -3.5);
        assert_eq!(stat.average, -3.5);
    }

    #[test]
    fn precipitation_has_no_lowest() {
        let stat = PrecipitationStat::from_values(&[0.0, 3.0, 9.0]);
        assert_eq!(stat.highest, 9.0);
        assert_eq!(stat.average, 4.0);
        let json = serde_json::to_value(stat).unwrap();
        assert!(json.get("lowest").is_none());
    }

    #[test]
    fn aggregate_march_fifth_example() {
        let archive = archive(vec![
            record("2016-03-05", 0, (10.0, 2.0, 6.0), 40.0, 0.0),
            record("2017-03-05", 61, (8.0, 1.0, 4.5), 70.0, 12.3),
            record("2018-03-05", 2, (12.0, 3.0, 7.5), 55.0, 0.0),
            record("2018-03-06", 71, (1.0, -4.0, -1.5), 90.0, 5.0),
        ]);

        let stats = aggregate(&archive, 3, 5).unwrap();
        let summary = &stats.statistics;

        assert_eq!(stats.target_date, "03-05");
        assert_eq!(
            summary.weather_frequency,
            WeatherFrequency { clear: 1, cloudy: 1, rain: 1, snow: 0 }
        );
        assert_eq!(summary.temperature.max.highest, 12.0);
        assert_eq!(summary.temperature.max.lowest, 8.0);
        assert_eq!(summary.temperature.max.average, 10.0);
        assert_eq!(summary.humidity.highest, 70.0);
        assert_eq!(summary.humidity.lowest, 40.0);
        assert_eq!(summary.precipitation.highest, 12.3);
        assert!((summary.precipitation.average - 4.1).abs() < 1e-9);
        assert_eq!(stats.matched_records.len(), 3);
    }

    #[test]
    fn aggregate_sorts_matches_by_date() {
        let archive = archive(vec![
            record("2020-07-01", 0, (30.0, 22.0, 26.0), 60.0, 0.0),
            record("2016-07-01", 0, (28.0, 21.0, 24.5), 65.0, 0.0),
            record("2018-07-01", 0, (31.0, 23.0, 27.0), 70.0, 0.0),
        ]);

        let stats = aggregate(&archive, 7, 1).unwrap();
        let dates: Vec<_> = stats.matched_records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date("2016-07-01"), date("2018-07-01"), date("2020-07-01")]);
    }

    #[test]
    fn aggregate_no_match_is_error() {
        let archive = archive(vec![record("2016-02-28", 0, (5.0, 0.0, 2.5), 50.0, 0.0)]);
        assert_eq!(
            aggregate(&archive, 2, 30),
            Err(StatisticsError::NoData { month: 2, day: 30 })
        );
        assert_eq!(
            aggregate(&archive, 13, 1),
            Err(StatisticsError::NoData { month: 13, day: 1 })
        );
    }

    #[test]
    fn aggregate_copies_city_metadata() {
        let archive = archive(vec![record("2016-01-01", 73, (0.0, -5.0, -2.5), 80.0, 3.0)]);
        let stats = aggregate(&archive, 1, 1).unwrap();
        assert_eq!(stats.city, "Seoul");
        assert_eq!(stats.city_korean.as_deref(), Some("서울"));
        assert_eq!(stats.country, "KR");
        assert_eq!(stats.statistics.weather_frequency.snow, 1);
    }

    #[test]
    fn serializes_wire_shape() {
        let archive = archive(vec![record("2016-03-05", 0, (10.0, 2.0, 6.0), 40.0, 0.0)]);
        let json = serde_json::to_value(aggregate(&archive, 3, 5).unwrap()).unwrap();

        assert_eq!(json["date"], "03-05");
        assert_eq!(json["cityKorean"], "서울");
        assert_eq!(json["statistics"]["weatherFrequency"]["clear"], 1);
        assert_eq!(json["statistics"]["temperature"]["max"]["highest"], 10.0);
        assert_eq!(json["yearlyData"][0]["date"], "2016-03-05");
        assert_eq!(json["yearlyData"][0]["temp"]["avg"], 6.0);
    }
}
