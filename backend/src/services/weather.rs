//! Weather statistics service

use std::sync::Arc;

use shared::{aggregate, WeatherStatistics};

use crate::error::AppResult;
use crate::services::archive::ArchiveStore;

/// Answers "what is this date usually like in this city"
#[derive(Clone)]
pub struct WeatherService {
    store: Arc<ArchiveStore>,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(store: Arc<ArchiveStore>) -> Self {
        Self { store }
    }

    /// Statistics for `month`-`day` across every year of the city's archive.
    /// `month` and `day` must already be range-checked.
    pub async fn get_statistics(
        &self,
        city_id: &str,
        month: u32,
        day: u32,
    ) -> AppResult<WeatherStatistics> {
        let archive = self.store.load(city_id).await?;
        let statistics = aggregate(&archive, month, day)?;

        tracing::debug!(
            city = %city_id,
            date = %statistics.target_date,
            matched = statistics.matched_records.len(),
            "Statistics computed"
        );

        Ok(statistics)
    }
}
