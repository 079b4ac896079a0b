//! City catalog built from the archives on disk

use std::sync::Arc;

use shared::{korean_city_name, City};

use crate::error::AppResult;
use crate::services::archive::ArchiveStore;

/// Lists the cities a client can pick from
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<ArchiveStore>,
}

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new(store: Arc<ArchiveStore>) -> Self {
        Self { store }
    }

    /// List every city with a readable archive, ordered by id.
    ///
    /// Archives that fail to load are skipped so one bad file does not hide
    /// the rest of the catalog.
    pub async fn list_cities(&self) -> AppResult<Vec<City>> {
        let ids = self.store.list_ids().await?;
        let mut cities = Vec::with_capacity(ids.len());

        for city_id in ids {
            let archive = match self.store.load(&city_id).await {
                Ok(archive) => archive,
                Err(e) => {
                    tracing::warn!(city = %city_id, error = %e, "Failed to load city");
                    continue;
                }
            };

            let name_ko = archive
                .city_korean
                .clone()
                .or_else(|| korean_city_name(&city_id).map(str::to_string))
                .unwrap_or_else(|| archive.city.clone());

            cities.push(City {
                id: city_id,
                name: archive.city.clone(),
                name_ko,
                country: archive.country.clone(),
            });
        }

        Ok(cities)
    }
}
