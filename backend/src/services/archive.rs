//! Archive store: loads per-city weather archives from disk and keeps them
//! in memory.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use shared::{validate_city_id, CityArchive};

use crate::error::{AppError, AppResult};

/// Loads `<data_dir>/<city_id>.json` archives.
///
/// Archives are immutable once parsed, so cached entries are shared as
/// `Arc`s. Two requests racing on a cold city may both parse the file; the
/// first insert wins and the other copy is dropped.
#[derive(Debug)]
pub struct ArchiveStore {
    data_dir: PathBuf,
    cache_enabled: bool,
    cache: RwLock<HashMap<String, Arc<CityArchive>>>,
}

impl ArchiveStore {
    /// Create a new ArchiveStore instance
    pub fn new(data_dir: impl Into<PathBuf>, cache_enabled: bool) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache_enabled,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Load a city's archive, from cache when possible
    pub async fn load(&self, city_id: &str) -> AppResult<Arc<CityArchive>> {
        validate_city_id(city_id).map_err(|msg| {
            AppError::field("city", msg, "도시 식별자가 올바르지 않습니다")
        })?;

        if let Some(archive) = self.cached(city_id)? {
            return Ok(archive);
        }

        let archive = Arc::new(self.read_archive(city_id).await?);

        if !self.cache_enabled {
            return Ok(archive);
        }

        let mut cache = self
            .cache
            .write()
            .map_err(|_| AppError::Internal("Archive cache lock poisoned".to_string()))?;
        let entry = cache
            .entry(city_id.to_string())
            .or_insert_with(|| archive.clone());

        Ok(entry.clone())
    }

    /// List archive ids available in the data directory, sorted
    pub async fn list_ids(&self) -> AppResult<Vec<String>> {
        let mut entries = tokio::fs::read_dir(&self.data_dir).await.map_err(|e| {
            AppError::Configuration(format!(
                "Cannot read data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                if validate_city_id(stem).is_ok() {
                    ids.push(stem.to_string());
                }
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Warm the cache with every archive in the data directory.
    /// Returns how many archives loaded; failures are logged and skipped.
    pub async fn preload(&self) -> AppResult<usize> {
        let mut loaded = 0;
        for city_id in self.list_ids().await? {
            match self.load(&city_id).await {
                Ok(archive) => {
                    tracing::debug!(
                        city = %city_id,
                        records = archive.daily.len(),
                        "Archive preloaded"
                    );
                    loaded += 1;
                }
                Err(e) => tracing::warn!(city = %city_id, error = %e, "Skipping archive"),
            }
        }
        Ok(loaded)
    }

    /// Number of archives currently held in memory
    pub fn cached_count(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    fn cached(&self, city_id: &str) -> AppResult<Option<Arc<CityArchive>>> {
        if !self.cache_enabled {
            return Ok(None);
        }
        let cache = self
            .cache
            .read()
            .map_err(|_| AppError::Internal("Archive cache lock poisoned".to_string()))?;
        Ok(cache.get(city_id).cloned())
    }

    async fn read_archive(&self, city_id: &str) -> AppResult<CityArchive> {
        let path = self.data_dir.join(format!("{}.json", city_id));

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::CityNotFound(city_id.to_string()));
            }
            Err(e) => {
                return Err(AppError::Archive(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        let archive: CityArchive = serde_json::from_str(&content).map_err(|e| {
            AppError::Archive(format!("Malformed archive {}: {}", path.display(), e))
        })?;

        tracing::info!(
            city = %city_id,
            records = archive.daily.len(),
            "Archive loaded"
        );

        Ok(archive)
    }
}
