//! Business logic services for the weather history service

pub mod archive;
pub mod catalog;
pub mod contact;
pub mod weather;

pub use archive::ArchiveStore;
pub use catalog::CatalogService;
pub use contact::ContactService;
pub use weather::WeatherService;
