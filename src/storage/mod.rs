pub mod json_backend;
pub mod memory;
pub mod site_db;

use crate::domain::{BookableService, ContentRow, ServiceDraft, ServiceRecord, SiteContent};
use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over the content/service collaborator the editable components
/// and booking flow consume.
pub trait SiteBackend: Send + Sync {
    /// Reads one content value by its snake_case storage key.
    /// `StoreError::NotFound` means no value has been stored yet.
    fn read_content(&self, key: &str) -> Result<String>;

    /// Upserts one content value.
    fn write_content(&self, key: &str, value: &str) -> Result<()>;

    /// All stored content rows (admin view).
    fn content_rows(&self) -> Result<Vec<ContentRow>>;

    /// Active services only, ordered by category then title — the public
    /// catalog view.
    fn read_services(&self) -> Result<Vec<ServiceRecord>>;

    /// Every service including inactive ones (admin view).
    fn all_services(&self) -> Result<Vec<ServiceRecord>>;

    /// Replaces the editable fields of an existing service.
    fn write_service(&self, id: &str, draft: &ServiceDraft) -> Result<()>;

    /// Validates and inserts a new service, returning its minted identifier.
    fn create_service(&self, draft: ServiceDraft) -> Result<String>;

    /// The projection offered in the booking wizard: active services with a
    /// positive price and duration.
    fn bookable_services(&self) -> Result<Vec<BookableService>> {
        Ok(self
            .read_services()?
            .iter()
            .filter(|record| record.is_bookable())
            .map(BookableService::from)
            .collect())
    }

    /// The known site strings assembled from stored rows; absent keys stay
    /// empty.
    fn site_content(&self) -> Result<SiteContent> {
        Ok(SiteContent::from_rows(&self.content_rows()?))
    }
}

pub use json_backend::JsonBackend;
pub use memory::MemoryBackend;
pub use site_db::{SiteDb, SITE_DB_SCHEMA_VERSION};
