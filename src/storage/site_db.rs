use serde::{Deserialize, Serialize};

use crate::domain::{slugify, ContentRow, ServiceCategory, ServiceDraft, ServiceRecord};
use crate::errors::StoreError;

use super::Result;

pub const SITE_DB_SCHEMA_VERSION: u8 = 1;

/// The whole site document: editable content rows plus the service catalog.
/// Backends share this struct and differ only in where it lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteDb {
    #[serde(default)]
    pub content: Vec<ContentRow>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    #[serde(default = "SiteDb::schema_version_default")]
    pub schema_version: u8,
}

impl Default for SiteDb {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteDb {
    pub fn new() -> Self {
        Self {
            content: Vec::new(),
            services: Vec::new(),
            schema_version: SITE_DB_SCHEMA_VERSION,
        }
    }

    pub fn read_content(&self, key: &str) -> Result<String> {
        self.content
            .iter()
            .find(|row| row.key == key)
            .map(|row| row.value.clone())
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    pub fn write_content(&mut self, key: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(StoreError::Invalid("Value is required".into()));
        }
        match self.content.iter_mut().find(|row| row.key == key) {
            Some(row) => {
                row.value = value.to_string();
                row.updated_at = chrono::Utc::now();
            }
            None => self.content.push(ContentRow::new(key, value)),
        }
        Ok(())
    }

    /// Active services ordered by category then title.
    pub fn active_services(&self) -> Vec<ServiceRecord> {
        let mut services: Vec<ServiceRecord> = self
            .services
            .iter()
            .filter(|record| record.is_active)
            .cloned()
            .collect();
        services.sort_by(|a, b| catalog_order(a).cmp(&catalog_order(b)));
        services
    }

    pub fn service(&self, id: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|record| record.id == id)
    }

    pub fn write_service(&mut self, id: &str, draft: &ServiceDraft) -> Result<()> {
        validate_draft(draft)?;
        let record = self
            .services
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.apply_draft(draft);
        Ok(())
    }

    /// Inserts a new service with an identifier minted from its title;
    /// collisions get a numeric suffix.
    pub fn create_service(&mut self, draft: ServiceDraft) -> Result<String> {
        validate_draft(&draft)?;
        let id = self.mint_id(&draft.title);
        let mut record = ServiceRecord::new(id.clone(), draft.category, draft.title.clone());
        record.apply_draft(&draft);
        self.services.push(record);
        Ok(id)
    }

    fn mint_id(&self, title: &str) -> String {
        let base = slugify(title);
        if self.service(&base).is_none() {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if self.service(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }

    fn schema_version_default() -> u8 {
        SITE_DB_SCHEMA_VERSION
    }
}

fn catalog_order(record: &ServiceRecord) -> (u8, String) {
    let category = match record.category {
        ServiceCategory::Studio => 0,
        ServiceCategory::Nature => 1,
    };
    (category, record.title.to_ascii_lowercase())
}

fn validate_draft(draft: &ServiceDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(StoreError::Invalid("Title is required".into()));
    }
    if draft.price < 0.0 {
        return Err(StoreError::Invalid("Price cannot be negative".into()));
    }
    if draft.duration_minutes == 0 {
        return Err(StoreError::Invalid(
            "Duration must be greater than 0".into(),
        ));
    }
    Ok(())
}
