use std::sync::Mutex;

use crate::domain::{ContentRow, ServiceCategory, ServiceDraft, ServiceRecord};

use super::{Result, SiteBackend, SiteDb};

/// In-process backend over a shared [`SiteDb`]; the store of choice for
/// tests and demos.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    db: Mutex<SiteDb>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            db: Mutex::new(SiteDb::new()),
        }
    }

    /// A backend seeded with the studio's stock catalog and hero copy.
    pub fn with_demo_data() -> Self {
        let mut db = SiteDb::new();
        db.write_content("site_title", "Wildwood Wellness")
            .expect("seed content");
        db.write_content("hero_title", "Find Your Calm")
            .expect("seed content");

        let seeds = [
            ("Stickwork Session", ServiceCategory::Studio, 100.0, 60),
            ("doTERRA Session", ServiceCategory::Studio, 80.0, 60),
            ("Forest Bathing Therapy", ServiceCategory::Nature, 75.0, 120),
        ];
        for (title, category, price, duration) in seeds {
            db.create_service(ServiceDraft {
                category,
                title: title.into(),
                description: String::new(),
                price,
                duration_minutes: duration,
                detail_text: String::new(),
                is_active: true,
            })
            .expect("seed service");
        }
        Self { db: Mutex::new(db) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SiteDb> {
        self.db.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SiteBackend for MemoryBackend {
    fn read_content(&self, key: &str) -> Result<String> {
        self.lock().read_content(key)
    }

    fn write_content(&self, key: &str, value: &str) -> Result<()> {
        self.lock().write_content(key, value)
    }

    fn content_rows(&self) -> Result<Vec<ContentRow>> {
        Ok(self.lock().content.clone())
    }

    fn read_services(&self) -> Result<Vec<ServiceRecord>> {
        Ok(self.lock().active_services())
    }

    fn all_services(&self) -> Result<Vec<ServiceRecord>> {
        Ok(self.lock().services.clone())
    }

    fn write_service(&self, id: &str, draft: &ServiceDraft) -> Result<()> {
        self.lock().write_service(id, draft)
    }

    fn create_service(&self, draft: ServiceDraft) -> Result<String> {
        self.lock().create_service(draft)
    }
}
