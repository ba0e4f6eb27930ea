use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use crate::config::SiteConfig;
use crate::domain::{ContentRow, ServiceDraft, ServiceRecord};
use crate::errors::StoreError;

use super::{Result, SiteBackend, SiteDb, SITE_DB_SCHEMA_VERSION};

const TMP_SUFFIX: &str = "tmp";
const SITE_FILE: &str = "site.json";

/// File-backed site store: the whole [`SiteDb`] document lives in one pretty
/// JSON file, rewritten atomically after every mutation.
#[derive(Debug)]
pub struct JsonBackend {
    path: PathBuf,
    db: Mutex<SiteDb>,
}

impl JsonBackend {
    /// Opens (or initializes) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let db = if path.exists() {
            let data = fs::read_to_string(&path)?;
            let db: SiteDb = serde_json::from_str(&data)?;
            if db.schema_version > SITE_DB_SCHEMA_VERSION {
                return Err(StoreError::Storage(format!(
                    "site data schema v{} is newer than supported v{}",
                    db.schema_version, SITE_DB_SCHEMA_VERSION
                )));
            }
            db
        } else {
            SiteDb::new()
        };
        tracing::debug!(path = %path.display(), services = db.services.len(), "opened site store");
        Ok(Self {
            path,
            db: Mutex::new(db),
        })
    }

    /// Opens the store under the configured data directory.
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let dir = config.resolved_data_dir();
        ensure_dir(&dir)?;
        Self::open(dir.join(SITE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SiteDb> {
        self.db.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn persist(&self, db: &SiteDb) -> Result<()> {
        let json = serde_json::to_string_pretty(db)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SiteBackend for JsonBackend {
    fn read_content(&self, key: &str) -> Result<String> {
        self.lock().read_content(key)
    }

    fn write_content(&self, key: &str, value: &str) -> Result<()> {
        let mut db = self.lock();
        db.write_content(key, value)?;
        self.persist(&db)
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
        let mut db = self.lock();
        db.write_service(id, draft)?;
        self.persist(&db)
    }

    fn create_service(&self, draft: ServiceDraft) -> Result<String> {
        let mut db = self.lock();
        let id = db.create_service(draft)?;
        self.persist(&db)?;
        Ok(id)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
