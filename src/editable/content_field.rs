use crate::auth::EditCapability;
use crate::domain::to_snake_key;
use crate::errors::StoreError;
use crate::storage::SiteBackend;

use super::field::{EditableField, FieldKey, TextValue};

/// An inline-editable site string bound to one content key.
///
/// Keys are authored in camelCase and stored in snake_case; the transform is
/// applied once at construction. Until the mount-time read completes (and
/// whenever the stored value is empty) the caller-supplied fallback is
/// rendered.
#[derive(Debug, Clone)]
pub struct ContentField {
    key: String,
    storage_key: String,
    fallback: String,
    field: EditableField<TextValue>,
    loaded: bool,
}

impl ContentField {
    pub fn new(
        key: impl Into<String>,
        fallback: impl Into<String>,
        capability: EditCapability,
    ) -> Self {
        let key = key.into();
        let storage_key = to_snake_key(&key);
        Self {
            key,
            storage_key,
            fallback: fallback.into(),
            field: EditableField::new(TextValue::default(), capability),
            loaded: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Fetches the persisted value. An absent row is not an error: the field
    /// just starts empty and keeps showing the fallback. Backend failures
    /// are reported to the caller but never block editing.
    pub fn load(&mut self, backend: &dyn SiteBackend) -> Result<(), StoreError> {
        let outcome = match backend.read_content(&self.storage_key) {
            Ok(value) => {
                self.field.set_persisted(TextValue(value));
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                self.field.set_persisted(TextValue::default());
                Ok(())
            }
            Err(err) => {
                tracing::warn!(key = %self.storage_key, error = %err, "content fetch failed");
                self.field.set_persisted(TextValue::default());
                Err(err)
            }
        };
        self.loaded = true;
        outcome
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// What a page should render right now: the draft while editing, else
    /// the persisted value, else the fallback.
    pub fn display_text(&self) -> &str {
        if self.field.is_editing() {
            return self.field.draft().as_str();
        }
        let persisted = self.field.persisted().as_str();
        if persisted.is_empty() {
            &self.fallback
        } else {
            persisted
        }
    }

    pub fn begin_edit(&mut self) -> bool {
        self.field.begin_edit()
    }

    pub fn change(&mut self, text: impl Into<String>) {
        self.field.change(TextValue(text.into()));
    }

    pub fn cancel(&mut self) {
        self.field.cancel();
    }

    /// Validates, writes the trimmed draft under the snake_case key, and
    /// commits. Returns whether the value was persisted; validation and
    /// write failures are recorded on the field for the user to retry.
    pub fn save(&mut self, backend: &dyn SiteBackend) -> bool {
        let trimmed = self.field.draft().as_str().trim().to_string();
        self.field.change(TextValue(trimmed));
        let Some(ticket) = self.field.begin_save() else {
            return false;
        };
        let outcome = backend.write_content(&self.storage_key, self.field.draft().as_str());
        let saved = outcome.is_ok();
        self.field.resolve_save(ticket, outcome);
        saved
    }

    /// Escape cancels; Enter saves (single-line field).
    pub fn handle_key(&mut self, key: FieldKey, backend: &dyn SiteBackend) -> bool {
        match key {
            FieldKey::Escape => {
                self.cancel();
                false
            }
            FieldKey::Enter => self.save(backend),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.field.is_editing()
    }

    pub fn is_saving(&self) -> bool {
        self.field.is_saving()
    }

    pub fn error(&self) -> Option<&str> {
        self.field.error()
    }

    pub fn can_edit(&self) -> bool {
        self.field.can_edit()
    }

    /// Access to the underlying state machine for hosts that dispatch their
    /// own writes and resolve tickets asynchronously.
    pub fn field_mut(&mut self) -> &mut EditableField<TextValue> {
        &mut self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn absent_key_renders_fallback_without_error() {
        let backend = MemoryBackend::new();
        let mut field = ContentField::new("heroTitle", "Welcome", EditCapability::granted());
        field.load(&backend).unwrap();
        assert_eq!(field.display_text(), "Welcome");
        assert!(field.error().is_none());
    }

    #[test]
    fn save_writes_the_snake_case_key() {
        let backend = MemoryBackend::new();
        let mut field = ContentField::new("heroTitle", "Welcome", EditCapability::granted());
        field.load(&backend).unwrap();
        field.begin_edit();
        field.change("New Title ");
        assert!(field.save(&backend));
        assert_eq!(backend.read_content("hero_title").unwrap(), "New Title");
        assert_eq!(field.display_text(), "New Title");
    }

    #[test]
    fn viewer_capability_keeps_the_field_read_only() {
        let backend = MemoryBackend::new();
        backend.write_content("hero_title", "Stored").unwrap();
        let mut field = ContentField::new("heroTitle", "Welcome", EditCapability::viewer());
        field.load(&backend).unwrap();
        assert!(!field.begin_edit());
        assert_eq!(field.display_text(), "Stored");
    }
}
