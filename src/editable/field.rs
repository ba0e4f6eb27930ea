use crate::auth::EditCapability;
use crate::domain::ServiceDraft;
use crate::errors::{EditError, StoreError};

/// A value an [`EditableField`] can hold: something cloneable with
/// client-side validation that runs before any write is attempted.
pub trait EditableValue: Clone {
    fn validate(&self) -> Result<(), EditError>;
}

/// Single-line text content, e.g. a hero title. Must be non-empty after
/// trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextValue(pub String);

impl TextValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl EditableValue for TextValue {
    fn validate(&self) -> Result<(), EditError> {
        if self.0.trim().is_empty() {
            return Err(EditError::Validation("Title cannot be empty".into()));
        }
        Ok(())
    }
}

impl EditableValue for ServiceDraft {
    fn validate(&self) -> Result<(), EditError> {
        if self.title.trim().is_empty() {
            return Err(EditError::Validation("Title cannot be empty".into()));
        }
        if self.price < 0.0 {
            return Err(EditError::Validation("Price cannot be negative".into()));
        }
        if self.duration_minutes == 0 {
            return Err(EditError::Validation(
                "Duration must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

/// Keyboard affordances a host UI forwards to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Escape,
    Enter,
}

/// Handle for one in-flight save. The host dispatches the actual write and
/// reports back via [`EditableField::resolve_save`]; a ticket whose
/// generation no longer matches (the field was cancelled, or a newer save
/// started) resolves to a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket {
    generation: u64,
}

impl SaveTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Optimistic-edit state container: fetch-backed persisted value, local
/// draft, and a save cycle that rolls back to the persisted value on cancel
/// and keeps the draft intact on failure.
///
/// Invariants: when not editing the draft equals the persisted value, and
/// `error` is only set immediately after a failed validation or save.
#[derive(Debug, Clone)]
pub struct EditableField<V: EditableValue> {
    persisted: V,
    draft: V,
    editing: bool,
    saving: bool,
    error: Option<String>,
    generation: u64,
    capability: EditCapability,
}

impl<V: EditableValue> EditableField<V> {
    pub fn new(initial: V, capability: EditCapability) -> Self {
        Self {
            persisted: initial.clone(),
            draft: initial,
            editing: false,
            saving: false,
            error: None,
            generation: 0,
            capability,
        }
    }

    pub fn persisted(&self) -> &V {
        &self.persisted
    }

    pub fn draft(&self) -> &V {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_edit(&self) -> bool {
        self.capability.can_edit()
    }

    /// Replaces the persisted value, typically after the mount-time fetch.
    /// Outside an edit session the draft follows along.
    pub fn set_persisted(&mut self, value: V) {
        self.persisted = value.clone();
        if !self.editing {
            self.draft = value;
        }
    }

    /// Starts an edit session by copying the persisted value into the draft.
    /// Unreachable without the edit capability.
    pub fn begin_edit(&mut self) -> bool {
        if !self.capability.can_edit() || self.editing {
            return false;
        }
        self.draft = self.persisted.clone();
        self.editing = true;
        self.error = None;
        true
    }

    /// Updates the draft only; nothing is persisted.
    pub fn change(&mut self, value: V) {
        if self.editing {
            self.draft = value;
        }
    }

    /// Discards the draft and leaves edit mode. Bumps the generation so a
    /// save still in flight resolves to a no-op.
    pub fn cancel(&mut self) {
        if !self.editing {
            return;
        }
        self.draft = self.persisted.clone();
        self.editing = false;
        self.saving = false;
        self.error = None;
        self.generation += 1;
    }

    /// Validates the draft and opens a save. On validation failure the error
    /// is recorded, the field stays in edit mode, and no ticket is issued —
    /// the collaborating store must never be called.
    pub fn begin_save(&mut self) -> Option<SaveTicket> {
        if !self.editing || self.saving {
            return None;
        }
        if let Err(err) = self.draft.validate() {
            self.error = Some(err.to_string());
            return None;
        }
        self.error = None;
        self.saving = true;
        self.generation += 1;
        Some(SaveTicket {
            generation: self.generation,
        })
    }

    /// Applies the outcome of a dispatched save. Stale tickets — the field
    /// was cancelled or a newer save superseded this one — are ignored, so a
    /// late response can never mutate state it no longer owns.
    pub fn resolve_save(&mut self, ticket: SaveTicket, outcome: Result<(), StoreError>) {
        if !self.saving || ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "ignoring stale save resolution"
            );
            return;
        }
        self.saving = false;
        match outcome {
            Ok(()) => {
                self.persisted = self.draft.clone();
                self.editing = false;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "save failed");
                self.error = Some(EditError::SaveFailed.to_string());
            }
        }
    }

    /// Escape cancels; Enter attempts a save (single-line affordance). A
    /// returned ticket must be dispatched and resolved by the host.
    pub fn handle_key(&mut self, key: FieldKey) -> Option<SaveTicket> {
        match key {
            FieldKey::Escape => {
                self.cancel();
                None
            }
            FieldKey::Enter => self.begin_save(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editable(initial: &str) -> EditableField<TextValue> {
        EditableField::new(TextValue::from(initial), EditCapability::granted())
    }

    #[test]
    fn begin_edit_requires_capability() {
        let mut field = EditableField::new(TextValue::from("Hero"), EditCapability::viewer());
        assert!(!field.begin_edit());
        assert!(!field.is_editing());
    }

    #[test]
    fn draft_tracks_persisted_outside_edit_sessions() {
        let mut field = editable("Hero");
        field.set_persisted(TextValue::from("Loaded"));
        assert_eq!(field.draft().as_str(), "Loaded");

        field.begin_edit();
        field.change(TextValue::from("Draft"));
        field.set_persisted(TextValue::from("Fresh"));
        assert_eq!(field.draft().as_str(), "Draft");
    }

    #[test]
    fn validation_failure_blocks_the_save() {
        let mut field = editable("Hero");
        field.begin_edit();
        field.change(TextValue::from("   "));
        assert!(field.begin_save().is_none());
        assert_eq!(field.error(), Some("Title cannot be empty"));
        assert!(field.is_editing());
        assert!(!field.is_saving());
    }

    #[test]
    fn successful_save_commits_the_draft() {
        let mut field = editable("Hero");
        field.begin_edit();
        field.change(TextValue::from("New Title"));
        let ticket = field.begin_save().expect("ticket");
        assert!(field.is_saving());
        field.resolve_save(ticket, Ok(()));
        assert!(!field.is_editing());
        assert_eq!(field.persisted().as_str(), "New Title");
        assert!(field.error().is_none());
    }

    #[test]
    fn failed_save_keeps_the_draft_and_reports_retry() {
        let mut field = editable("Hero");
        field.begin_edit();
        field.change(TextValue::from("New Title"));
        let ticket = field.begin_save().expect("ticket");
        field.resolve_save(ticket, Err(StoreError::Storage("write failed".into())));
        assert!(field.is_editing());
        assert_eq!(field.draft().as_str(), "New Title");
        assert_eq!(field.error(), Some("Failed to save. Please try again."));
    }

    #[test]
    fn cancel_after_failed_save_restores_last_persisted_value() {
        let mut field = editable("Hero");
        field.begin_edit();
        field.change(TextValue::from("Broken edit"));
        let ticket = field.begin_save().expect("ticket");
        field.resolve_save(ticket, Err(StoreError::Storage("down".into())));
        field.cancel();
        assert_eq!(field.draft().as_str(), "Hero");
        assert!(field.error().is_none());
        assert!(!field.is_editing());
    }

    #[test]
    fn stale_resolution_after_cancel_is_ignored() {
        let mut field = editable("Hero");
        field.begin_edit();
        field.change(TextValue::from("In flight"));
        let ticket = field.begin_save().expect("ticket");
        field.cancel();
        field.resolve_save(ticket, Ok(()));
        assert_eq!(field.persisted().as_str(), "Hero");
        assert_eq!(field.draft().as_str(), "Hero");
        assert!(!field.is_saving());
    }

    #[test]
    fn escape_cancels_and_enter_saves() {
        let mut field = editable("Hero");
        field.begin_edit();
        field.change(TextValue::from("Edited"));
        assert!(field.handle_key(FieldKey::Escape).is_none());
        assert!(!field.is_editing());

        field.begin_edit();
        field.change(TextValue::from("Edited again"));
        let ticket = field.handle_key(FieldKey::Enter).expect("ticket");
        field.resolve_save(ticket, Ok(()));
        assert_eq!(field.persisted().as_str(), "Edited again");
    }

    #[test]
    fn service_draft_validation_messages() {
        use crate::domain::{ServiceCategory, ServiceDraft};

        let draft = ServiceDraft {
            category: ServiceCategory::Studio,
            title: "Stickwork".into(),
            description: String::new(),
            price: -1.0,
            duration_minutes: 60,
            detail_text: String::new(),
            is_active: true,
        };
        assert_eq!(
            draft.validate(),
            Err(EditError::Validation("Price cannot be negative".into()))
        );

        let draft = ServiceDraft {
            duration_minutes: 0,
            price: 80.0,
            ..draft
        };
        assert_eq!(
            draft.validate(),
            Err(EditError::Validation(
                "Duration must be greater than 0".into()
            ))
        );
    }
}
