use crate::auth::EditCapability;
use crate::domain::{ServiceDraft, ServiceRecord};
use crate::storage::SiteBackend;

use super::field::EditableField;

/// Inline editor for one catalog service. On a successful save the updated
/// record is returned so the owning list can synchronize (see
/// [`super::ServiceColumns::apply_update`]).
#[derive(Debug, Clone)]
pub struct ServiceEditor {
    record: ServiceRecord,
    field: EditableField<ServiceDraft>,
}

impl ServiceEditor {
    pub fn new(record: ServiceRecord, capability: EditCapability) -> Self {
        let field = EditableField::new(ServiceDraft::from(&record), capability);
        Self { record, field }
    }

    pub fn record(&self) -> &ServiceRecord {
        &self.record
    }

    /// The draft as currently edited; clone, modify, and pass back through
    /// [`Self::change`].
    pub fn draft(&self) -> &ServiceDraft {
        self.field.draft()
    }

    pub fn begin_edit(&mut self) -> bool {
        self.field.begin_edit()
    }

    pub fn change(&mut self, draft: ServiceDraft) {
        self.field.change(draft);
    }

    pub fn cancel(&mut self) {
        self.field.cancel();
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

    /// Validates the draft and persists it. Returns the updated record on
    /// success so sibling views stay consistent; `None` means the failure
    /// (validation or write) is recorded on the editor and the draft is
    /// intact for retry.
    pub fn save(&mut self, backend: &dyn SiteBackend) -> Option<ServiceRecord> {
        let Some(ticket) = self.field.begin_save() else {
            return None;
        };
        let outcome = backend.write_service(&self.record.id, self.field.draft());
        let saved = outcome.is_ok();
        self.field.resolve_save(ticket, outcome);
        if saved {
            self.record.apply_draft(self.field.persisted());
            Some(self.record.clone())
        } else {
            None
        }
    }

    /// Access to the underlying state machine for asynchronous hosts.
    pub fn field_mut(&mut self) -> &mut EditableField<ServiceDraft> {
        &mut self.field
    }
}
