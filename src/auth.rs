use serde::{Deserialize, Serialize};

/// Explicit edit-authorization value passed into each editable component.
///
/// A viewer capability renders fields read-only; no error is raised, the edit
/// affordance is simply unreachable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditCapability {
    admin: bool,
}

impl EditCapability {
    /// Capability handed to an authenticated admin session.
    pub fn granted() -> Self {
        Self { admin: true }
    }

    /// Capability for everyone else.
    pub fn viewer() -> Self {
        Self { admin: false }
    }

    pub fn can_edit(&self) -> bool {
        self.admin
    }
}
