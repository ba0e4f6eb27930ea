//! Inline-editing primitives: the generic optimistic field state machine and
//! the content/service editors built on it.

pub mod columns;
pub mod content_field;
pub mod field;
pub mod service_editor;

pub use columns::ServiceColumns;
pub use content_field::ContentField;
pub use field::{EditableField, EditableValue, FieldKey, SaveTicket, TextValue};
pub use service_editor::ServiceEditor;
