//! Site domain models: the service catalog, editable content keys, booking
//! types, and the static mock time-slot table.

pub mod booking;
pub mod content;
pub mod service;
pub mod time_slot;

pub use booking::{BookingConfirmation, BookingDetails};
pub use content::{to_camel_key, to_snake_key, ContentRow, SiteContent};
pub use service::{slugify, BookableService, ServiceCategory, ServiceDraft, ServiceRecord};
pub use time_slot::{mock_time_slots, TimeSlot};
