//! The three-step booking flow: wizard state machine and calendar helpers.

pub mod calendar;
pub mod wizard;

pub use calendar::{available_slots, CalendarDay, MonthView};
pub use wizard::{BookingStep, BookingWizard, SubmitError};
