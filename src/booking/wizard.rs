use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{BookableService, BookingConfirmation, BookingDetails};

/// The linear wizard steps: Service, Time, Details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BookingStep {
    ServiceSelect,
    TimeSelect,
    DetailsEntry,
}

impl BookingStep {
    pub fn index(&self) -> usize {
        match self {
            BookingStep::ServiceSelect => 0,
            BookingStep::TimeSelect => 1,
            BookingStep::DetailsEntry => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStep::ServiceSelect => "Service",
            BookingStep::TimeSelect => "Time",
            BookingStep::DetailsEntry => "Details",
        }
    }

    fn previous(&self) -> BookingStep {
        match self {
            BookingStep::ServiceSelect | BookingStep::TimeSelect => BookingStep::ServiceSelect,
            BookingStep::DetailsEntry => BookingStep::TimeSelect,
        }
    }
}

/// Validation failures raised by [`BookingWizard::submit`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("select a service, date, and time before confirming")]
    IncompleteSelection,
    #[error("this booking was already confirmed")]
    AlreadyConfirmed,
}

/// State container for the three-step booking flow.
///
/// Transitions only move forward when the matching selection is present, and
/// `back` never discards a selection, so re-advancing restores the prior
/// choices. Once a booking is confirmed the wizard is terminal.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    services: Vec<BookableService>,
    step: BookingStep,
    selected_service: Option<BookableService>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<String>,
    deep_link_applied: bool,
    confirmation: Option<BookingConfirmation>,
}

impl BookingWizard {
    pub fn new(services: Vec<BookableService>) -> Self {
        Self {
            services,
            step: BookingStep::ServiceSelect,
            selected_service: None,
            selected_date: None,
            selected_time: None,
            deep_link_applied: false,
            confirmation: None,
        }
    }

    pub fn services(&self) -> &[BookableService] {
        &self.services
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn selected_service(&self) -> Option<&BookableService> {
        self.selected_service.as_ref()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.selected_time.as_deref()
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    /// Pre-selects a service supplied externally (a `?service=` query
    /// parameter) and jumps to the time step. Unknown identifiers leave the
    /// wizard untouched. Fires at most once per wizard instance, so a
    /// refreshed-but-equal service list cannot reset an in-progress booking.
    pub fn apply_deep_link(&mut self, service_id: &str) -> bool {
        if self.deep_link_applied || self.confirmation.is_some() {
            return false;
        }
        self.deep_link_applied = true;
        match self.services.iter().find(|s| s.id == service_id) {
            Some(service) => {
                self.selected_service = Some(service.clone());
                self.step = BookingStep::TimeSelect;
                true
            }
            None => false,
        }
    }

    /// Replaces the offered service list without touching the current
    /// selections or the deep-link guard.
    pub fn set_services(&mut self, services: Vec<BookableService>) {
        self.services = services;
    }

    /// Selects a service by identifier and advances to the time step.
    pub fn select_service(&mut self, service_id: &str) -> bool {
        if self.confirmation.is_some() {
            return false;
        }
        match self.services.iter().find(|s| s.id == service_id) {
            Some(service) => {
                self.selected_service = Some(service.clone());
                self.step = BookingStep::TimeSelect;
                true
            }
            None => false,
        }
    }

    /// Stores the chosen date. A new date always invalidates a previously
    /// chosen time; the step does not change.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.confirmation.is_some() {
            return;
        }
        self.selected_date = Some(date);
        self.selected_time = None;
    }

    /// Stores the chosen time and advances to the details step. Requires a
    /// date to already be selected.
    pub fn select_time(&mut self, time: impl Into<String>) -> bool {
        if self.confirmation.is_some() || self.selected_date.is_none() {
            return false;
        }
        self.selected_time = Some(time.into());
        self.step = BookingStep::DetailsEntry;
        true
    }

    /// Steps back without clearing any selection, so forward re-entry shows
    /// the prior choices.
    pub fn back(&mut self) {
        if self.confirmation.is_some() {
            return;
        }
        self.step = self.step.previous();
    }

    /// Validates the contact details and completes the mock booking. No
    /// booking record is persisted anywhere; the confirmation is the only
    /// artifact.
    pub fn submit(&mut self, details: BookingDetails) -> Result<&BookingConfirmation, SubmitError> {
        if self.confirmation.is_some() {
            return Err(SubmitError::AlreadyConfirmed);
        }
        if details.name.trim().is_empty() {
            return Err(SubmitError::MissingField("Name"));
        }
        if details.phone.trim().is_empty() {
            return Err(SubmitError::MissingField("Phone"));
        }
        if details.email.trim().is_empty() {
            return Err(SubmitError::MissingField("Email"));
        }
        let (service, date, time) = match (
            self.selected_service.clone(),
            self.selected_date,
            self.selected_time.clone(),
        ) {
            (Some(service), Some(date), Some(time)) => (service, date, time),
            _ => return Err(SubmitError::IncompleteSelection),
        };

        let confirmation = BookingConfirmation {
            id: Uuid::new_v4(),
            service,
            date,
            time,
            details,
        };
        tracing::info!(booking = %confirmation.id, service = %confirmation.service.name, "booking confirmed");
        Ok(self.confirmation.insert(confirmation))
    }
}
