use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::service::BookableService;

/// Contact details entered on the final wizard step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub comments: String,
}

impl BookingDetails {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            comments: String::new(),
        }
    }
}

/// The mock confirmation produced by a completed wizard. Nothing is
/// persisted; no booking record exists beyond this value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfirmation {
    pub id: Uuid,
    pub service: BookableService,
    pub date: NaiveDate,
    pub time: String,
    pub details: BookingDetails,
}
