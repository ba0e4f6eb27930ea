use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An offered appointment time. The table is a static mock: availability is
/// not derived from any booking state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    pub id: String,
    pub label: String,
    pub available: bool,
}

impl TimeSlot {
    fn new(id: &str, label: &str, available: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            available,
        }
    }
}

static MOCK_TIME_SLOTS: Lazy<Vec<TimeSlot>> = Lazy::new(|| {
    vec![
        TimeSlot::new("t1", "9:00 AM", true),
        TimeSlot::new("t2", "9:30 AM", true),
        TimeSlot::new("t3", "10:00 AM", true),
        TimeSlot::new("t4", "10:30 AM", false),
        TimeSlot::new("t5", "11:00 AM", true),
        TimeSlot::new("t6", "11:30 AM", true),
        TimeSlot::new("t7", "1:00 PM", true),
        TimeSlot::new("t8", "1:30 PM", false),
        TimeSlot::new("t9", "2:00 PM", true),
        TimeSlot::new("t10", "3:00 PM", true),
    ]
});

/// The static slot table shown for every date.
pub fn mock_time_slots() -> &'static [TimeSlot] {
    &MOCK_TIME_SLOTS
}
