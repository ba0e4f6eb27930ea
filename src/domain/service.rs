use serde::{Deserialize, Serialize};

/// Grouping bucket a service is presented under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Studio,
    Nature,
}

impl ServiceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCategory::Studio => "In Studio",
            ServiceCategory::Nature => "In Nature",
        }
    }
}

/// A catalog entry as stored: everything the admin can edit about a service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceRecord {
    pub id: String,
    pub category: ServiceCategory,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub detail_text: String,
    #[serde(default = "ServiceRecord::active_default")]
    pub is_active: bool,
    #[serde(default = "ServiceRecord::active_default")]
    pub has_detail_page: bool,
}

impl ServiceRecord {
    pub fn new(id: impl Into<String>, category: ServiceCategory, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            description: String::new(),
            price: 0.0,
            duration_minutes: 60,
            detail_text: String::new(),
            is_active: true,
            has_detail_page: true,
        }
    }

    /// True when the service should appear in the public booking flow.
    pub fn is_bookable(&self) -> bool {
        self.is_active && self.price > 0.0 && self.duration_minutes > 0
    }

    fn active_default() -> bool {
        true
    }
}

/// The editable subset of a [`ServiceRecord`], used as a draft while editing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceDraft {
    pub category: ServiceCategory,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration_minutes: u32,
    pub detail_text: String,
    pub is_active: bool,
}

impl From<&ServiceRecord> for ServiceDraft {
    fn from(record: &ServiceRecord) -> Self {
        Self {
            category: record.category,
            title: record.title.clone(),
            description: record.description.clone(),
            price: record.price,
            duration_minutes: record.duration_minutes,
            detail_text: record.detail_text.clone(),
            is_active: record.is_active,
        }
    }
}

impl ServiceRecord {
    /// Applies an edited draft back onto the stored record.
    pub fn apply_draft(&mut self, draft: &ServiceDraft) {
        self.category = draft.category;
        self.title = draft.title.clone();
        self.description = draft.description.clone();
        self.price = draft.price;
        self.duration_minutes = draft.duration_minutes;
        self.detail_text = draft.detail_text.clone();
        self.is_active = draft.is_active;
    }
}

/// Read-only projection of a service offered in the booking wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookableService {
    pub id: String,
    pub name: String,
    pub duration_minutes: u32,
    pub price: f64,
    pub description: String,
}

impl From<&ServiceRecord> for BookableService {
    fn from(record: &ServiceRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.title.clone(),
            duration_minutes: record.duration_minutes,
            price: record.price,
            description: record.description.clone(),
        }
    }
}

/// Builds a URL-safe identifier from a service title: lowercase, runs of
/// non-alphanumeric characters collapse to a single dash, edges trimmed.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !slug.is_empty() && !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Forest Bathing Therapy"), "forest-bathing-therapy");
        assert_eq!(slugify("  doTERRA  Session! "), "doterra-session");
        assert_eq!(slugify("90' Deep Tissue"), "90-deep-tissue");
    }

    #[test]
    fn bookable_requires_active_price_and_duration() {
        let mut record = ServiceRecord::new("stickwork", ServiceCategory::Studio, "Stickwork");
        record.price = 100.0;
        assert!(record.is_bookable());

        record.is_active = false;
        assert!(!record.is_bookable());

        record.is_active = true;
        record.price = 0.0;
        assert!(!record.is_bookable());
    }
}
