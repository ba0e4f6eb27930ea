use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single stored content fragment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentRow {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl ContentRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            updated_at: Utc::now(),
        }
    }
}

/// Converts a camelCase content key to its snake_case storage key by
/// inserting `_` before each uppercase letter and lowercasing it.
/// Already-snake input passes through unchanged, so the transform is
/// idempotent.
pub fn to_snake_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Converts a snake_case storage key back to the camelCase form used by
/// site templates.
pub fn to_camel_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// The known site strings, assembled from stored content rows. Absent keys
/// stay empty so the page falls back to its built-in copy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteContent {
    pub site_title: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub provider_subtitle: String,
}

impl SiteContent {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a ContentRow>) -> Self {
        let mut content = Self::default();
        for row in rows {
            match row.key.as_str() {
                "site_title" => content.site_title = row.value.clone(),
                "hero_title" => content.hero_title = row.value.clone(),
                "hero_subtitle" => content.hero_subtitle = row.value.clone(),
                "contact_phone" => content.contact_phone = row.value.clone(),
                "contact_email" => content.contact_email = row.value.clone(),
                "provider_subtitle" => content.provider_subtitle = row.value.clone(),
                _ => {}
            }
        }
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_key_transform_is_exact() {
        assert_eq!(to_snake_key("heroTitle"), "hero_title");
        assert_eq!(to_snake_key("contactPhone"), "contact_phone");
        assert_eq!(to_snake_key("siteTitle"), "site_title");
    }

    #[test]
    fn snake_key_transform_is_idempotent_on_snake_input() {
        assert_eq!(to_snake_key("hero_title"), "hero_title");
        assert_eq!(to_snake_key(&to_snake_key("heroTitle")), "hero_title");
    }

    #[test]
    fn camel_key_inverts_snake_key() {
        assert_eq!(to_camel_key("hero_title"), "heroTitle");
        assert_eq!(to_camel_key(&to_snake_key("providerSubtitle")), "providerSubtitle");
    }

    #[test]
    fn site_content_ignores_unknown_rows() {
        let rows = vec![
            ContentRow::new("hero_title", "Find Your Calm"),
            ContentRow::new("mystery_key", "ignored"),
        ];
        let content = SiteContent::from_rows(&rows);
        assert_eq!(content.hero_title, "Find Your Calm");
        assert!(content.site_title.is_empty());
    }
}
