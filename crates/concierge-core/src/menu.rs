use serde::{Deserialize, Serialize};

/// A dish row from the menu table, resolved to exactly one [`crate::Venue`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    /// Venue key exactly as it appeared in the source row.
    pub venue_slug: String,
    pub venue_name: String,
    pub venue_image: String,
    pub course: String,
    pub item: String,
    pub description: String,
    pub price: f64,
    pub dietary_tags: Vec<String>,
}

impl MenuItem {
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
