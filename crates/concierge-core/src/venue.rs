use serde::{Deserialize, Serialize};

/// Seating layout reported by the venue table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndoorOutdoor {
    Indoor,
    Outdoor,
    Both,
    #[default]
    Unknown,
}

impl IndoorOutdoor {
    /// Interprets a free-text seating cell.
    ///
    /// Text mentioning both "indoor" and "outdoor" (e.g. `"Indoor & Outdoor"`)
    /// is [`IndoorOutdoor::Both`]; anything unrecognised is `Unknown`.
    #[must_use]
    pub fn from_cell(raw: &str) -> Self {
        let lower = raw.trim().to_lowercase();
        let indoor = lower.contains("indoor");
        let outdoor = lower.contains("outdoor");
        match (indoor, outdoor) {
            (true, true) => Self::Both,
            (true, false) => Self::Indoor,
            (false, true) => Self::Outdoor,
            (false, false) if lower == "both" => Self::Both,
            (false, false) => Self::Unknown,
        }
    }
}

impl std::fmt::Display for IndoorOutdoor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndoorOutdoor::Indoor => write!(f, "Indoor"),
            IndoorOutdoor::Outdoor => write!(f, "Outdoor"),
            IndoorOutdoor::Both => write!(f, "Both"),
            IndoorOutdoor::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A bookable establishment, built once from the venue table and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub google_location_url: String,
    /// Direct-access image URL.
    pub image_address: String,
    /// Embeddable viewer URL for the menu document.
    pub menu_link: String,
    pub contact_number: String,
    #[serde(rename = "type")]
    pub venue_type: String,
    pub location: String,
    pub commission: f64,
    pub family_friendly: bool,
    pub cuisine: String,
    pub opening_hours: String,
    pub availability: String,
    /// Average spend per guest in AED.
    pub price_per_person: u32,
    pub promo_venue: bool,
    pub signature_dish: String,
    pub high_traffic_area: bool,
    pub loudness: u8,
    pub romantic_score: u8,
    pub party_vibe: u8,
    pub instagrammable: u8,
    pub sunset_view: bool,
    pub indoor_outdoor: IndoorOutdoor,
    pub business_friendly: bool,
    pub dress_code: String,
    pub birthday_venue: bool,
    pub usp: String,
    pub notes: String,
    pub extra_details: String,
    /// Synthesized rating in `[0.0, 5.0]`, one decimal place.
    pub google_rating: f64,
}
