//! Ingestion of the venue and menu tables into typed records.
//!
//! Both tables are comma-separated text with a header row. Parsing is
//! best-effort: malformed rows are logged and skipped, never fatal.

pub mod error;
pub mod media;
pub mod menu;
pub mod tabular;
pub mod venues;

pub use error::IngestError;
pub use media::{drive_embed_url, drive_image_url};
pub use menu::{menu_for_venue, normalize_key, parse_menu_items};
pub use tabular::{data_rows, split_record, MIN_FIELDS};
pub use venues::{parse_venues, synthesized_rating};
