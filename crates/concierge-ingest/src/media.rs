//! Rewriting of cloud-drive share links into directly loadable URLs.

use std::sync::LazyLock;

use regex::Regex;

/// Host marker identifying a Google Drive share link.
const DRIVE_MARKER: &str = "drive.google.com";

/// Drive file ids are long runs of URL-safe characters.
static DRIVE_FILE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-A-Za-z0-9_]{25,}").expect("valid drive id regex"));

fn drive_file_id(url: &str) -> Option<&str> {
    if !url.contains(DRIVE_MARKER) {
        return None;
    }
    DRIVE_FILE_ID.find(url).map(|m| m.as_str())
}

/// Direct image URL for a Drive share link; other URLs pass through.
#[must_use]
pub fn drive_image_url(url: &str) -> String {
    match drive_file_id(url) {
        Some(id) => format!("https://lh3.googleusercontent.com/d/{id}"),
        None => url.to_string(),
    }
}

/// Embeddable preview URL for a Drive share link; other URLs pass through.
#[must_use]
pub fn drive_embed_url(url: &str) -> String {
    match drive_file_id(url) {
        Some(id) => format!("https://drive.google.com/file/d/{id}/preview"),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "1AbCdEfGhIjKlMnOpQrStUvWxYz_-09";

    #[test]
    fn image_url_rewrites_share_link() {
        let url = format!("https://drive.google.com/file/d/{ID}/view?usp=sharing");
        assert_eq!(
            drive_image_url(&url),
            format!("https://lh3.googleusercontent.com/d/{ID}")
        );
    }

    #[test]
    fn embed_url_rewrites_open_link() {
        let url = format!("https://drive.google.com/open?id={ID}");
        assert_eq!(
            drive_embed_url(&url),
            format!("https://drive.google.com/file/d/{ID}/preview")
        );
    }

    #[test]
    fn non_drive_url_passes_through() {
        let url = format!("https://cdn.example.com/{ID}.jpg");
        assert_eq!(drive_image_url(&url), url);
    }

    #[test]
    fn drive_url_without_id_passes_through() {
        let url = "https://drive.google.com/drive/folders/short";
        assert_eq!(drive_embed_url(url), url);
    }

    #[test]
    fn empty_url_stays_empty() {
        assert_eq!(drive_image_url(""), "");
        assert_eq!(drive_embed_url(""), "");
    }
}
