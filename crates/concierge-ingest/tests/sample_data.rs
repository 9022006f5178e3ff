//! Integration tests that ingest the bundled sample tables under `data/`.

use std::path::PathBuf;

use concierge_core::IndoorOutdoor;
use concierge_ingest::{menu_for_venue, parse_menu_items, parse_venues};

fn data_file(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

#[test]
fn sample_venues_skip_the_malformed_row() {
    let venues = parse_venues(&data_file("venues.csv"));
    let ids: Vec<&str> = venues.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "8"]);
}

#[test]
fn sample_venue_fields_are_normalized() {
    let venues = parse_venues(&data_file("venues.csv"));

    let sky = &venues[0];
    assert_eq!(sky.name, "Sky Lounge");
    assert_eq!(
        sky.image_address,
        "https://lh3.googleusercontent.com/d/1SkyLoungeImageFileId0000000"
    );
    assert_eq!(
        sky.menu_link,
        "https://drive.google.com/file/d/1SkyLoungeMenuFileId00000000/preview"
    );
    assert_eq!(sky.signature_dish, "Truffle wagyu sliders");
    assert_eq!(sky.usp, "Best sunset view in the Marina");
    assert!(sky.promo_venue);
    assert!((sky.google_rating - 5.0).abs() < 1e-9);

    let lpm = &venues[1];
    assert_eq!(lpm.cuisine, "French, Mediterranean");
    assert_eq!(lpm.signature_dish, "Warm prawns in olive oil");
    assert!(!lpm.promo_venue);
    assert_eq!(lpm.indoor_outdoor, IndoorOutdoor::Indoor);

    let tresind = &venues[3];
    assert_eq!(tresind.price_per_person, 1200);
    assert!(!tresind.promo_venue);
}

#[test]
fn sample_menu_attaches_to_known_venues() {
    let venues = parse_venues(&data_file("venues.csv"));
    let items = parse_menu_items(&data_file("menu.csv"), &venues);

    let ids: Vec<&str> = items.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m-1", "m-2", "m-3", "m-4", "m-5", "m-6", "m-8"]);

    let nachos = &items[3];
    assert_eq!(nachos.venue_name, "Bla Bla");
    assert_eq!(nachos.dietary_tags, vec!["Vegetarian"]);

    let sea_bass = &items[1];
    assert_eq!(sea_bass.description, "Lemon, capers, \"Sky\" herb oil");

    let shakshuka = &items[6];
    assert_eq!(shakshuka.venue_name, "Cafe Nomad");
    assert_eq!(shakshuka.dietary_tags, vec!["Vegetarian"]);
}

#[test]
fn sample_menu_groups_by_venue() {
    let venues = parse_venues(&data_file("venues.csv"));
    let items = parse_menu_items(&data_file("menu.csv"), &venues);

    let zuma = venues
        .iter()
        .find(|v| v.name == "Zuma")
        .expect("Zuma is in the sample table");
    let dishes: Vec<&str> = menu_for_venue(&items, zuma)
        .iter()
        .map(|m| m.item.as_str())
        .collect();
    assert_eq!(dishes, vec!["Miso Black Cod", "Green Tea Cake"]);
}
