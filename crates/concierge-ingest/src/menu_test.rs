use super::*;

const HEADER: &str = "venue_slug,course,item,description,price,dietary_tags";

fn venue(id: &str, name: &str) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        image_address: format!("https://img.example.com/{id}.jpg"),
        ..Venue::default()
    }
}

fn venues() -> Vec<Venue> {
    vec![venue("1", "Sky Lounge"), venue("2", "La Petite Maison")]
}

// -----------------------------------------------------------------------
// normalize_key
// -----------------------------------------------------------------------

#[test]
fn normalize_key_strips_punctuation_and_case() {
    assert_eq!(normalize_key("Sky Lounge"), "skylounge");
    assert_eq!(normalize_key("sky-lounge"), "skylounge");
    assert_eq!(normalize_key("SKY_LOUNGE!"), "skylounge");
    assert_eq!(normalize_key("Café 21"), "caf21");
}

// -----------------------------------------------------------------------
// parse_menu_items
// -----------------------------------------------------------------------

#[test]
fn matches_slug_by_normalized_name() {
    let text = format!(
        "{HEADER}\nsky-lounge,Mains,Wagyu Sliders,\"Brioche, truffle mayo\",95,Contains Gluten; Signature\n"
    );
    let items = parse_menu_items(&text, &venues());
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.id, "m-1");
    assert_eq!(item.venue_slug, "sky-lounge");
    assert_eq!(item.venue_name, "Sky Lounge");
    assert_eq!(item.venue_image, "https://img.example.com/1.jpg");
    assert_eq!(item.course, "Mains");
    assert_eq!(item.item, "Wagyu Sliders");
    assert_eq!(item.description, "Brioche, truffle mayo");
    assert!((item.price - 95.0).abs() < f64::EPSILON);
    assert_eq!(item.dietary_tags, vec!["Contains Gluten", "Signature"]);
}

#[test]
fn unmatched_slug_produces_no_item() {
    let text = format!("{HEADER}\nsky,Mains,Dish,Desc,10,\nunknown-bar,Mains,Dish,Desc,10,\n");
    assert!(parse_menu_items(&text, &venues()).is_empty());
}

#[test]
fn ids_follow_source_row_numbers() {
    let text = format!(
        "{HEADER}\nnowhere,Mains,A,,1,\nla petite maison,Starters,B,,2,\nSKY LOUNGE,Desserts,C,,3,\n"
    );
    let items = parse_menu_items(&text, &venues());
    let ids: Vec<&str> = items.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m-2", "m-3"]);
}

#[test]
fn short_rows_are_skipped() {
    let text = format!("{HEADER}\nsky-lounge,Mains,Dish\n");
    assert!(parse_menu_items(&text, &venues()).is_empty());
}

#[test]
fn unreadable_price_is_zero() {
    let text = format!("{HEADER}\nsky-lounge,Mains,Dish,Desc,market price,\n");
    let items = parse_menu_items(&text, &venues());
    assert!(items[0].price.abs() < f64::EPSILON);
}

#[test]
fn missing_tag_column_is_empty() {
    let text = format!("{HEADER}\nsky-lounge,Mains,Dish,Desc,42\n");
    let items = parse_menu_items(&text, &venues());
    assert!(items[0].dietary_tags.is_empty());
}

#[test]
fn duplicate_venue_keys_use_first_venue() {
    let venues = vec![venue("1", "Sky Lounge"), venue("9", "SKY-LOUNGE")];
    let text = format!("{HEADER}\nskylounge,Mains,Dish,Desc,1,\n");
    let items = parse_menu_items(&text, &venues);
    assert_eq!(items[0].venue_name, "Sky Lounge");
}

// -----------------------------------------------------------------------
// field helpers
// -----------------------------------------------------------------------

#[test]
fn price_reads_leading_number() {
    assert!((parse_price("12.5 AED") - 12.5).abs() < f64::EPSILON);
    assert!((parse_price(" 40 ") - 40.0).abs() < f64::EPSILON);
    assert!(parse_price("").abs() < f64::EPSILON);
}

#[test]
fn tags_drop_blanks_and_repeats() {
    assert_eq!(
        parse_tags(" Vegan ;; Gluten Free; Vegan ;"),
        vec!["Vegan", "Gluten Free"]
    );
}

// -----------------------------------------------------------------------
// menu_for_venue
// -----------------------------------------------------------------------

fn item(id: &str, slug: &str, venue_name: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        venue_slug: slug.to_string(),
        venue_name: venue_name.to_string(),
        ..MenuItem::default()
    }
}

#[test]
fn menu_for_venue_accepts_partial_slugs() {
    let items = vec![
        item("m-1", "sky-lounge", "Sky Lounge"),
        item("m-2", "sky-lounge-rooftop", ""),
        item("m-3", "sky", ""),
        item("m-4", "other", "Other Place"),
        item("m-5", "", "Sky Lounge"),
    ];
    let ids: Vec<&str> = menu_for_venue(&items, &venue("1", "Sky Lounge"))
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(ids, vec!["m-1", "m-2", "m-3", "m-5"]);
}

#[test]
fn menu_for_venue_empty_slug_needs_name_match() {
    let items = vec![item("m-1", "", "")];
    assert!(menu_for_venue(&items, &venue("1", "Sky Lounge")).is_empty());
}
