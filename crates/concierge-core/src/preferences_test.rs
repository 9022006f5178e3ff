use super::*;

use serde_json::json;

#[test]
fn from_json_empty_object_is_unconstrained() {
    let prefs = UserPreferences::from_json(json!({})).unwrap();
    assert_eq!(prefs, UserPreferences::default());
    assert!(prefs.venue_name_query().is_none());
    assert!(prefs.area_query().is_none());
    assert!(!prefs.wants_romantic());
}

#[test]
fn from_json_reads_camel_case_fields() {
    let prefs = UserPreferences::from_json(json!({
        "venueName": "Zuma",
        "mealType": "lunch",
        "budget": 400,
        "cuisine": ["Japanese", "Sushi"],
        "vibe": { "romantic": true, "loudness": "quiet" },
        "indoorOutdoor": "Outdoor",
        "lookingForPromo": true
    }))
    .unwrap();

    assert_eq!(prefs.venue_name.as_deref(), Some("Zuma"));
    assert_eq!(prefs.meal_type, Some(MealType::Lunch));
    assert_eq!(prefs.budget, Some(400));
    assert_eq!(prefs.cuisine, vec!["Japanese", "Sushi"]);
    assert!(prefs.wants_romantic());
    assert!(!prefs.wants_party());
    assert_eq!(
        prefs.vibe.as_ref().and_then(|v| v.loudness),
        Some(Loudness::Quiet)
    );
    assert_eq!(prefs.indoor_outdoor, Some(SeatingPreference::Outdoor));
    assert_eq!(prefs.looking_for_promo, Some(true));
}

#[test]
fn from_json_ignores_unknown_keys() {
    let prefs = UserPreferences::from_json(json!({ "area": "Marina", "userNotes": "window" }))
        .unwrap();
    assert_eq!(prefs.area_query(), Some("Marina"));
}

#[test]
fn from_json_rejects_unknown_meal_type() {
    let err = UserPreferences::from_json(json!({ "mealType": "brunch" })).unwrap_err();
    assert!(matches!(err, CoreError::InvalidPreferences(_)));
}

#[test]
fn from_json_rejects_wrong_budget_type() {
    let result = UserPreferences::from_json(json!({ "budget": "cheap" }));
    assert!(result.is_err(), "expected error, got: {result:?}");
}

#[test]
fn from_json_floors_fractional_budget() {
    let prefs = UserPreferences::from_json(json!({ "budget": 350.5 })).unwrap();
    assert_eq!(prefs.budget, Some(350));
}

#[test]
fn from_json_accepts_null_budget() {
    let prefs = UserPreferences::from_json(json!({ "budget": null })).unwrap();
    assert_eq!(prefs.budget, None);
}

#[test]
fn from_json_rejects_negative_budget() {
    let result = UserPreferences::from_json(json!({ "budget": -5 }));
    assert!(result.is_err(), "expected error, got: {result:?}");
}

#[test]
fn blank_strings_count_as_absent() {
    let prefs = UserPreferences {
        venue_name: Some("   ".to_string()),
        area: Some(String::new()),
        ..UserPreferences::default()
    };
    assert!(prefs.venue_name_query().is_none());
    assert!(prefs.area_query().is_none());
}

#[test]
fn area_query_is_trimmed() {
    let prefs = UserPreferences {
        area: Some("  Downtown ".to_string()),
        ..UserPreferences::default()
    };
    assert_eq!(prefs.area_query(), Some("Downtown"));
}

#[test]
fn zero_budget_counts_as_absent() {
    let prefs = UserPreferences {
        budget: Some(0),
        ..UserPreferences::default()
    };
    assert!(prefs.budget_ceiling().is_none());
}

#[test]
fn merge_newer_fields_win() {
    let older = UserPreferences {
        area: Some("Marina".to_string()),
        budget: Some(300),
        cuisine: vec!["Italian".to_string()],
        ..UserPreferences::default()
    };
    let newer = UserPreferences {
        area: Some("JBR".to_string()),
        ..UserPreferences::default()
    };
    let merged = older.merge(newer);
    assert_eq!(merged.area.as_deref(), Some("JBR"));
    assert_eq!(merged.budget, Some(300));
    assert_eq!(merged.cuisine, vec!["Italian"]);
}

#[test]
fn merge_combines_vibe_flags() {
    let older = UserPreferences {
        vibe: Some(VibePreferences {
            romantic: Some(true),
            ..VibePreferences::default()
        }),
        ..UserPreferences::default()
    };
    let newer = UserPreferences {
        vibe: Some(VibePreferences {
            party: Some(true),
            ..VibePreferences::default()
        }),
        ..UserPreferences::default()
    };
    let merged = older.merge(newer);
    assert!(merged.wants_romantic());
    assert!(merged.wants_party());
}

#[test]
fn merge_newer_cuisine_replaces_list() {
    let older = UserPreferences {
        cuisine: vec!["Italian".to_string()],
        ..UserPreferences::default()
    };
    let newer = UserPreferences {
        cuisine: vec!["Thai".to_string()],
        ..UserPreferences::default()
    };
    assert_eq!(older.merge(newer).cuisine, vec!["Thai"]);
}
