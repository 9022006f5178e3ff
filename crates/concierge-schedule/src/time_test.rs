use super::*;

// -----------------------------------------------------------------------
// time_to_minutes
// -----------------------------------------------------------------------

#[test]
fn parses_24_hour_clock() {
    assert_eq!(time_to_minutes("19:30"), Ok(1170));
    assert_eq!(time_to_minutes("00:00"), Ok(0));
    assert_eq!(time_to_minutes("23:59"), Ok(1439));
}

#[test]
fn parses_12_hour_clock_with_minutes() {
    assert_eq!(time_to_minutes("7:30 PM"), Ok(1170));
    assert_eq!(time_to_minutes("7:30 am"), Ok(450));
}

#[test]
fn parses_bare_hour_with_meridiem() {
    assert_eq!(time_to_minutes("7 PM"), Ok(1140));
    assert_eq!(time_to_minutes("7pm"), Ok(1140));
    assert_eq!(time_to_minutes("11AM"), Ok(660));
}

#[test]
fn twelve_am_is_midnight() {
    assert_eq!(time_to_minutes("12 AM"), Ok(0));
    assert_eq!(time_to_minutes("12:30 AM"), Ok(30));
}

#[test]
fn twelve_pm_is_noon() {
    assert_eq!(time_to_minutes("12 PM"), Ok(720));
    assert_eq!(time_to_minutes("12:00"), Ok(720));
}

#[test]
fn twenty_four_hundred_is_midnight() {
    assert_eq!(time_to_minutes("24:00"), Ok(0));
}

#[test]
fn rejects_empty_and_garbage() {
    assert!(time_to_minutes("").is_err());
    assert!(time_to_minutes("PM").is_err());
    assert!(time_to_minutes("late").is_err());
    assert!(time_to_minutes("7:xx").is_err());
}

#[test]
fn rejects_out_of_range() {
    assert!(time_to_minutes("25:00").is_err());
    assert!(time_to_minutes("10:75").is_err());
    assert!(time_to_minutes("13 PM").is_err());
}

#[test]
fn error_names_the_input() {
    let err = time_to_minutes("noonish").unwrap_err();
    assert!(err.to_string().contains("noonish"));
}

// -----------------------------------------------------------------------
// formatting
// -----------------------------------------------------------------------

#[test]
fn formats_12_hour_text() {
    assert_eq!(format_minutes_12h(0), "12:00 AM");
    assert_eq!(format_minutes_12h(720), "12:00 PM");
    assert_eq!(format_minutes_12h(1170), "7:30 PM");
    assert_eq!(format_minutes_12h(1530), "1:30 AM");
}

#[test]
fn formats_24_hour_text() {
    assert_eq!(format_minutes_24h(0), "00:00");
    assert_eq!(format_minutes_24h(840), "14:00");
    assert_eq!(format_minutes_24h(1560), "02:00");
}

#[test]
fn every_minute_survives_12_hour_formatting() {
    for m in 0..MINUTES_PER_DAY {
        let text = format_minutes_12h(m);
        assert_eq!(time_to_minutes(&text), Ok(m), "round trip failed for {text}");
    }
}

#[test]
fn every_minute_survives_24_hour_formatting() {
    for m in 0..MINUTES_PER_DAY {
        assert_eq!(time_to_minutes(&format_minutes_24h(m)), Ok(m));
    }
}
