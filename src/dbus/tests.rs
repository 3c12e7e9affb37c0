use std::collections::HashMap;

use zbus::{
    names::OwnedBusName,
    zvariant::{OwnedValue, Value},
};

use super::*;

fn bus_name(name: &str) -> OwnedBusName {
    OwnedBusName::try_from(name).unwrap()
}

#[test]
fn allowlist_matches_all_players_by_default() {
    let name = bus_name("org.mpris.MediaPlayer2.spotify");
    assert!(matches_players(&name, &["all".to_string()]));
}

#[test]
fn allowlist_matches_on_bus_name_suffix() {
    let name = bus_name("org.mpris.MediaPlayer2.spotify");
    assert!(matches_players(&name, &["spotify".to_string()]));
    assert!(matches_players(&name, &["Spotify".to_string()]));
    assert!(!matches_players(&name, &["vlc".to_string()]));
    assert!(!matches_players(&name, &[]));
}

#[test]
fn title_is_extracted_from_metadata() {
    let metadata = HashMap::from([(
        "xesam:title".to_string(),
        OwnedValue::try_from(Value::from("Some Song")).unwrap(),
    )]);
    assert_eq!(track_title(&metadata), Some("Some Song"));
}

#[test]
fn missing_or_non_string_title_yields_none() {
    assert_eq!(track_title(&HashMap::new()), None);

    let metadata = HashMap::from([(
        "xesam:title".to_string(),
        OwnedValue::try_from(Value::from(42_i64)).unwrap(),
    )]);
    assert_eq!(track_title(&metadata), None);
}
