use super::*;

#[test]
fn god_path_yields_id() {
    assert_eq!(parse_god_path("/god/12").as_deref(), Some("12"));
    assert_eq!(parse_god_path("/god/12/").as_deref(), Some("12"));
    assert_eq!(parse_god_path("/god/12?tab=parts").as_deref(), Some("12"));
}

#[test]
fn god_path_is_percent_decoded() {
    assert_eq!(parse_god_path("/god/a%20b").as_deref(), Some("a b"));
}

#[test]
fn other_paths_are_invalid() {
    assert_eq!(parse_god_path("/god"), None);
    assert_eq!(parse_god_path("/god/"), None);
    assert_eq!(parse_god_path("/gods/1"), None);
    assert_eq!(parse_god_path("/god-viewer/1"), None);
    assert_eq!(parse_god_path("/"), None);
}

#[test]
fn viewer_attribute_wins_over_path() {
    assert_eq!(parse_viewer_id(Some("99"), "/god-viewer/1").as_deref(), Some("99"));
    assert_eq!(parse_viewer_id(Some("9%2F9"), "/").as_deref(), Some("9/9"));
}

#[test]
fn viewer_falls_back_to_path() {
    assert_eq!(parse_viewer_id(None, "/god-viewer/5").as_deref(), Some("5"));
    assert_eq!(parse_viewer_id(Some(""), "/god-viewer/5").as_deref(), Some("5"));
    assert_eq!(parse_viewer_id(None, "/god-viewer"), None);
    assert_eq!(parse_viewer_id(None, "/god/5"), None);
}
