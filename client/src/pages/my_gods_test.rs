use super::*;

fn held(id: &str) -> HeldNft {
    HeldNft { id: id.to_owned(), image: None, kind: Some("Stone".to_owned()), collection: "The Gods".to_owned() }
}

#[test]
fn count_is_zero_until_ready() {
    assert_eq!(held_count(&PageState::Loading), 0);
    assert_eq!(held_count(&PageState::AuthRequired), 0);
    assert_eq!(held_count(&PageState::Failed), 0);
}

#[test]
fn count_matches_ready_items() {
    assert_eq!(held_count(&PageState::Ready(vec![held("1"), held("2")])), 2);
    assert_eq!(held_count(&PageState::Ready(Vec::new())), 0);
}
