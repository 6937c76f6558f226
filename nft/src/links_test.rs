use super::*;

#[test]
fn absolute_image_urls_pass_through() {
    assert_eq!(image_url("https://cdn.example.com/gods/1.png"), "https://cdn.example.com/gods/1.png");
    assert_eq!(image_url("ipfs://QmHash/1.png"), "ipfs://QmHash/1.png");
}

#[test]
fn relative_image_names_use_cdn() {
    assert_eq!(image_url("1234.png"), "https://god-images.gaia.cc/1234.png");
    assert_eq!(image_url("fire/12.png"), "https://god-images.gaia.cc/fire/12.png");
}

#[test]
fn empty_image_stays_empty() {
    assert_eq!(image_url(""), "");
}

#[test]
fn explorer_points_at_collection_contract() {
    assert_eq!(
        explorer_url("77"),
        "https://etherscan.io/nft/0x134590acb661da2b318bcde6b39ef5cf8208e372/77"
    );
}

#[test]
fn ownership_ignores_case_and_needs_both_sides() {
    let viewer = Address::parse("0xABC0000000000000000000000000000000000001").expect("address");

    assert!(is_owner(Some(&viewer), Some("0xabc0000000000000000000000000000000000001")));
    assert!(is_owner(Some(&viewer), Some("0xAbC0000000000000000000000000000000000001")));
    assert!(!is_owner(Some(&viewer), Some("0xdef0000000000000000000000000000000000002")));
    assert!(!is_owner(None, Some("0xabc0000000000000000000000000000000000001")));
    assert!(!is_owner(Some(&viewer), None));
}
