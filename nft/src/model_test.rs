use serde_json::json;

use super::*;

#[test]
fn metadata_from_nft_data() {
    let data = json!({
        "id": 7,
        "traits": { "Type": "Water", "Gender": "Woman", "Level": 3 },
        "parts": { "Hair": "Long", "Eyes": "Blue" }
    });

    let meta = GodMetadata::from_nft_data(&data).expect("metadata");

    assert_eq!(meta.element, ElementType::Water);
    assert_eq!(meta.gender, Gender::Woman);
    assert_eq!(meta.parts.get("Hair").map(String::as_str), Some("Long"));
    assert_eq!(meta.parts.len(), 2);
}

#[test]
fn missing_trait_reports_exact_message() {
    for data in [
        json!({}),
        json!({ "traits": { "Type": "Fire" } }),
        json!({ "traits": { "Gender": "Man" } }),
        json!({ "traits": { "Type": "", "Gender": "Man" } }),
    ] {
        let err = GodMetadata::from_nft_data(&data).expect_err("should fail");
        assert_eq!(err.to_string(), "Type/Gender is missing.");
    }
}

#[test]
fn unknown_trait_values_are_rejected() {
    let err = GodMetadata::from_nft_data(&json!({ "traits": { "Type": "Lava", "Gender": "Man" } }));
    assert_eq!(err, Err(MetadataError::UnknownType("Lava".to_owned())));
}

#[test]
fn missing_parts_default_to_empty() {
    let meta = GodMetadata::from_nft_data(&json!({ "traits": { "Type": "Stone", "Gender": "Man" } })).expect("metadata");
    assert!(meta.parts.is_empty());
}

#[test]
fn apply_to_rewrites_traits_and_parts_only() {
    let mut data = json!({
        "id": "5",
        "name": "Keeper",
        "traits": { "Type": "Stone", "Gender": "Man", "Level": 2 },
        "parts": { "Hair": "Short" }
    });
    let meta = GodMetadata {
        element: ElementType::Fire,
        gender: Gender::Woman,
        parts: [("Eyes".to_owned(), "Red".to_owned())].into_iter().collect(),
    };

    meta.apply_to(&mut data);

    assert_eq!(data["name"], "Keeper");
    assert_eq!(data["traits"], json!({ "Type": "Fire", "Gender": "Woman", "Level": 2 }));
    assert_eq!(data["parts"], json!({ "Eyes": "Red" }));
    assert_eq!(GodMetadata::from_nft_data(&data), Ok(meta));
}

#[test]
fn detail_accepts_numeric_and_string_ids() {
    let numeric: NftDetail = serde_json::from_value(json!({ "id": 12 })).expect("detail");
    let text: NftDetail = serde_json::from_value(json!({ "id": "12" })).expect("detail");
    assert_eq!(numeric.id, "12");
    assert_eq!(numeric, text);
}

#[test]
fn detail_display_name_falls_back_to_id() {
    let mut detail: NftDetail = serde_json::from_value(json!({ "id": 3 })).expect("detail");
    assert_eq!(detail.display_name(), "God #3");

    detail.name = Some("Aegis".to_owned());
    assert_eq!(detail.display_name(), "Aegis");
}

#[test]
fn detail_trait_entries_render_numbers() {
    let detail: NftDetail =
        serde_json::from_value(json!({ "id": 1, "traits": { "Type": "Fire", "Level": 4 } })).expect("detail");
    assert_eq!(
        detail.trait_entries(),
        vec![("Level".to_owned(), "4".to_owned()), ("Type".to_owned(), "Fire".to_owned())]
    );
}

#[test]
fn detail_metadata_round_trips_through_json() {
    let detail: NftDetail = serde_json::from_value(json!({
        "id": 9,
        "traits": { "Type": "Fire", "Gender": "Man" },
        "parts": { "Body": "Armor" },
        "holder": "0xAbC"
    }))
    .expect("detail");

    let meta = detail.metadata().expect("metadata");
    assert_eq!(meta.element, ElementType::Fire);
    assert_eq!(meta.parts.get("Body").map(String::as_str), Some("Armor"));
}

#[test]
fn held_nft_title_uses_type() {
    let held: HeldNft =
        serde_json::from_value(json!({ "id": 44, "type": "Water", "collection": "The Gods" })).expect("held");
    assert_eq!(held.title(), "Water #44");

    let bare: HeldNft = serde_json::from_value(json!({ "id": "45" })).expect("held");
    assert_eq!(bare.title(), "NFT #45");
    assert_eq!(bare.collection, "");
}

#[test]
fn trait_options_cover_every_variant() {
    let options = TraitOptions::default();
    let types: Vec<_> = options.types.iter().map(|t| t.as_str()).collect();
    let genders: Vec<_> = options.genders.iter().map(|g| g.as_str()).collect();
    assert_eq!(types, ["Stone", "Fire", "Water"]);
    assert_eq!(genders, ["Man", "Woman"]);
}
