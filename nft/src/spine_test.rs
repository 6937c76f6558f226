use super::*;
use crate::model::Gender;

fn meta(element: ElementType, gender: Gender, parts: &[(&str, &str)]) -> GodMetadata {
    GodMetadata {
        element,
        gender,
        parts: parts.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
    }
}

#[test]
fn fire_uses_single_texture() {
    let assets = SpineAssets::for_metadata(&meta(ElementType::Fire, Gender::Man, &[]));

    assert_eq!(assets.base, "/spine-files/god-fire-man");
    assert_eq!(assets.skeleton, "/spine-files/god-fire-man.json");
    assert_eq!(assets.atlas, "/spine-files/god-fire-man.atlas");
    assert_eq!(assets.textures, TextureSet::Single("/spine-files/god-fire-man.png".to_owned()));
}

#[test]
fn water_maps_three_texture_pages() {
    let assets = SpineAssets::for_metadata(&meta(ElementType::Water, Gender::Woman, &[]));

    assert_eq!(
        assets.textures,
        TextureSet::Pages(vec![
            ("water-woman.png".to_owned(), "/spine-files/god-water-woman.png".to_owned()),
            ("water-woman_2.png".to_owned(), "/spine-files/god-water-woman-2.png".to_owned()),
            ("water-woman_3.png".to_owned(), "/spine-files/god-water-woman-3.png".to_owned()),
        ])
    );
    assert_eq!(
        assets.preload_paths(),
        [
            "/spine-files/god-water-woman.json",
            "/spine-files/god-water-woman.atlas",
            "/spine-files/god-water-woman.png",
            "/spine-files/god-water-woman-2.png",
            "/spine-files/god-water-woman-3.png",
        ]
    );
}

#[test]
fn skins_follow_selected_parts() {
    let assets = SpineAssets::for_metadata(&meta(
        ElementType::Stone,
        Gender::Woman,
        &[("Hair", "Braid"), ("Body", "Robe"), ("Mask", "")],
    ));

    assert_eq!(assets.skins, ["Body/Robe", "Hair/Braid"]);
    assert_eq!(assets.animation, "animation");
    assert_eq!(assets.touch_animation, "touched");
}

#[test]
fn serializes_for_the_viewer_script() {
    let assets = SpineAssets::for_metadata(&meta(ElementType::Stone, Gender::Man, &[]));
    let json = serde_json::to_value(&assets).expect("json");

    assert_eq!(json["textures"], "/spine-files/god-stone-man.png");
    assert_eq!(json["touchAnimation"], "touched");
}
