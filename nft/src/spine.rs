//! Skeletal-animation asset mapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every type/gender pair ships one Spine export under `/spine-files`:
//! `god-{type}-{gender}.json`, `.atlas`, and its texture pages. The viewer
//! preloads all of them, builds the skeleton with one skin per selected
//! part, loops the idle animation and plays the touch animation on click.
//!
//! Water exports are split across three texture pages whose atlas names
//! differ from the file names on disk; every other export has one page.

#[cfg(test)]
#[path = "spine_test.rs"]
mod spine_test;

use serde::Serialize;

use crate::model::{ElementType, GodMetadata};

pub const SPINE_ROOT: &str = "/spine-files";
pub const IDLE_ANIMATION: &str = "animation";
pub const TOUCH_ANIMATION: &str = "touched";

/// Texture pages for one export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextureSet {
    /// A single page at this path.
    Single(String),
    /// `(atlas page name, served path)` pairs.
    Pages(Vec<(String, String)>),
}

impl TextureSet {
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        match self {
            Self::Single(path) => vec![path.clone()],
            Self::Pages(pages) => pages.iter().map(|(_, path)| path.clone()).collect(),
        }
    }
}

/// Everything the viewer needs to load and pose one God.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpineAssets {
    pub base: String,
    pub skeleton: String,
    pub atlas: String,
    pub textures: TextureSet,
    pub skins: Vec<String>,
    pub animation: &'static str,
    pub touch_animation: &'static str,
}

impl SpineAssets {
    #[must_use]
    pub fn for_metadata(metadata: &GodMetadata) -> Self {
        let gender = metadata.gender.slug();
        let base = format!("{SPINE_ROOT}/god-{}-{gender}", metadata.element.slug());

        let textures = if metadata.element == ElementType::Water {
            TextureSet::Pages(vec![
                (format!("water-{gender}.png"), format!("{base}.png")),
                (format!("water-{gender}_2.png"), format!("{base}-2.png")),
                (format!("water-{gender}_3.png"), format!("{base}-3.png")),
            ])
        } else {
            TextureSet::Single(format!("{base}.png"))
        };

        let skins = metadata
            .parts
            .iter()
            .filter(|(_, part)| !part.is_empty())
            .map(|(category, part)| format!("{category}/{part}"))
            .collect();

        Self {
            skeleton: format!("{base}.json"),
            atlas: format!("{base}.atlas"),
            base,
            textures,
            skins,
            animation: IDLE_ANIMATION,
            touch_animation: TOUCH_ANIMATION,
        }
    }

    /// Skeleton, atlas, then texture pages.
    #[must_use]
    pub fn preload_paths(&self) -> Vec<String> {
        let mut paths = vec![self.skeleton.clone(), self.atlas.clone()];
        paths.extend(self.textures.paths());
        paths
    }
}
