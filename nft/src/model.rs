//! NFT records and the editable God metadata.
//!
//! DESIGN
//! ======
//! The Gaia API hands back loosely typed JSON: ids arrive as numbers or
//! strings, trait values as strings or numbers. Records keep that shape
//! (`traits` stays a JSON map) so the metadata panel can show every trait,
//! while [`GodMetadata`] is the strict view the viewer and editor need.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::MetadataError;

// =============================================================================
// TRAITS
// =============================================================================

/// Element trait, stored as `traits.Type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Stone,
    Fire,
    Water,
}

impl ElementType {
    pub const ALL: [Self; 3] = [Self::Stone, Self::Fire, Self::Water];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stone => "Stone",
            Self::Fire => "Fire",
            Self::Water => "Water",
        }
    }

    /// Lower-case form used in asset paths.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Stone => "stone",
            Self::Fire => "fire",
            Self::Water => "water",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == raw)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender trait, stored as `traits.Gender`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    pub const ALL: [Self; 2] = [Self::Man, Self::Woman];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Man => "Man",
            Self::Woman => "Woman",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Man => "man",
            Self::Woman => "woman",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == raw)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Choices the attribute editor offers for the two fixed traits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraitOptions {
    pub types: &'static [ElementType],
    pub genders: &'static [Gender],
}

impl Default for TraitOptions {
    fn default() -> Self {
        Self { types: &ElementType::ALL, genders: &Gender::ALL }
    }
}

// =============================================================================
// METADATA
// =============================================================================

/// Type, gender, and the selected part per category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GodMetadata {
    #[serde(rename = "type")]
    pub element: ElementType,
    pub gender: Gender,
    #[serde(default)]
    pub parts: BTreeMap<String, String>,
}

impl GodMetadata {
    /// Extract metadata from raw NFT data (`{ traits: { Type, Gender }, parts }`).
    ///
    /// # Errors
    ///
    /// [`MetadataError::MissingTypeOrGender`] when either trait is absent or
    /// empty; `Unknown*` when a value is outside the known set.
    pub fn from_nft_data(data: &Value) -> Result<Self, MetadataError> {
        let traits = data.get("traits");
        let element = trait_str(traits, "Type");
        let gender = trait_str(traits, "Gender");
        let (Some(element), Some(gender)) = (element, gender) else {
            return Err(MetadataError::MissingTypeOrGender);
        };

        let element = ElementType::parse(element).ok_or_else(|| MetadataError::UnknownType(element.to_owned()))?;
        let gender = Gender::parse(gender).ok_or_else(|| MetadataError::UnknownGender(gender.to_owned()))?;
        let parts = data.get("parts").map(parts_from_value).unwrap_or_default();

        Ok(Self { element, gender, parts })
    }

    /// Write this metadata back into `data`, keeping unrelated fields.
    pub fn apply_to(&self, data: &mut Value) {
        if !data.is_object() {
            *data = Value::Object(Map::new());
        }
        let Some(obj) = data.as_object_mut() else {
            return;
        };

        let traits = obj.entry("traits").or_insert_with(|| Value::Object(Map::new()));
        if !traits.is_object() {
            *traits = Value::Object(Map::new());
        }
        if let Some(traits) = traits.as_object_mut() {
            traits.insert("Type".to_owned(), Value::from(self.element.as_str()));
            traits.insert("Gender".to_owned(), Value::from(self.gender.as_str()));
        }

        let parts = self
            .parts
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
            .collect::<Map<_, _>>();
        obj.insert("parts".to_owned(), Value::Object(parts));
    }
}

fn trait_str<'a>(traits: Option<&'a Value>, key: &str) -> Option<&'a str> {
    traits?.get(key)?.as_str().filter(|s| !s.is_empty())
}

fn parts_from_value(value: &Value) -> BTreeMap<String, String> {
    let Some(obj) = value.as_object() else {
        return BTreeMap::new();
    };
    obj.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_owned())))
        .collect()
}

// =============================================================================
// RECORDS
// =============================================================================

/// One God as returned by `GET /gods/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NftDetail {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub traits: BTreeMap<String, Value>,
    #[serde(default)]
    pub parts: BTreeMap<String, String>,
    #[serde(default)]
    pub holder: Option<String>,
}

impl NftDetail {
    /// `name`, or `God #<id>` when the record has none.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("God #{}", self.id),
        }
    }

    /// Trait entries as display strings, in key order.
    #[must_use]
    pub fn trait_entries(&self) -> Vec<(String, String)> {
        self.traits.iter().map(|(k, v)| (k.clone(), display_value(v))).collect()
    }

    /// The record as raw JSON, the shape the editor works on.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// # Errors
    ///
    /// See [`GodMetadata::from_nft_data`].
    pub fn metadata(&self) -> Result<GodMetadata, MetadataError> {
        GodMetadata::from_nft_data(&self.to_value())
    }
}

/// Entry of `GET /gods/held/{address}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldNft {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub collection: String,
}

impl HeldNft {
    /// Card title such as `Fire #12`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} #{}", self.kind.as_deref().unwrap_or("NFT"), self.id)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_owned(),
        other => other.to_string(),
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
