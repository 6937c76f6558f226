//! Save-metadata request body and error decoding.

#[cfg(test)]
#[path = "save_test.rs"]
mod save_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MetadataError;
use crate::model::{ElementType, Gender, GodMetadata};

/// Body of `POST {api}/save-metadata`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveMetadataRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub element: ElementType,
    pub gender: Gender,
    pub parts: BTreeMap<String, String>,
}

impl SaveMetadataRequest {
    #[must_use]
    pub fn new(id: impl Into<String>, metadata: GodMetadata) -> Self {
        let GodMetadata { element, gender, parts } = metadata;
        Self { id: id.into(), element, gender, parts }
    }

    /// Build the request from the editor's current NFT data.
    ///
    /// # Errors
    ///
    /// Propagates [`GodMetadata::from_nft_data`] failures, so a missing
    /// type or gender never reaches the network.
    pub fn from_nft_data(id: impl Into<String>, data: &Value) -> Result<Self, MetadataError> {
        Ok(Self::new(id, GodMetadata::from_nft_data(data)?))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Message to show for a failed save: the body's `error` field when it is
/// JSON with one, otherwise a generic message carrying the status.
#[must_use]
pub fn save_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| format!("Failed to save (HTTP {status})"))
}
