/// Why NFT data could not be turned into [`crate::GodMetadata`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// `traits.Type` or `traits.Gender` absent or empty.
    #[error("Type/Gender is missing.")]
    MissingTypeOrGender,
    #[error("Unknown type: {0}")]
    UnknownType(String),
    #[error("Unknown gender: {0}")]
    UnknownGender(String),
}
