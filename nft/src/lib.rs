//! Domain model for God NFTs.
//!
//! Pure data and mapping rules shared by the browser client and the server:
//! NFT records as the Gaia API returns them, the type/gender/parts metadata
//! the attribute editor changes, the save payload, and the mapping from
//! metadata to skeletal-animation asset paths.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`error`] | Metadata validation errors |
//! | [`links`] | Image, explorer and ownership helpers |
//! | [`model`] | NFT records and God metadata |
//! | [`route`] | `/god/:id` and `/god-viewer/:id` path parsing |
//! | [`save`] | Save-metadata request and error decoding |
//! | [`spine`] | Skeleton/atlas/texture/skin mapping |

pub mod error;
pub mod links;
pub mod model;
pub mod route;
pub mod save;
pub mod spine;

pub use error::MetadataError;
pub use links::{CONTRACT_ADDRESS, IMAGE_BASE_URL, explorer_url, image_url, is_owner};
pub use model::{ElementType, Gender, GodMetadata, HeldNft, NftDetail, TraitOptions};
pub use route::{parse_god_path, parse_viewer_id};
pub use save::{SaveMetadataRequest, save_error_message};
pub use spine::{IDLE_ANIMATION, SpineAssets, TOUCH_ANIMATION, TextureSet};
