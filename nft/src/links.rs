//! Image, explorer and ownership helpers.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use session::Address;
use url::Url;

/// CDN that relative image names are served from.
pub const IMAGE_BASE_URL: &str = "https://god-images.gaia.cc/";

/// The Gods collection contract on Ethereum mainnet.
pub const CONTRACT_ADDRESS: &str = "0x134590acb661da2b318bcde6b39ef5cf8208e372";

/// Absolute image URL for an API image field. Empty stays empty.
#[must_use]
pub fn image_url(image: &str) -> String {
    if image.is_empty() {
        return String::new();
    }
    match Url::parse(image) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{IMAGE_BASE_URL}{image}"),
    }
}

/// Block explorer page for a token id.
#[must_use]
pub fn explorer_url(id: &str) -> String {
    format!("https://etherscan.io/nft/{CONTRACT_ADDRESS}/{id}")
}

/// Whether `viewer` holds the NFT, ignoring address case.
#[must_use]
pub fn is_owner(viewer: Option<&Address>, holder: Option<&str>) -> bool {
    match (viewer, holder) {
        (Some(viewer), Some(holder)) => viewer.matches(holder),
        _ => false,
    }
}
