//! Card for one held God on the My Gods grid.

use leptos::prelude::*;
use nft::{HeldNft, image_url};

/// A clickable card linking to `/god/:id`.
#[component]
pub fn NftCard(nft: HeldNft) -> impl IntoView {
    let href = format!("/god/{}", nft.id);
    let title = nft.title();
    let image = nft.image.as_deref().map(image_url);

    view! {
        <a class="nft-card" href=href>
            {match image {
                Some(src) => view! { <img class="nft-card__image" src=src alt=title.clone() loading="lazy" /> }.into_any(),
                None => view! { <div class="nft-card__image nft-card__image--empty"></div> }.into_any(),
            }}
            <span class="nft-card__title">{title}</span>
            <span class="nft-card__collection">{nft.collection}</span>
        </a>
    }
}
