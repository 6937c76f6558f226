//! Public landing page for the collection.

#[cfg(test)]
#[path = "intro_test.rs"]
mod intro_test;

use leptos::prelude::*;

pub const OPENSEA_COLLECTION_URL: &str = "https://opensea.io/collection/gaia-protocol-gods";

/// One tab in the holder-benefits section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const BENEFITS: [Benefit; 6] = [
    Benefit {
        label: "Avatars",
        title: "Customizable Avatars",
        description: "Express your identity with highly customizable NFT avatars.",
        image: "https://common-resources.gaia.cc/covers/thegods.jpg",
    },
    Benefit {
        label: "Gaia Name",
        title: "Gaia Name",
        description: "Claim your unique Gaia Name used across the Gaia ecosystem.",
        image: "https://common-resources.gaia.cc/covers/gaia-names.png",
    },
    Benefit {
        label: "Personas",
        title: "Boosted Earnings in Gaia Personas",
        description: "Enjoy 200% trading revenue from Gaia Personas. (Coming soon)",
        image: "https://common-resources.gaia.cc/covers/gaia-personas.jpg",
    },
    Benefit {
        label: "Points",
        title: "Holding Points",
        description: "Earn 10,000 holding points per NFT to increase your trading rewards.",
        image: "https://common-resources.gaia.cc/covers/holding-points.jpg",
    },
    Benefit {
        label: "topic.trade",
        title: "Enhanced topic.trade Returns",
        description: "Up to 200% boosted trading revenue based on holding points. (Coming soon)",
        image: "https://common-resources.gaia.cc/covers/topictrade.jpg",
    },
    Benefit {
        label: "Clans",
        title: "Clan Operational Funding",
        description: "200% boosted clan funds based on member holding points. (Coming soon)",
        image: "https://common-resources.gaia.cc/covers/gaia-clans.jpg",
    },
];

#[component]
pub fn IntroPage() -> impl IntoView {
    let active = RwSignal::new(0_usize);

    view! {
        <div class="intro-page">
            <section class="intro-hero">
                <h1 class="intro-hero__title">"THE GODS"</h1>
                <p class="intro-hero__lead">
                    "A membership NFT collection of Gaia Protocol consisting of 3,333 NFTs. Highly customizable avatars and powerful benefits await."
                </p>
                <a class="btn btn--primary btn--large" href=OPENSEA_COLLECTION_URL target="_blank" rel="noopener noreferrer">
                    "View on OpenSea"
                </a>
            </section>

            <section class="intro-benefits">
                <h2>"Holder Benefits"</h2>
                <div class="tabs" role="tablist">
                    {BENEFITS
                        .iter()
                        .enumerate()
                        .map(|(i, benefit)| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || active.get() == i
                                    role="tab"
                                    on:click=move |_| active.set(i)
                                >
                                    {benefit.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let benefit = BENEFITS[active.get().min(BENEFITS.len() - 1)];
                    view! {
                        <article class="benefit-card" role="tabpanel">
                            <img class="benefit-card__image" src=benefit.image alt=benefit.title />
                            <strong class="benefit-card__title">{benefit.title}</strong>
                            <p class="benefit-card__description">{benefit.description}</p>
                        </article>
                    }
                }}
            </section>

            <footer class="intro-footer">
                <p>"© Gaia Protocol. All rights reserved."</p>
                <a href="https://x.com/TheGods_NFT" target="_blank" rel="noopener noreferrer">"X (Twitter)"</a>
            </footer>
        </div>
    }
}
