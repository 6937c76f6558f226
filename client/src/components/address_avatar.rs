//! Round avatar plus short address for a wallet.

use leptos::prelude::*;
use session::Address;

use crate::state::session::{avatar_hue, avatar_initials};

#[component]
pub fn AddressAvatar(address: Address, #[prop(optional)] small: bool) -> impl IntoView {
    let hue = avatar_hue(Some(&address));
    let initials = avatar_initials(Some(&address));

    view! {
        <span class="address-avatar" class:address-avatar--small=small>
            <span class="avatar" style=format!("background: hsl({hue}, 60%, 45%)")>{initials}</span>
            <span class="address-avatar__short">{address.short()}</span>
        </span>
    }
}
