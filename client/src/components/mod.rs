//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the header, dialogs, and God surfaces while reading
//! shared session state from Leptos context providers.

pub mod address_avatar;
pub mod attribute_editor;
pub mod auth_required;
pub mod connect_button;
pub mod god_viewer;
pub mod nft_card;
pub mod signature_dialog;
pub mod toast_stack;
