//! Type / gender / parts editor for an owned God.

#[cfg(test)]
#[path = "attribute_editor_test.rs"]
mod attribute_editor_test;

use leptos::prelude::*;
use nft::{ElementType, Gender, GodMetadata, TraitOptions};

/// One edit the user can make.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeEdit {
    Element(ElementType),
    Gender(Gender),
    Part { category: String, value: String },
}

/// Apply `edit` to `metadata`, returning `None` when nothing changes.
pub fn apply_edit(metadata: &GodMetadata, edit: AttributeEdit) -> Option<GodMetadata> {
    let mut next = metadata.clone();
    match edit {
        AttributeEdit::Element(element) => next.element = element,
        AttributeEdit::Gender(gender) => next.gender = gender,
        AttributeEdit::Part { category, value } => {
            next.parts.insert(category, value.trim().to_owned());
        }
    }
    (next != *metadata).then_some(next)
}

#[component]
pub fn AttributeEditor(
    #[prop(into)] metadata: Signal<Option<GodMetadata>>,
    on_change: Callback<GodMetadata>,
) -> impl IntoView {
    let options = TraitOptions::default();
    let edit = move |e: AttributeEdit| {
        if let Some(next) = metadata.get_untracked().and_then(|m| apply_edit(&m, e)) {
            on_change.run(next);
        }
    };

    let on_type = move |ev| {
        if let Some(element) = ElementType::parse(&event_target_value(&ev)) {
            edit(AttributeEdit::Element(element));
        }
    };
    let on_gender = move |ev| {
        if let Some(gender) = Gender::parse(&event_target_value(&ev)) {
            edit(AttributeEdit::Gender(gender));
        }
    };

    view! {
        <div class="attribute-editor">
            <div class="attribute-editor__traits">
                <label>
                    <span>"Type"</span>
                    <select on:change=on_type prop:value=move || metadata.get().map(|m| m.element.as_str()).unwrap_or_default()>
                        {options
                            .types
                            .iter()
                            .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    <span>"Gender"</span>
                    <select on:change=on_gender prop:value=move || metadata.get().map(|m| m.gender.as_str()).unwrap_or_default()>
                        {options
                            .genders
                            .iter()
                            .map(|g| view! { <option value=g.as_str()>{g.as_str()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <div class="attribute-editor__parts">
                <For
                    each=move || metadata.get().map(|m| m.parts.into_keys().collect::<Vec<_>>()).unwrap_or_default()
                    key=Clone::clone
                    let:category
                >
                    {
                        let label = category.clone();
                        let value_key = category.clone();
                        view! {
                            <label>
                                <span>{label}</span>
                                <input
                                    type="text"
                                    prop:value=move || {
                                        metadata.get().and_then(|m| m.parts.get(&value_key).cloned()).unwrap_or_default()
                                    }
                                    on:change=move |ev| {
                                        edit(AttributeEdit::Part {
                                            category: category.clone(),
                                            value: event_target_value(&ev),
                                        });
                                    }
                                />
                            </label>
                        }
                    }
                </For>
            </div>
        </div>
    }
}
