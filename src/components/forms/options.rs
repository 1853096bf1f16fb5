use crate::models::{Folder, Tag};
use leptos::prelude::*;

/// `<option>` list for a folder `<select>`; marks the one matching `selected`.
#[component]
pub(super) fn FolderOptions(
    #[prop(into)] folders: Signal<Vec<Folder>>,
    #[prop(into)] selected: Signal<String>,
) -> impl IntoView {
    view! {
        <For
            each=move || folders.get()
            key=|f: &Folder| (f.id, f.name.clone())
            children=move |f: Folder| {
                let value = f.id.to_string();
                let is_selected = {
                    let value = value.clone();
                    move || selected.with(|s| *s == value)
                };
                view! {
                    <option value=value selected=is_selected>
                        {f.name}
                    </option>
                }
            }
        />
    }
}

#[component]
pub(super) fn TagOptions(
    #[prop(into)] tags: Signal<Vec<Tag>>,
    #[prop(into)] selected: Signal<String>,
) -> impl IntoView {
    view! {
        <For
            each=move || tags.get()
            key=|t: &Tag| t.id
            children=move |t: Tag| {
                let value = t.id.to_string();
                let is_selected = {
                    let value = value.clone();
                    move || selected.with(|s| *s == value)
                };
                view! {
                    <option value=value selected=is_selected>
                        {t.name}
                    </option>
                }
            }
        />
    }
}
