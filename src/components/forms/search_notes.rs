use super::options::{FolderOptions, TagOptions};
use crate::components::hooks::{draft_field, use_draft};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, ErrorAlert, Input, LoadingLabel, NativeSelect,
};
use crate::drafts::{FormDraft, SearchDraft};
use crate::models::{Folder, Note, Tag};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Search bar with optional folder and tag filters.
///
/// Reports `(query, results)` on success; `on_clear` resets the page to the
/// plain listing.
#[component]
pub fn SearchNotes(
    #[prop(into)] folders: Signal<Vec<Folder>>,
    #[prop(into)] tags: Signal<Vec<Tag>>,
    on_results: Callback<(String, Vec<Note>)>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<AppContext>().0.api_client;

    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let (draft, on_field) = use_draft(SearchDraft::default(), error);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let d = draft.get_untracked();
        if d.validate().is_err() {
            return;
        }

        let query = d.query.trim().to_string();
        let (folder_id, tag_id) = (d.folder(), d.tag());
        let api_client = api.get_untracked();
        loading.set(true);

        spawn_local(async move {
            match api_client.search_notes(&query, folder_id, tag_id).await {
                Ok(results) => {
                    loading.set(false);
                    log::debug!("search {query:?} returned {} notes", results.len());
                    on_results.run((query, results));
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    loading.set(false);
                }
            }
        });
    };

    let on_clear_click = move |_: leptos::ev::MouseEvent| {
        draft.set(SearchDraft::default());
        error.set(None);
        on_clear.run(());
    };

    let can_search = move || draft.with(|d| d.can_search());
    let can_clear = move || draft.with(|d| d.can_clear());
    let selected_folder = draft_field(draft, |d| d.folder_id.clone());
    let selected_tag = draft_field(draft, |d| d.tag_id.clone());

    view! {
        <form class="flex flex-col gap-2" on:submit=on_submit>
            <div class="flex flex-wrap gap-2">
                <Input
                    class="flex-1 min-w-40"
                    r#type="search"
                    name="query"
                    placeholder="Search notes..."
                    value=draft_field(draft, |d| d.query.clone())
                    disabled=loading
                    on_input=on_field
                />
                <NativeSelect
                    class="w-40"
                    name="folder_id"
                    value=selected_folder
                    disabled=loading
                    on_change=on_field
                >
                    <option value="">"All folders"</option>
                    <FolderOptions folders=folders selected=selected_folder />
                </NativeSelect>
                <NativeSelect
                    class="w-40"
                    name="tag_id"
                    value=selected_tag
                    disabled=loading
                    on_change=on_field
                >
                    <option value="">"All tags"</option>
                    <TagOptions tags=tags selected=selected_tag />
                </NativeSelect>
                <Button
                    size=ButtonSize::Sm
                    class="h-9"
                    attr:disabled=move || loading.get() || !can_search()
                >
                    <LoadingLabel loading=loading idle="Search" busy="Searching..." />
                </Button>
                <Show when=can_clear fallback=|| ().into_view()>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        class="h-9"
                        attr:r#type="button"
                        attr:disabled=move || loading.get()
                        on:click=on_clear_click
                    >
                        "Clear"
                    </Button>
                </Show>
            </div>
            <ErrorAlert error=error />
        </form>
    }
}
