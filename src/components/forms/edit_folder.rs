use crate::components::hooks::{draft_field, use_draft};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, ErrorAlert, Input, LoadingLabel};
use crate::drafts::{FolderDraft, FormDraft, FOLDER_NAME_MAX};
use crate::models::Folder;
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Inline rename/recolor form shown in place of a sidebar folder row.
#[component]
pub fn EditFolder(folder: Folder, on_saved: Callback<Folder>, on_cancel: Callback<()>) -> impl IntoView {
    let api = expect_context::<AppContext>().0.api_client;

    let folder_id = folder.id;
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let (draft, on_field) = use_draft(FolderDraft::from_folder(&folder), error);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let d = draft.get_untracked();
        if let Err(msg) = d.validate() {
            error.set(Some(msg));
            return;
        }

        let req = d.to_request();
        let api_client = api.get_untracked();
        loading.set(true);

        spawn_local(async move {
            match api_client.update_folder(folder_id, &req).await {
                Ok(updated) => {
                    loading.try_set(false);
                    on_saved.run(updated);
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <form class="flex flex-col gap-2 rounded-md border p-2" on:submit=on_submit>
            <ErrorAlert error=error />
            <div class="flex items-center gap-1">
                <Input
                    class="h-8"
                    name="name"
                    maxlength=FOLDER_NAME_MAX
                    value=draft_field(draft, |d| d.name.clone())
                    disabled=loading
                    on_input=on_field
                />
                <Input
                    r#type="color"
                    class="h-8 w-10 shrink-0 p-1"
                    name="color"
                    value=draft_field(draft, |d| d.color.clone())
                    disabled=loading
                    on_input=on_field
                />
            </div>
            <div class="flex gap-2">
                <Button size=ButtonSize::Sm attr:disabled=move || loading.get()>
                    <LoadingLabel loading=loading idle="Save" busy="Saving..." />
                </Button>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    attr:r#type="button"
                    attr:disabled=move || loading.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
            </div>
        </form>
    }
}
