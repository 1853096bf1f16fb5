use crate::components::hooks::{draft_field, use_draft};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, ErrorAlert, Field, Input, LoadingLabel,
};
use crate::drafts::{FolderDraft, FormDraft, FOLDER_NAME_MAX};
use crate::models::Folder;
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Collapsed "+ New Folder" button that expands into a name/color form.
#[component]
pub fn CreateFolder(on_created: Callback<Folder>) -> impl IntoView {
    let api = expect_context::<AppContext>().0.api_client;

    let show_form: RwSignal<bool> = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let (draft, on_field) = use_draft(FolderDraft::default(), error);

    let close = move || {
        show_form.set(false);
        draft.set(FolderDraft::default());
        error.set(None);
    };

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
            match api_client.create_folder(&req).await {
                Ok(folder) => {
                    loading.set(false);
                    close();
                    on_created.run(folder);
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <Show
            when=move || show_form.get()
            fallback=move || {
                view! {
                    <Button
                        class="w-full"
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        attr:r#type="button"
                        on:click=move |_| show_form.set(true)
                    >
                        "+ New Folder"
                    </Button>
                }
            }
        >
            <form class="flex flex-col gap-2 rounded-md border p-2" on:submit=on_submit>
                <ErrorAlert error=error />

                <Field label="Folder name" html_for="folder-name">
                    <Input
                        id="folder-name"
                        name="name"
                        placeholder="Folder name"
                        maxlength=FOLDER_NAME_MAX
                        value=draft_field(draft, |d| d.name.clone())
                        disabled=loading
                        on_input=on_field
                    />
                </Field>

                <Field label="Color" html_for="folder-color">
                    <Input
                        id="folder-color"
                        r#type="color"
                        class="h-8 w-16 p-1"
                        name="color"
                        value=draft_field(draft, |d| d.color.clone())
                        disabled=loading
                        on_input=on_field
                    />
                </Field>

                <div class="flex gap-2">
                    <Button size=ButtonSize::Sm attr:disabled=move || loading.get()>
                        <LoadingLabel loading=loading idle="Create" busy="Creating..." />
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        attr:r#type="button"
                        attr:disabled=move || loading.get()
                        on:click=move |_| close()
                    >
                        "Cancel"
                    </Button>
                </div>
            </form>
        </Show>
    }
}
