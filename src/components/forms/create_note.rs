use super::options::FolderOptions;
use crate::components::hooks::{draft_field, use_draft};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ErrorAlert,
    Field, Input, LoadingLabel, NativeSelect, Textarea,
};
use crate::drafts::{FormDraft, NoteDraft, NOTE_TITLE_MAX};
use crate::models::{Folder, Note};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CreateNote(
    #[prop(into)] folders: Signal<Vec<Folder>>,
    on_created: Callback<Note>,
) -> impl IntoView {
    let api = expect_context::<AppContext>().0.api_client;

    let show_form: RwSignal<bool> = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let (draft, on_field) = use_draft(NoteDraft::default(), error);

    let close = move || {
        show_form.set(false);
        draft.set(NoteDraft::default());
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
        let Some(req) = d.to_request() else {
            error.set(Some("Please select a folder".to_string()));
            return;
        };

        let api_client = api.get_untracked();
        loading.set(true);

        spawn_local(async move {
            match api_client.create_note(&req).await {
                Ok(note) => {
                    loading.set(false);
                    close();
                    on_created.run(note);
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    loading.set(false);
                }
            }
        });
    };

    let selected_folder = draft_field(draft, |d| d.folder_id.clone());

    view! {
        <Show
            when=move || show_form.get()
            fallback=move || {
                view! {
                    <Button size=ButtonSize::Sm attr:r#type="button" on:click=move |_| show_form.set(true)>
                        "+ New Note"
                    </Button>
                }
            }
        >
            <Card>
                <CardHeader>
                    <CardTitle>"New Note"</CardTitle>
                </CardHeader>
                <CardContent>
                    <form class="flex flex-col gap-3" on:submit=on_submit>
                        <ErrorAlert error=error />

                        <Field label="Title" html_for="note-title">
                            <Input
                                id="note-title"
                                name="title"
                                placeholder="Note title"
                                required=true
                                maxlength=NOTE_TITLE_MAX
                                value=draft_field(draft, |d| d.title.clone())
                                disabled=loading
                                on_input=on_field
                            />
                        </Field>

                        <Field label="Folder" html_for="note-folder">
                            <NativeSelect
                                id="note-folder"
                                name="folder_id"
                                required=true
                                value=selected_folder
                                disabled=loading
                                on_change=on_field
                            >
                                <option value="">"Select a folder"</option>
                                <FolderOptions folders=folders selected=selected_folder />
                            </NativeSelect>
                        </Field>

                        <Field label="Content" html_for="note-content">
                            <Textarea
                                id="note-content"
                                name="content"
                                placeholder="Write your note..."
                                value=draft_field(draft, |d| d.content.clone())
                                disabled=loading
                                on_input=on_field
                            />
                        </Field>

                        <div class="flex gap-2">
                            <Button size=ButtonSize::Sm attr:disabled=move || loading.get()>
                                <LoadingLabel loading=loading idle="Create Note" busy="Creating..." />
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
                </CardContent>
            </Card>
        </Show>
    }
}
