use super::options::FolderOptions;
use crate::components::hooks::{draft_field, use_draft};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, ErrorAlert,
    Field, Input, LoadingLabel, NativeSelect, Textarea,
};
use crate::drafts::{
    available_tags, tag_id_for_name, ConfirmGate, FormDraft, NoteDraft, NOTE_TITLE_MAX,
};
use crate::models::{Folder, Note, Tag};
use crate::state::AppContext;
use icons::X;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// What happened to the edited note once the editor is done with it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum EditOutcome {
    Updated(Note),
    Deleted(i64),
}

#[derive(Clone, Copy, Debug)]
enum TagOp {
    Attach(i64),
    Detach(i64),
}

/// Editor for one note.
///
/// The draft is seeded once from `note`; later changes to `note` (tag
/// attach/detach) only refresh the tag section.
#[component]
pub fn EditNote(
    #[prop(into)] note: Signal<Note>,
    #[prop(into)] folders: Signal<Vec<Folder>>,
    #[prop(into)] tags: Signal<Vec<Tag>>,
    on_outcome: Callback<EditOutcome>,
    on_refreshed: Callback<Note>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<AppContext>().0.api_client;

    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let confirm: RwSignal<ConfirmGate<i64>> = RwSignal::new(ConfirmGate::default());
    let (draft, on_field) = use_draft(NoteDraft::from_note(&note.get_untracked()), error);

    let note_id = move || note.with_untracked(|n| n.id);

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

        let id = note_id();
        let api_client = api.get_untracked();
        loading.set(true);

        spawn_local(async move {
            match api_client.update_note(id, &req).await {
                Ok(updated) => {
                    loading.try_set(false);
                    on_outcome.run(EditOutcome::Updated(updated));
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    loading.set(false);
                }
            }
        });
    };

    let on_delete_confirmed = move |_: leptos::ev::MouseEvent| {
        let id = note_id();
        let mut confirmed = false;
        confirm.update(|g| confirmed = g.take(id));
        if !confirmed {
            return;
        }

        error.set(None);
        let api_client = api.get_untracked();
        loading.set(true);

        spawn_local(async move {
            match api_client.delete_note(id).await {
                Ok(()) => {
                    loading.try_set(false);
                    on_outcome.run(EditOutcome::Deleted(id));
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    loading.set(false);
                }
            }
        });
    };

    // Attach/detach, then re-read the note so the tag list comes from the server.
    let run_tag_op = move |op: TagOp| {
        let id = note_id();
        let api_client = api.get_untracked();
        error.set(None);
        loading.set(true);

        spawn_local(async move {
            let changed = match op {
                TagOp::Attach(tag_id) => api_client.attach_tag(id, tag_id).await,
                TagOp::Detach(tag_id) => api_client.detach_tag(id, tag_id).await,
            };
            let refreshed = match changed {
                Ok(()) => api_client.get_note(id).await,
                Err(e) => Err(e),
            };

            loading.try_set(false);
            match refreshed {
                Ok(n) => on_refreshed.run(n),
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
        });
    };

    let on_remove_tag = move |name: String| {
        match tags.with_untracked(|all| tag_id_for_name(all, &name)) {
            Some(tag_id) => run_tag_op(TagOp::Detach(tag_id)),
            None => {
                log::warn!("tag {name:?} on note {} is not in the tag list", note_id());
                error.set(Some(format!("Unknown tag \"{name}\"")));
            }
        }
    };

    let attachable = Memo::new(move |_| {
        let all = tags.get();
        note.with(|n| available_tags(&all, n))
    });

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Edit Note"</CardTitle>
            </CardHeader>
            <CardContent class="flex flex-col gap-4">
                <form class="flex flex-col gap-3" on:submit=on_submit>
                    <ErrorAlert error=error />

                    <Field label="Title" html_for="edit-note-title">
                        <Input
                            id="edit-note-title"
                            name="title"
                            required=true
                            maxlength=NOTE_TITLE_MAX
                            value=draft_field(draft, |d| d.title.clone())
                            disabled=loading
                            on_input=on_field
                        />
                    </Field>

                    <Field label="Folder" html_for="edit-note-folder">
                        <NativeSelect
                            id="edit-note-folder"
                            name="folder_id"
                            required=true
                            value=draft_field(draft, |d| d.folder_id.clone())
                            disabled=loading
                            on_change=on_field
                        >
                            <option value="">"Select a folder"</option>
                            <FolderOptions
                                folders=folders
                                selected=draft_field(draft, |d| d.folder_id.clone())
                            />
                        </NativeSelect>
                    </Field>

                    <Field label="Content" html_for="edit-note-content">
                        <Textarea
                            id="edit-note-content"
                            name="content"
                            rows=12
                            value=draft_field(draft, |d| d.content.clone())
                            disabled=loading
                            on_input=on_field
                        />
                    </Field>

                    <div class="flex flex-wrap items-center gap-2">
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
                        <div class="ml-auto flex items-center gap-2">
                            <Show
                                when=move || confirm.with(|g| g.is_armed_for(note_id()))
                                fallback=move || {
                                    view! {
                                        <Button
                                            variant=ButtonVariant::Destructive
                                            size=ButtonSize::Sm
                                            attr:r#type="button"
                                            attr:disabled=move || loading.get()
                                            on:click=move |_| confirm.update(|g| g.arm(note_id()))
                                        >
                                            "Delete"
                                        </Button>
                                    }
                                }
                            >
                                <span class="text-xs text-muted-foreground">"Delete this note?"</span>
                                <Button
                                    variant=ButtonVariant::Destructive
                                    size=ButtonSize::Sm
                                    attr:r#type="button"
                                    attr:disabled=move || loading.get()
                                    on:click=on_delete_confirmed
                                >
                                    "Delete"
                                </Button>
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    attr:r#type="button"
                                    attr:disabled=move || loading.get()
                                    on:click=move |_| confirm.update(|g| g.cancel())
                                >
                                    "Keep"
                                </Button>
                            </Show>
                        </div>
                    </div>
                </form>

                <section class="flex flex-col gap-2">
                    <h3 class="text-sm font-medium">"Tags"</h3>
                    <div class="flex flex-wrap gap-1.5">
                        <Show
                            when=move || note.with(|n| !n.tags.is_empty())
                            fallback=|| {
                                view! {
                                    <span class="text-xs text-muted-foreground">"No tags yet"</span>
                                }
                            }
                        >
                            <For
                                each=move || note.with(|n| n.tags.clone())
                                key=|name: &String| name.clone()
                                children=move |name: String| {
                                    let label = name.clone();
                                    view! {
                                        <span class="inline-flex items-center gap-1 rounded-full border px-2 py-0.5 text-xs">
                                            {label}
                                            <button
                                                type="button"
                                                class="hover:text-destructive disabled:opacity-50"
                                                aria-label="Remove tag"
                                                disabled=move || loading.get()
                                                on:click=move |_| on_remove_tag(name.clone())
                                            >
                                                <X class="size-3" />
                                            </button>
                                        </span>
                                    }
                                }
                            />
                        </Show>
                    </div>

                    <Show
                        when=move || attachable.with(|t| !t.is_empty())
                        fallback=|| ().into_view()
                    >
                        <div class="flex flex-wrap items-center gap-1.5">
                            <span class="text-xs text-muted-foreground">"Add tag:"</span>
                            <For
                                each=move || attachable.get()
                                key=|t: &Tag| t.id
                                children=move |t: Tag| {
                                    let tag_id = t.id;
                                    view! {
                                        <Button
                                            variant=ButtonVariant::Outline
                                            size=ButtonSize::Sm
                                            class="h-6 px-2 text-xs"
                                            attr:r#type="button"
                                            attr:disabled=move || loading.get()
                                            on:click=move |_| run_tag_op(TagOp::Attach(tag_id))
                                        >
                                            {format!("+ {}", t.name)}
                                        </Button>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </section>
            </CardContent>
        </Card>
    }
}
