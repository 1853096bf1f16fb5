use crate::components::forms::{
    CreateFolder, CreateNote, EditFolder, EditNote, EditOutcome, SearchNotes, TagManager,
};
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent, CardItem,
    CardList, Spinner,
};
use crate::drafts::ConfirmGate;
use crate::models::{Folder, Note, Tag};
use crate::state::{AppContext, DashboardMsg, DashboardStore, DisplayMode};
use crate::util::{date_part, preview, CONTENT_PREVIEW_CHARS};
use icons::X;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Which main-area view is mounted. Re-rendering only on a change of this
/// keeps the editor (and its draft) alive across note refreshes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MainView {
    Listing,
    Editing(i64),
    Searching,
}

impl MainView {
    fn of(mode: &DisplayMode) -> Self {
        match mode {
            DisplayMode::Listing => MainView::Listing,
            DisplayMode::Editing(note) => MainView::Editing(note.id),
            DisplayMode::Searching { .. } => MainView::Searching,
        }
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let api = expect_context::<AppContext>().0.api_client;
    let navigate = StoredValue::new(use_navigate());

    let store: RwSignal<DashboardStore> = RwSignal::new(DashboardStore::default());
    let checking: RwSignal<bool> = RwSignal::new(true);
    let folder_confirm: RwSignal<ConfirmGate<i64>> = RwSignal::new(ConfirmGate::default());
    let editing_folder: RwSignal<Option<i64>> = RwSignal::new(None);

    // Late responses may arrive after the page is gone.
    let dispatch = move |msg: DashboardMsg| {
        store.try_update(|s| s.apply(msg));
    };

    let go_login = move || navigate.with_value(|nav| nav("/login", Default::default()));

    let load_notes = move || {
        let Some((ticket, folder_id)) = store.try_update(|s| s.begin_notes_load()) else {
            return;
        };
        let api_client = api.get_untracked();
        spawn_local(async move {
            match api_client.list_notes(folder_id).await {
                Ok(page) => dispatch(DashboardMsg::NotesLoaded { ticket, page }),
                Err(e) => dispatch(DashboardMsg::LoadFailed(e.user_message())),
            }
        });
    };

    // Session check, then folders, tags and notes in turn.
    Effect::new(move |_| {
        let api_client = api.get_untracked();
        spawn_local(async move {
            let user = match api_client.check_session().await {
                Ok(user) => user,
                Err(e) => {
                    log::info!("no session ({}), redirecting to login", e.kind);
                    go_login();
                    return;
                }
            };
            dispatch(DashboardMsg::SessionResolved(user));

            if let Some(ticket) = store.try_update(|s| s.begin_folders_load()) {
                match api_client.list_folders().await {
                    Ok(folders) => dispatch(DashboardMsg::FoldersLoaded { ticket, folders }),
                    Err(e) => dispatch(DashboardMsg::LoadFailed(e.user_message())),
                }
            }

            if let Some(ticket) = store.try_update(|s| s.begin_tags_load()) {
                match api_client.list_tags().await {
                    Ok(tags) => dispatch(DashboardMsg::TagsLoaded { ticket, tags }),
                    Err(e) => dispatch(DashboardMsg::LoadFailed(e.user_message())),
                }
            }

            if let Some((ticket, folder_id)) = store.try_update(|s| s.begin_notes_load()) {
                match api_client.list_notes(folder_id).await {
                    Ok(page) => dispatch(DashboardMsg::NotesLoaded { ticket, page }),
                    Err(e) => dispatch(DashboardMsg::LoadFailed(e.user_message())),
                }
            }

            checking.try_set(false);
        });
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let api_client = api.get_untracked();
        spawn_local(async move {
            match api_client.logout().await {
                Ok(()) => go_login(),
                Err(e) => dispatch(DashboardMsg::LoadFailed(e.user_message())),
            }
        });
    };

    let on_folder_click = move |folder_id: Option<i64>| {
        dispatch(DashboardMsg::FolderClicked(folder_id));
        load_notes();
    };

    let on_folder_delete_confirmed = move |folder_id: i64| {
        let mut confirmed = false;
        folder_confirm.update(|g| confirmed = g.take(folder_id));
        if !confirmed {
            return;
        }

        let api_client = api.get_untracked();
        spawn_local(async move {
            match api_client.delete_folder(folder_id).await {
                Ok(()) => {
                    // Clears the filter if it pointed at this folder; the list is re-fetched either way.
                    dispatch(DashboardMsg::FolderDeleted(folder_id));
                    load_notes();
                }
                Err(e) => dispatch(DashboardMsg::LoadFailed(e.user_message())),
            }
        });
    };

    let on_folder_created = Callback::new(move |folder: Folder| {
        dispatch(DashboardMsg::FolderCreated(folder));
    });
    let on_folder_saved = Callback::new(move |folder: Folder| {
        editing_folder.set(None);
        dispatch(DashboardMsg::FolderUpdated(folder));
    });
    let on_folder_edit_cancel = Callback::new(move |_: ()| editing_folder.set(None));
    let on_note_created = Callback::new(move |note: Note| {
        dispatch(DashboardMsg::NoteCreated(note));
    });
    let on_tags_updated = Callback::new(move |tags: Vec<Tag>| {
        dispatch(DashboardMsg::TagsReplaced(tags));
    });
    let on_search_results = Callback::new(move |(query, results): (String, Vec<Note>)| {
        dispatch(DashboardMsg::SearchSubmitted { query, results });
    });
    let on_search_clear = Callback::new(move |_: ()| {
        dispatch(DashboardMsg::SearchCleared);
        load_notes();
    });
    let on_open = Callback::new(move |note: Note| {
        dispatch(DashboardMsg::NoteOpened(note));
    });
    let on_outcome = Callback::new(move |outcome: EditOutcome| match outcome {
        EditOutcome::Updated(note) => dispatch(DashboardMsg::NoteUpdated(note)),
        EditOutcome::Deleted(id) => dispatch(DashboardMsg::NoteDeleted(id)),
    });
    let on_refreshed = Callback::new(move |note: Note| {
        dispatch(DashboardMsg::NoteRefreshed(note));
    });
    let on_cancel = Callback::new(move |_: ()| {
        dispatch(DashboardMsg::EditCancelled);
    });

    let folders = Signal::derive(move || store.with(|s| s.folders.clone()));
    let tags = Signal::derive(move || store.with(|s| s.tags.clone()));
    let notes = Signal::derive(move || store.with(|s| s.notes.clone()));
    let selected_folder = Memo::new(move |_| store.with(|s| s.selected_folder));
    let error = Memo::new(move |_| store.with(|s| s.error.clone()));
    let main_view = Memo::new(move |_| store.with(|s| MainView::of(&s.mode)));

    let welcome = move || {
        store.with(|s| {
            s.user
                .as_ref()
                .map(|u| format!("Welcome, {}", u.username))
                .unwrap_or_default()
        })
    };

    let heading = move || {
        store.with(|s| {
            s.selected_folder_name()
                .map(str::to_string)
                .unwrap_or_else(|| "All Notes".to_string())
        })
    };

    let showing = move || store.with(|s| s.showing_line());

    let main_area = move || match main_view.get() {
        MainView::Editing(id) => {
            let Some(initial) = store.with_untracked(|s| s.mode.editing().cloned()) else {
                return ().into_any();
            };
            let note = Signal::derive(move || {
                store
                    .with(|s| s.mode.editing().filter(|n| n.id == id).cloned())
                    .unwrap_or_else(|| initial.clone())
            });
            view! {
                <EditNote
                    note=note
                    folders=folders
                    tags=tags
                    on_outcome=on_outcome
                    on_refreshed=on_refreshed
                    on_cancel=on_cancel
                />
            }
            .into_any()
        }
        MainView::Searching => {
            let query = move || {
                store.with(|s| match &s.mode {
                    DisplayMode::Searching { query, results } => {
                        format!("Results for \"{}\" ({})", query, results.len())
                    }
                    _ => String::new(),
                })
            };
            let results = Signal::derive(move || {
                store.with(|s| match &s.mode {
                    DisplayMode::Searching { results, .. } => results.clone(),
                    _ => vec![],
                })
            });
            view! {
                <div class="flex flex-col gap-3">
                    <h2 class="text-sm font-medium">{query}</h2>
                    <NoteList notes=results on_open=on_open empty_text="No notes match your search." />
                </div>
            }
            .into_any()
        }
        MainView::Listing => view! {
            <div class="flex flex-col gap-3">
                <div class="flex items-center justify-between gap-3">
                    <div class="flex items-baseline gap-3">
                        <h2 class="text-base font-medium">{heading}</h2>
                        <span class="text-xs text-muted-foreground">{showing}</span>
                    </div>
                    <CreateNote folders=folders on_created=on_note_created />
                </div>
                <NoteList notes=notes on_open=on_open empty_text="No notes yet. Create one to get started." />
            </div>
        }
        .into_any(),
    };

    view! {
        <Show
            when=move || !checking.get()
            fallback=|| {
                view! {
                    <div class="flex min-h-screen items-center justify-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading..."
                    </div>
                }
            }
        >
            <div class="min-h-screen bg-background text-foreground">
                <header class="border-b">
                    <div class="mx-auto flex w-full max-w-6xl items-center justify-between gap-3 px-4 py-3">
                        <span class="text-sm font-medium">"Notes"</span>
                        <div class="flex items-center gap-3">
                            <span class="text-xs text-muted-foreground">{welcome}</span>
                            <Button variant=ButtonVariant::Outline size=ButtonSize::Sm on:click=on_logout>
                                "Sign out"
                            </Button>
                        </div>
                    </div>
                </header>

                <div class="mx-auto flex w-full max-w-6xl gap-4 px-4 py-6">
                    <aside class="w-60 shrink-0 space-y-4">
                        <Card>
                            <CardContent class="flex flex-col gap-2 p-3">
                                <h2 class="text-xs font-semibold uppercase text-muted-foreground">"Folders"</h2>
                                {move || {
                                    let variant = if selected_folder.get().is_none() {
                                        ButtonVariant::Outline
                                    } else {
                                        ButtonVariant::Ghost
                                    };
                                    view! {
                                        <Button
                                            variant=variant
                                            size=ButtonSize::Sm
                                            class="w-full justify-start"
                                            on:click=move |_| on_folder_click(None)
                                        >
                                            "All Notes"
                                        </Button>
                                    }
                                }}
                                <For
                                    each=move || folders.get()
                                    key=|f: &Folder| (f.id, f.name.clone(), f.color.clone())
                                    children=move |f: Folder| {
                                        let folder_id = f.id;
                                        let swatch = format!("background-color: {}", f.color);
                                        let name = f.name.clone();
                                        view! {
                                            <Show
                                                when=move || editing_folder.get() == Some(folder_id)
                                                fallback=move || {
                                                    let swatch = swatch.clone();
                                                    let name = name.clone();
                                                    view! {
                                                        <div class="group flex items-center gap-1">
                                                            {move || {
                                                                let swatch = swatch.clone();
                                                                let name = name.clone();
                                                                let variant = if selected_folder.get() == Some(folder_id) {
                                                                    ButtonVariant::Outline
                                                                } else {
                                                                    ButtonVariant::Ghost
                                                                };
                                                                view! {
                                                                    <Button
                                                                        variant=variant
                                                                        size=ButtonSize::Sm
                                                                        class="min-w-0 flex-1 justify-start"
                                                                        on:click=move |_| on_folder_click(Some(folder_id))
                                                                    >
                                                                        <span class="size-2.5 shrink-0 rounded-full" style=swatch />
                                                                        <span class="truncate">{name}</span>
                                                                    </Button>
                                                                }
                                                            }}
                                                            <button
                                                                type="button"
                                                                class="text-muted-foreground opacity-0 group-hover:opacity-100 hover:text-foreground"
                                                                aria-label="Edit folder"
                                                                on:click=move |_| editing_folder.set(Some(folder_id))
                                                            >
                                                                <svg
                                                                    xmlns="http://www.w3.org/2000/svg"
                                                                    width="12"
                                                                    height="12"
                                                                    viewBox="0 0 24 24"
                                                                    fill="none"
                                                                    stroke="currentColor"
                                                                    stroke-width="2"
                                                                    stroke-linecap="round"
                                                                    stroke-linejoin="round"
                                                                    aria-hidden="true"
                                                                >
                                                                    <path d="M12 20h9" />
                                                                    <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4Z" />
                                                                </svg>
                                                            </button>
                                                            <Show
                                                                when=move || folder_confirm.with(|g| g.is_armed_for(folder_id))
                                                                fallback=move || {
                                                                    view! {
                                                                        <button
                                                                            type="button"
                                                                            class="text-muted-foreground opacity-0 group-hover:opacity-100 hover:text-destructive"
                                                                            aria-label="Delete folder"
                                                                            on:click=move |_| folder_confirm.update(|g| g.arm(folder_id))
                                                                        >
                                                                            <X class="size-3" />
                                                                        </button>
                                                                    }
                                                                }
                                                            >
                                                                <span class="flex items-center gap-1 text-xs">
                                                                    <button
                                                                        type="button"
                                                                        class="text-destructive hover:underline"
                                                                        on:click=move |_| on_folder_delete_confirmed(folder_id)
                                                                    >
                                                                        "Delete"
                                                                    </button>
                                                                    <button
                                                                        type="button"
                                                                        class="hover:underline"
                                                                        on:click=move |_| folder_confirm.update(|g| g.cancel())
                                                                    >
                                                                        "Keep"
                                                                    </button>
                                                                </span>
                                                            </Show>
                                                        </div>
                                                    }
                                                }
                                            >
                                                <EditFolder
                                                    folder=f.clone()
                                                    on_saved=on_folder_saved
                                                    on_cancel=on_folder_edit_cancel
                                                />
                                            </Show>
                                        }
                                    }
                                />
                                <CreateFolder on_created=on_folder_created />
                            </CardContent>
                        </Card>

                        <Card>
                            <CardContent class="p-3">
                                <TagManager on_tags_updated=on_tags_updated />
                            </CardContent>
                        </Card>
                    </aside>

                    <main class="min-w-0 flex-1 space-y-4">
                        <Show when=move || error.with(|e| e.is_some()) fallback=|| ().into_view()>
                            <Alert class="flex items-start justify-between gap-2 border-destructive/30" attr:role="alert">
                                <AlertDescription class="text-destructive text-xs">
                                    {move || error.get().unwrap_or_default()}
                                </AlertDescription>
                                <button
                                    type="button"
                                    class="text-muted-foreground hover:text-foreground"
                                    aria-label="Dismiss"
                                    on:click=move |_| dispatch(DashboardMsg::DismissError)
                                >
                                    <X class="size-3" />
                                </button>
                            </Alert>
                        </Show>

                        <Show
                            when=move || !matches!(main_view.get(), MainView::Editing(_))
                            fallback=|| ().into_view()
                        >
                            <SearchNotes
                                folders=folders
                                tags=tags
                                on_results=on_search_results
                                on_clear=on_search_clear
                            />
                        </Show>

                        {main_area}
                    </main>
                </div>
            </div>
        </Show>
    }
}

/// One row per note: title, content preview, date and tags. Clicking opens
/// the editor.
#[component]
fn NoteList(
    #[prop(into)] notes: Signal<Vec<Note>>,
    on_open: Callback<Note>,
    empty_text: &'static str,
) -> impl IntoView {
    view! {
        <Show
            when=move || notes.with(|n| !n.is_empty())
            fallback=move || view! { <p class="py-8 text-center text-sm text-muted-foreground">{empty_text}</p> }
        >
            <CardList>
                <For
                    each=move || notes.get()
                    key=|n: &Note| n.clone()
                    children=move |n: Note| {
                        let snippet = preview(n.content_str(), CONTENT_PREVIEW_CHARS);
                        let updated = n.updated_at.as_deref().map(date_part).unwrap_or_default().to_string();
                        let tag_line = n
                            .tags
                            .iter()
                            .map(|t| format!("#{t}"))
                            .collect::<Vec<_>>()
                            .join(" ");
                        let title = n.title.clone();
                        view! {
                            <CardItem
                                class="cursor-pointer hover:bg-accent"
                                on:click=move |_| on_open.run(n.clone())
                            >
                                <div class="flex items-baseline justify-between gap-3">
                                    <span class="truncate text-sm font-medium">{title}</span>
                                    <span class="shrink-0 text-xs text-muted-foreground">{updated}</span>
                                </div>
                                <p class="text-xs text-muted-foreground">{snippet}</p>
                                {(!tag_line.is_empty())
                                    .then(|| view! { <p class="text-xs text-primary">{tag_line}</p> })}
                            </CardItem>
                        }
                    }
                />
            </CardList>
        </Show>
    }
}
