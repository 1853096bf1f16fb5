use crate::components::hooks::{draft_field, use_draft};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, ErrorAlert, Input, Spinner};
use crate::drafts::{
    tags_after_create, tags_after_delete, ConfirmGate, TagDraft, TAG_NAME_MAX,
};
use crate::models::Tag;
use crate::state::AppContext;
use icons::X;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sidebar tag list. Loads tags itself on mount and re-announces the full list
/// through `on_tags_updated` after every change.
#[component]
pub fn TagManager(on_tags_updated: Callback<Vec<Tag>>) -> impl IntoView {
    let api = expect_context::<AppContext>().0.api_client;

    let tags: RwSignal<Vec<Tag>> = RwSignal::new(Vec::new());
    let show_form: RwSignal<bool> = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let confirm: RwSignal<ConfirmGate<i64>> = RwSignal::new(ConfirmGate::default());
    let (draft, on_field) = use_draft(TagDraft::default(), error);

    let announce = move || {
        if let Some(all) = tags.try_get_untracked() {
            on_tags_updated.run(all);
        }
    };

    Effect::new(move |_| {
        let api_client = api.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match api_client.list_tags().await {
                Ok(list) => {
                    tags.try_set(list);
                    announce();
                }
                Err(e) => {
                    error.try_set(Some(e.user_message()));
                }
            }
            loading.try_set(false);
        });
    });

    let close = move || {
        show_form.set(false);
        draft.set(TagDraft::default());
        error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let d = draft.get_untracked();
        if let Err(msg) = tags.with_untracked(|all| d.validate_against(all)) {
            error.set(Some(msg));
            return;
        }

        let req = d.to_request();
        let api_client = api.get_untracked();
        loading.set(true);

        spawn_local(async move {
            match api_client.create_tag(&req).await {
                Ok(tag) => {
                    loading.set(false);
                    tags.update(|all| *all = tags_after_create(all, tag));
                    close();
                    announce();
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    loading.set(false);
                }
            }
        });
    };

    let on_delete_confirmed = move |tag_id: i64| {
        let mut confirmed = false;
        confirm.update(|g| confirmed = g.take(tag_id));
        if !confirmed {
            return;
        }

        error.set(None);
        let api_client = api.get_untracked();
        loading.set(true);

        spawn_local(async move {
            match api_client.delete_tag(tag_id).await {
                Ok(()) => {
                    loading.set(false);
                    tags.update(|all| *all = tags_after_delete(all, tag_id));
                    announce();
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <section class="flex flex-col gap-2">
            <div class="flex items-center justify-between">
                <h2 class="text-xs font-semibold uppercase text-muted-foreground">"Tags"</h2>
                <Show when=move || loading.get() fallback=|| ().into_view()>
                    <Spinner class="size-3" />
                </Show>
            </div>

            <ErrorAlert error=error />

            <Show
                when=move || tags.with(|t| !t.is_empty())
                fallback=|| view! { <p class="text-xs text-muted-foreground">"No tags yet"</p> }
            >
                <ul class="flex flex-col gap-1">
                    <For
                        each=move || tags.get()
                        key=|t: &Tag| t.id
                        children=move |t: Tag| {
                            let tag_id = t.id;
                            view! {
                                <li class="flex items-center justify-between gap-2 text-sm">
                                    <span class="truncate">{format!("#{}", t.name)}</span>
                                    <Show
                                        when=move || confirm.with(|g| g.is_armed_for(tag_id))
                                        fallback=move || {
                                            view! {
                                                <button
                                                    type="button"
                                                    class="text-muted-foreground hover:text-destructive"
                                                    aria-label="Delete tag"
                                                    disabled=move || loading.get()
                                                    on:click=move |_| confirm.update(|g| g.arm(tag_id))
                                                >
                                                    <X class="size-3" />
                                                </button>
                                            }
                                        }
                                    >
                                        <span class="flex items-center gap-1 text-xs">
                                            <span
                                                class="text-muted-foreground"
                                                title="It will be removed from all notes"
                                            >
                                                "Delete?"
                                            </span>
                                            <button
                                                type="button"
                                                class="text-destructive hover:underline"
                                                disabled=move || loading.get()
                                                on:click=move |_| on_delete_confirmed(tag_id)
                                            >
                                                "Delete"
                                            </button>
                                            <button
                                                type="button"
                                                class="hover:underline"
                                                disabled=move || loading.get()
                                                on:click=move |_| confirm.update(|g| g.cancel())
                                            >
                                                "Keep"
                                            </button>
                                        </span>
                                    </Show>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

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
                            "+ New Tag"
                        </Button>
                    }
                }
            >
                <form class="flex gap-1" on:submit=on_submit>
                    <Input
                        name="name"
                        placeholder="Tag name"
                        maxlength=TAG_NAME_MAX
                        value=draft_field(draft, |d| d.name.clone())
                        disabled=loading
                        on_input=on_field
                    />
                    <Button size=ButtonSize::Sm attr:disabled=move || loading.get()>
                        "Add"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        attr:r#type="button"
                        attr:aria-label="Cancel"
                        attr:disabled=move || loading.get()
                        on:click=move |_| close()
                    >
                        <X />
                    </Button>
                </form>
            </Show>
        </section>
    }
}
