use icons::Loader;
use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn Spinner(#[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = tw_merge!("size-4 animate-spin", class);

    view! { <Loader class=merged_class attr:role="status" attr:aria-label="Loading" /> }
}

/// Submit-button label: spinner plus `busy` while loading, `idle` otherwise.
#[component]
pub fn LoadingLabel(
    #[prop(into)] loading: Signal<bool>,
    idle: &'static str,
    busy: &'static str,
) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-2">
            <Show when=move || loading.get() fallback=|| ().into_view()>
                <Spinner />
            </Show>
            {move || if loading.get() { busy } else { idle }}
        </span>
    }
}
