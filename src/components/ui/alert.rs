use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

pub use components::*;

/// Inline error slot used by every form. Renders nothing while `error` is `None`.
#[component]
pub fn ErrorAlert(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(|e| e.is_some()) fallback=|| ().into_view()>
            <Alert class="border-destructive/30" attr:role="alert">
                <AlertDescription class="text-destructive text-xs">
                    {move || error.get().unwrap_or_default()}
                </AlertDescription>
            </Alert>
        </Show>
    }
}
