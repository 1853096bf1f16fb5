use leptos::prelude::*;
use tw_merge::*;

#[component]
pub fn Label(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] html_for: String,
    children: Children,
) -> impl IntoView {
    let class = tw_merge!(
        "flex items-center gap-2 text-xs leading-none font-medium select-none",
        class
    );

    view! {
        <label class=class r#for=html_for>
            {children()}
        </label>
    }
}

/// Label stacked over one control.
#[component]
pub fn Field(
    #[prop(into)] label: String,
    #[prop(into)] html_for: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5">
            <Label html_for=html_for>{label}</Label>
            {children()}
        </div>
    }
}
