use leptos::prelude::*;
use tw_merge::tw_merge;

const CONTROL_CLASS: &str = "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground border-input w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-sm shadow-xs transition-[color,box-shadow] outline-none disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2";

// Controls are draft-driven: the value comes from the form's draft signal and
// every change goes to one handler that reads the control's `name`.

#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, default = "text")] r#type: &'static str,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] maxlength: Option<usize>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_input: Callback<web_sys::Event>,
) -> impl IntoView {
    let merged_class = tw_merge!(CONTROL_CLASS, "flex h-9", class);

    view! {
        <input
            data-name="Input"
            type=r#type
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            required=required
            maxlength=maxlength.map(|n| n.to_string())
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(ev)
        />
    }
}

#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(default = 8)] rows: u32,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_input: Callback<web_sys::Event>,
) -> impl IntoView {
    let merged_class = tw_merge!(CONTROL_CLASS, "py-2 resize-y", class);

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            name=name
            id=id
            rows=rows.to_string()
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(ev)
        />
    }
}

/// Native `<select>`. Options come as children; callers mark the selected
/// option themselves so the initial value survives the first render.
#[component]
pub fn NativeSelect(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] name: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_change: Callback<web_sys::Event>,
    children: Children,
) -> impl IntoView {
    let merged_class = tw_merge!(CONTROL_CLASS, "flex h-9", class);

    view! {
        <select
            data-name="NativeSelect"
            class=merged_class
            name=name
            id=id
            required=required
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(ev)
        >
            {children()}
        </select>
    }
}
