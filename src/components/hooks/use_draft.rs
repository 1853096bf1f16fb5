use crate::drafts::FormDraft;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Reads `name` and `value` off any form control (`input`, `textarea`, `select`).
fn control_name_value(ev: &web_sys::Event) -> Option<(String, String)> {
    let target: JsValue = ev.target()?.into();
    let read = |key: &str| {
        js_sys::Reflect::get(&target, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    };

    let name = read("name").filter(|n| !n.is_empty())?;
    Some((name, read("value").unwrap_or_default()))
}

/// Hook for a form draft bound field-by-field to its controls.
///
/// Returns `(draft, on_field)` where:
/// - `draft`: `RwSignal<D>` seeded with `initial`
/// - `on_field`: the single change handler for every control; it updates the
///   field named by the control's `name` attribute and clears `error`
pub fn use_draft<D>(initial: D, error: RwSignal<Option<String>>) -> (RwSignal<D>, Callback<web_sys::Event>)
where
    D: FormDraft + Send + Sync + 'static,
{
    let draft = RwSignal::new(initial);

    let on_field = Callback::new(move |ev: web_sys::Event| {
        let Some((name, value)) = control_name_value(&ev) else {
            return;
        };
        draft.update(|d| d.set_field(&name, value));
        if error.with_untracked(|e| e.is_some()) {
            error.set(None);
        }
    });

    (draft, on_field)
}

/// Projects one field of a draft as a read-only signal for a control's value.
pub fn draft_field<D, F>(draft: RwSignal<D>, field: F) -> Signal<String>
where
    D: Send + Sync + 'static,
    F: Fn(&D) -> String + Send + Sync + 'static,
{
    Signal::derive(move || draft.with(|d| field(d)))
}
