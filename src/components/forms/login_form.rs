use crate::components::hooks::{draft_field, use_draft};
use crate::components::ui::{Button, ButtonSize, ErrorAlert, Field, Input, LoadingLabel};
use crate::drafts::{FormDraft, LoginDraft};
use crate::models::User;
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginForm(on_success: Callback<User>) -> impl IntoView {
    let api = expect_context::<AppContext>().0.api_client;

    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let (draft, on_field) = use_draft(LoginDraft::default(), error);

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
            match api_client.login(&req).await {
                Ok(user) => {
                    loading.set(false);
                    draft.set(LoginDraft::default());
                    on_success.run(user);
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <form class="flex flex-col gap-3" on:submit=on_submit>
            <ErrorAlert error=error />

            <Field label="Username" html_for="login-username">
                <Input
                    id="login-username"
                    name="username"
                    placeholder="Enter your username"
                    required=true
                    value=draft_field(draft, |d| d.username.clone())
                    disabled=loading
                    on_input=on_field
                />
            </Field>

            <Field label="Password" html_for="login-password">
                <Input
                    id="login-password"
                    r#type="password"
                    name="password"
                    placeholder="••••••••"
                    required=true
                    value=draft_field(draft, |d| d.password.clone())
                    disabled=loading
                    on_input=on_field
                />
            </Field>

            <Button class="w-full" size=ButtonSize::Sm attr:disabled=move || loading.get()>
                <LoadingLabel loading=loading idle="Sign in" busy="Signing in..." />
            </Button>
        </form>
    }
}
