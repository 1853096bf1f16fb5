use crate::components::forms::{LoginForm, SignupForm};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
};
use crate::models::User;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Sign-in / sign-up screen. Either form lands on `/dashboard` once the
/// server has opened a session.
#[component]
pub fn LoginPage() -> impl IntoView {
    let is_login: RwSignal<bool> = RwSignal::new(true);
    let navigate = StoredValue::new(use_navigate());

    let on_success = Callback::new(move |user: User| {
        log::info!("signed in as {}", user.username);
        navigate.with_value(|nav| nav("/dashboard", Default::default()));
    });

    let tab_variant = move |login_tab: bool| {
        if is_login.get() == login_tab {
            ButtonVariant::Default
        } else {
            ButtonVariant::Ghost
        }
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-sm flex-col justify-center px-4 py-10">
                <div class="mb-6 flex items-center justify-center">
                    <span class="text-sm font-medium text-foreground">"Notes"</span>
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">
                            {move || if is_login.get() { "Sign in" } else { "Create an account" }}
                        </CardTitle>
                        <CardDescription class="text-xs">
                            {move || {
                                if is_login.get() {
                                    "Use your username and password to continue."
                                } else {
                                    "Pick a username and a password of at least 8 characters."
                                }
                            }}
                        </CardDescription>
                    </CardHeader>

                    <CardContent class="flex flex-col gap-4">
                        <div class="grid grid-cols-2 gap-1 rounded-md border p-1">
                            {move || {
                                view! {
                                    <Button
                                        variant=tab_variant(true)
                                        size=ButtonSize::Sm
                                        on:click=move |_| is_login.set(true)
                                    >
                                        "Sign in"
                                    </Button>
                                    <Button
                                        variant=tab_variant(false)
                                        size=ButtonSize::Sm
                                        on:click=move |_| is_login.set(false)
                                    >
                                        "Sign up"
                                    </Button>
                                }
                            }}
                        </div>

                        <Show
                            when=move || is_login.get()
                            fallback=move || view! { <SignupForm on_success=on_success /> }
                        >
                            <LoginForm on_success=on_success />
                        </Show>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
