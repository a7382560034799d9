//! Email and password sign-in.

use dioxus::prelude::*;
use ui::{forms, use_session, use_submit_guard, ErrorBanner};

use super::use_redirect_when_signed_in;
use crate::Route;

#[component]
pub fn Login() -> Element {
    use_redirect_when_signed_in();
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut guard = use_submit_guard();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let request = match forms::login(&email(), &password()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let Some(ticket) = guard.begin() else {
            return;
        };
        spawn(async move {
            let _ticket = ticket;
            match session.login(request).await {
                Ok(_) => {
                    nav.replace(Route::Home {});
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",
            h1 { class: "mb-2 text-neutral-800 font-bold text-[1.75rem]", "Sign In" }
            p { class: "mb-8 text-neutral-600 text-[0.9375rem]", "Welcome back to Commerce Smart" }
            form {
                onsubmit: handle_login,
                class: "flex flex-col gap-3 w-full max-w-[320px]",
                if let Some(message) = error() {
                    ErrorBanner { message }
                }
                input {
                    class: "w-full px-4 py-2 border rounded-lg",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    class: "w-full px-4 py-2 border rounded-lg",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    class: "w-full py-2 bg-primary-600 text-white rounded-lg font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: guard.is_busy(),
                    if guard.is_busy() { "Signing in..." } else { "Sign in" }
                }
            }
            p {
                class: "mt-6 text-sm text-neutral-600",
                "Don't have an account? "
                Link { to: Route::Register {}, class: "text-primary-500", "Sign up" }
            }
        }
    }
}
