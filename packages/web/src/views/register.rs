//! Account registration.

use dioxus::prelude::*;
use ui::forms::{self, MIN_PASSWORD_LEN};
use ui::{use_session, use_submit_guard, ErrorBanner};

use super::use_redirect_when_signed_in;
use crate::Route;

#[component]
pub fn Register() -> Element {
    use_redirect_when_signed_in();
    let session = use_session();
    let nav = use_navigator();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut guard = use_submit_guard();

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let request = match forms::register(
            &first_name(),
            &last_name(),
            &email(),
            &password(),
            &confirm_password(),
        ) {
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
            match session.register(request).await {
                Ok(_) => {
                    nav.replace(Route::Home {});
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let password_hint = format!("Password (min {MIN_PASSWORD_LEN} characters)");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8",
            h1 { class: "mb-2 text-neutral-800 font-bold text-[1.75rem]", "Create Account" }
            p { class: "mb-8 text-neutral-600 text-[0.9375rem]", "Sign up for Commerce Smart" }
            form {
                onsubmit: handle_register,
                class: "flex flex-col gap-3 w-full max-w-[320px]",
                if let Some(message) = error() {
                    ErrorBanner { message }
                }
                input {
                    class: "w-full px-4 py-2 border rounded-lg",
                    placeholder: "First name",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
                input {
                    class: "w-full px-4 py-2 border rounded-lg",
                    placeholder: "Last name",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
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
                    placeholder: "{password_hint}",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    class: "w-full px-4 py-2 border rounded-lg",
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
                button {
                    class: "w-full py-2 bg-primary-600 text-white rounded-lg font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: guard.is_busy(),
                    if guard.is_busy() { "Creating account..." } else { "Sign up" }
                }
            }
            p {
                class: "mt-6 text-sm text-neutral-600",
                "Already have an account? "
                Link { to: Route::Login {}, class: "text-primary-500", "Sign in" }
            }
        }
    }
}
