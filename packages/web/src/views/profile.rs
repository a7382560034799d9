//! View and edit the signed-in user's details.

use dioxus::prelude::*;
use ui::{forms, use_submit_guard, ErrorBanner, SuccessBanner};

use super::use_required_session;

#[component]
pub fn Profile() -> Element {
    let session = use_required_session();
    let user = session.user();

    let mut first_name = use_signal(|| user.as_ref().map(|u| u.first_name.clone()).unwrap_or_default());
    let mut last_name = use_signal(|| user.as_ref().map(|u| u.last_name.clone()).unwrap_or_default());
    let mut email = use_signal(|| user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut guard = use_submit_guard();

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);
        let update = match forms::profile(&first_name(), &last_name(), &email()) {
            Ok(update) => update,
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
            match session.update_profile(update).await {
                Ok(_) => success.set(Some("Profile updated successfully".to_string())),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    let Some(user) = user else {
        return rsx! {};
    };
    let display_name = user.display_name();
    let role = user.role;

    rsx! {
        div {
            class: "max-w-2xl mx-auto px-4 py-8",
            h1 { class: "text-4xl font-bold text-gray-900 mb-2", "My Profile" }
            p { class: "text-gray-500 mb-8", "{display_name} · {role}" }
            if let Some(message) = error() {
                ErrorBanner { message }
            }
            if let Some(message) = success() {
                SuccessBanner { message }
            }
            form {
                onsubmit: save,
                class: "bg-white rounded-xl shadow-sm p-6 flex flex-col gap-4",
                label { class: "text-sm font-medium text-gray-700", "First name" }
                input {
                    class: "px-4 py-2 border rounded-lg",
                    value: first_name(),
                    oninput: move |evt: FormEvent| first_name.set(evt.value()),
                }
                label { class: "text-sm font-medium text-gray-700", "Last name" }
                input {
                    class: "px-4 py-2 border rounded-lg",
                    value: last_name(),
                    oninput: move |evt: FormEvent| last_name.set(evt.value()),
                }
                label { class: "text-sm font-medium text-gray-700", "Email" }
                input {
                    class: "px-4 py-2 border rounded-lg",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                button {
                    class: "py-3 bg-primary-600 text-white rounded-lg disabled:opacity-50",
                    r#type: "submit",
                    disabled: guard.is_busy(),
                    if guard.is_busy() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}
