use api::PageRequest;
use dioxus::prelude::*;
use ui::{forms, use_session, use_submit_guard};

use super::{Feedback, FeedbackBanner, LISTING_SIZE};

#[component]
pub(super) fn CategoriesTab() -> Element {
    let session = use_session();
    let mut feedback = Feedback::use_new();
    let mut guard = use_submit_guard();
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);

    let mut categories = use_resource(move || async move {
        let mut session = session;
        session
            .client()
            .categories(PageRequest::new(0, LISTING_SIZE))
            .await
            .map(|page| page.content)
            .map_err(|e| session.error_message(&e))
    });

    let mut reset_form = move || {
        editing.set(None);
        name.set(String::new());
        description.set(String::new());
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        feedback.clear();
        let request = match forms::category(&name(), &description()) {
            Ok(request) => request,
            Err(message) => {
                feedback.fail(message);
                return;
            }
        };
        let Some(ticket) = guard.begin() else {
            return;
        };
        let target = editing();
        spawn(async move {
            let _ticket = ticket;
            let mut session = session;
            let client = session.client();
            let result = match target {
                Some(id) => client.update_category(id, &request).await,
                None => client.create_category(&request).await,
            };
            match result {
                Ok(category) => {
                    feedback.done(format!("Saved {}", category.name));
                    reset_form();
                    categories.restart();
                }
                Err(e) => feedback.fail(session.error_message(&e)),
            }
        });
    };

    rsx! {
        FeedbackBanner { error: (feedback.error)(), success: (feedback.success)() }
        form {
            onsubmit: save,
            class: "bg-white rounded-xl shadow-sm p-6 mb-8 flex flex-col gap-4",
            h2 {
                class: "text-xl font-bold",
                if editing().is_some() { "Edit Category" } else { "Add Category" }
            }
            input {
                class: "px-4 py-2 border rounded-lg",
                placeholder: "Name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            textarea {
                class: "px-4 py-2 border rounded-lg",
                placeholder: "Description",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            div {
                class: "flex gap-2",
                button {
                    class: "px-6 py-2 bg-primary-600 text-white rounded-lg disabled:opacity-50",
                    r#type: "submit",
                    disabled: guard.is_busy(),
                    if guard.is_busy() { "Saving..." } else { "Save" }
                }
                if editing().is_some() {
                    button {
                        class: "px-6 py-2 bg-gray-100 rounded-lg",
                        r#type: "button",
                        onclick: move |_| reset_form(),
                        "Cancel"
                    }
                }
            }
        }
        match &*categories.read_unchecked() {
            None => rsx! { p { class: "text-gray-500", "Loading..." } },
            Some(Err(message)) => rsx! { ui::ErrorBanner { message: message.clone() } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "w-full bg-white rounded-xl shadow-sm text-sm",
                    thead {
                        tr {
                            th { class: "p-3 text-left", "Name" }
                            th { class: "p-3 text-left", "Description" }
                            th { class: "p-3" }
                        }
                    }
                    tbody {
                        for category in list.iter().cloned() {
                            tr {
                                key: "{category.id}",
                                class: "border-t",
                                td { class: "p-3", "{category.name}" }
                                td { class: "p-3", {category.description.clone().unwrap_or_default()} }
                                td {
                                    class: "p-3 text-right",
                                    button {
                                        class: "text-primary-600 mr-3",
                                        onclick: {
                                            let category = category.clone();
                                            move |_| {
                                                feedback.clear();
                                                editing.set(Some(category.id));
                                                name.set(category.name.clone());
                                                description.set(category.description.clone().unwrap_or_default());
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "text-red-600",
                                        disabled: guard.is_busy(),
                                        onclick: move |_| async move {
                                            let Some(_ticket) = guard.begin() else {
                                                return;
                                            };
                                            let mut session = session;
                                            match session.client().delete_category(category.id).await {
                                                Ok(_) => {
                                                    feedback.done("Category deleted");
                                                    categories.restart();
                                                }
                                                Err(e) => feedback.fail(session.error_message(&e)),
                                            }
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
