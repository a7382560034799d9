use api::{PageRequest, Role, UserSummary, UserUpdate};
use dioxus::prelude::*;
use ui::{forms, use_session, use_submit_guard};

use super::{Feedback, FeedbackBanner, LISTING_SIZE};

#[component]
pub(super) fn UsersTab() -> Element {
    let session = use_session();
    let mut feedback = Feedback::use_new();
    let mut guard = use_submit_guard();
    let own_id = session.user().map(|u| u.id);
    let mut editing = use_signal(|| Option::<(i64, Role)>::None);
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);

    let mut users = use_resource(move || async move {
        let mut session = session;
        session
            .client()
            .users(PageRequest::new(0, LISTING_SIZE))
            .await
            .map(|page| page.content)
            .map_err(|e| session.error_message(&e))
    });

    let mut submit = move |user_id: i64, update: UserUpdate| {
        let Some(ticket) = guard.begin() else {
            return;
        };
        spawn(async move {
            let _ticket = ticket;
            let mut session = session;
            match session.client().update_user(user_id, &update).await {
                Ok(user) => {
                    feedback.done(format!("Updated {} ({})", user.display_name(), user.role));
                    editing.set(None);
                    users.restart();
                }
                Err(e) => feedback.fail(session.error_message(&e)),
            }
        });
    };

    let mut change_role = move |user_id: i64, role: Role| {
        feedback.clear();
        submit(
            user_id,
            UserUpdate {
                role: Some(role),
                ..UserUpdate::default()
            },
        );
    };

    let mut start_edit = move |user: &UserSummary| {
        feedback.clear();
        editing.set(Some((user.id, user.role)));
        first_name.set(user.first_name.clone().unwrap_or_default());
        last_name.set(user.last_name.clone().unwrap_or_default());
        email.set(user.email.clone());
    };

    let mut save_edit = move || {
        feedback.clear();
        let Some((user_id, role)) = editing() else {
            return;
        };
        match forms::user_update(&first_name(), &last_name(), &email(), role) {
            Ok(update) => submit(user_id, update),
            Err(message) => feedback.fail(message),
        }
    };

    rsx! {
        FeedbackBanner { error: (feedback.error)(), success: (feedback.success)() }
        match &*users.read_unchecked() {
            None => rsx! { p { class: "text-gray-500", "Loading..." } },
            Some(Err(message)) => rsx! { ui::ErrorBanner { message: message.clone() } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "w-full bg-white rounded-xl shadow-sm text-sm",
                    thead {
                        tr {
                            th { class: "p-3 text-left", "Name" }
                            th { class: "p-3 text-left", "Email" }
                            th { class: "p-3 text-left", "Role" }
                            th { class: "p-3" }
                        }
                    }
                    tbody {
                        for user in list.iter().cloned() {
                            if editing().map(|(id, _)| id) == Some(user.id) {
                                tr {
                                    key: "{user.id}",
                                    class: "border-t bg-gray-50",
                                    td {
                                        class: "p-3 flex gap-2",
                                        input {
                                            class: "w-28 px-2 py-1 border rounded",
                                            placeholder: "First name",
                                            value: first_name(),
                                            oninput: move |evt: FormEvent| first_name.set(evt.value()),
                                        }
                                        input {
                                            class: "w-28 px-2 py-1 border rounded",
                                            placeholder: "Last name",
                                            value: last_name(),
                                            oninput: move |evt: FormEvent| last_name.set(evt.value()),
                                        }
                                    }
                                    td {
                                        class: "p-3",
                                        input {
                                            class: "px-2 py-1 border rounded",
                                            r#type: "email",
                                            value: email(),
                                            oninput: move |evt: FormEvent| email.set(evt.value()),
                                        }
                                    }
                                    td {
                                        class: "p-3",
                                        select {
                                            class: "px-2 py-1 border rounded",
                                            value: editing().map(|(_, role)| role).unwrap_or(user.role).as_str(),
                                            disabled: own_id == Some(user.id),
                                            onchange: move |evt: FormEvent| {
                                                match evt.value().parse::<Role>() {
                                                    Ok(role) => editing.set(Some((user.id, role))),
                                                    Err(message) => feedback.fail(message),
                                                }
                                            },
                                            for role in Role::ALL {
                                                option { key: "{role}", value: role.as_str(), "{role}" }
                                            }
                                        }
                                    }
                                    td {
                                        class: "p-3 text-right",
                                        button {
                                            class: "text-primary-600 mr-3",
                                            disabled: guard.is_busy(),
                                            onclick: move |_| save_edit(),
                                            if guard.is_busy() { "Saving..." } else { "Save" }
                                        }
                                        button {
                                            class: "text-gray-500",
                                            onclick: move |_| editing.set(None),
                                            "Cancel"
                                        }
                                    }
                                }
                            } else {
                                tr {
                                    key: "{user.id}",
                                    class: "border-t",
                                    td { class: "p-3", {user.display_name()} }
                                    td { class: "p-3", "{user.email}" }
                                    td {
                                        class: "p-3",
                                        select {
                                            class: "px-2 py-1 border rounded",
                                            value: user.role.as_str(),
                                            disabled: own_id == Some(user.id) || guard.is_busy(),
                                            onchange: move |evt: FormEvent| {
                                                match evt.value().parse::<Role>() {
                                                    Ok(role) if role != user.role => change_role(user.id, role),
                                                    Ok(_) => {}
                                                    Err(message) => feedback.fail(message),
                                                }
                                            },
                                            for role in Role::ALL {
                                                option { key: "{role}", value: role.as_str(), "{role}" }
                                            }
                                        }
                                    }
                                    td {
                                        class: "p-3 text-right",
                                        button {
                                            class: "text-primary-600 mr-3",
                                            onclick: {
                                                let user = user.clone();
                                                move |_| start_edit(&user)
                                            },
                                            "Edit"
                                        }
                                        if own_id != Some(user.id) {
                                            button {
                                                class: "text-red-600",
                                                disabled: guard.is_busy(),
                                                onclick: move |_| async move {
                                                    let Some(_ticket) = guard.begin() else {
                                                        return;
                                                    };
                                                    let mut session = session;
                                                    match session.client().delete_user(user.id).await {
                                                        Ok(_) => {
                                                            feedback.done("User deleted");
                                                            users.restart();
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
                    }
                }
            },
        }
    }
}
