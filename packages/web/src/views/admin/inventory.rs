use api::{InventoryUpdate, PageRequest, ProductQuery};
use dioxus::prelude::*;
use ui::{forms, use_session, use_submit_guard};

use super::{Feedback, FeedbackBanner, LISTING_SIZE};

#[component]
pub(super) fn InventoryTab() -> Element {
    let session = use_session();
    let mut feedback = Feedback::use_new();
    let mut guard = use_submit_guard();
    let mut product_id = use_signal(String::new);
    let mut quantity = use_signal(String::new);
    let mut location = use_signal(String::new);
    // Per-row input for "set to" and "adjust by".
    let mut row_input = use_signal(String::new);
    let mut row_target = use_signal(|| Option::<i64>::None);

    let mut records = use_resource(move || async move {
        let mut session = session;
        session
            .client()
            .inventory(PageRequest::new(0, LISTING_SIZE))
            .await
            .map(|page| page.content)
            .map_err(|e| session.error_message(&e))
    });
    let products = use_resource(move || async move {
        session
            .client()
            .products(&ProductQuery::page(0, LISTING_SIZE))
            .await
            .map(|page| page.content)
            .unwrap_or_default()
    });

    let add = move |evt: FormEvent| {
        evt.prevent_default();
        feedback.clear();
        let request = match forms::inventory(&product_id(), &quantity(), &location()) {
            Ok(request) => request,
            Err(message) => {
                feedback.fail(message);
                return;
            }
        };
        let Some(ticket) = guard.begin() else {
            return;
        };
        spawn(async move {
            let _ticket = ticket;
            let mut session = session;
            match session.client().create_inventory(&request).await {
                Ok(record) => {
                    feedback.done(format!("Stock record #{} added", record.id));
                    product_id.set(String::new());
                    quantity.set(String::new());
                    location.set(String::new());
                    records.restart();
                }
                Err(e) => feedback.fail(session.error_message(&e)),
            }
        });
    };

    let mut set_level = move |id: i64, location: Option<String>| {
        feedback.clear();
        let quantity = match forms::stock_quantity(&row_input()) {
            Ok(quantity) => quantity,
            Err(message) => {
                feedback.fail(message);
                return;
            }
        };
        let Some(ticket) = guard.begin() else {
            return;
        };
        spawn(async move {
            let _ticket = ticket;
            let mut session = session;
            let update = InventoryUpdate { quantity, location };
            match session.client().update_inventory(id, &update).await {
                Ok(record) => {
                    feedback.done(format!("Stock set to {}", record.quantity));
                    row_target.set(None);
                    row_input.set(String::new());
                    records.restart();
                }
                Err(e) => feedback.fail(session.error_message(&e)),
            }
        });
    };

    let mut adjust = move |id: i64| {
        feedback.clear();
        let change = match forms::adjustment(&row_input()) {
            Ok(change) => change,
            Err(message) => {
                feedback.fail(message);
                return;
            }
        };
        let Some(ticket) = guard.begin() else {
            return;
        };
        spawn(async move {
            let _ticket = ticket;
            let mut session = session;
            match session.client().adjust_inventory(id, change).await {
                Ok(record) => {
                    feedback.done(format!("Stock adjusted to {}", record.quantity));
                    row_target.set(None);
                    row_input.set(String::new());
                    records.restart();
                }
                Err(e) => feedback.fail(session.error_message(&e)),
            }
        });
    };

    let product_options = (*products.read_unchecked()).clone().unwrap_or_default();

    rsx! {
        FeedbackBanner { error: (feedback.error)(), success: (feedback.success)() }
        form {
            onsubmit: add,
            class: "bg-white rounded-xl shadow-sm p-6 mb-8 grid grid-cols-1 md:grid-cols-4 gap-4",
            select {
                class: "px-4 py-2 border rounded-lg",
                value: product_id(),
                onchange: move |evt: FormEvent| product_id.set(evt.value()),
                option { value: "", "Select product" }
                for product in product_options {
                    option { key: "{product.id}", value: "{product.id}", "{product.name}" }
                }
            }
            input {
                class: "px-4 py-2 border rounded-lg",
                r#type: "number",
                placeholder: "Quantity",
                value: quantity(),
                oninput: move |evt: FormEvent| quantity.set(evt.value()),
            }
            input {
                class: "px-4 py-2 border rounded-lg",
                placeholder: "Location",
                value: location(),
                oninput: move |evt: FormEvent| location.set(evt.value()),
            }
            button {
                class: "px-6 py-2 bg-primary-600 text-white rounded-lg disabled:opacity-50",
                r#type: "submit",
                disabled: guard.is_busy(),
                "Add Stock"
            }
        }
        match &*records.read_unchecked() {
            None => rsx! { p { class: "text-gray-500", "Loading..." } },
            Some(Err(message)) => rsx! { ui::ErrorBanner { message: message.clone() } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "w-full bg-white rounded-xl shadow-sm text-sm",
                    thead {
                        tr {
                            th { class: "p-3 text-left", "Product" }
                            th { class: "p-3 text-left", "Location" }
                            th { class: "p-3 text-right", "Quantity" }
                            th { class: "p-3" }
                        }
                    }
                    tbody {
                        for record in list.iter().cloned() {
                            tr {
                                key: "{record.id}",
                                class: "border-t",
                                td {
                                    class: "p-3",
                                    {record.product_name.clone().unwrap_or_else(|| format!("Product #{}", record.product_id))}
                                }
                                td { class: "p-3", {record.location.clone().unwrap_or_default()} }
                                td { class: "p-3 text-right", "{record.quantity}" }
                                td {
                                    class: "p-3 text-right",
                                    if row_target() == Some(record.id) {
                                        input {
                                            class: "w-24 px-2 py-1 border rounded mr-2",
                                            placeholder: "e.g. 5 or -2",
                                            value: row_input(),
                                            oninput: move |evt: FormEvent| row_input.set(evt.value()),
                                        }
                                        button {
                                            class: "text-primary-600 mr-2",
                                            disabled: guard.is_busy(),
                                            onclick: {
                                                let location = record.location.clone();
                                                move |_| set_level(record.id, location.clone())
                                            },
                                            "Set"
                                        }
                                        button {
                                            class: "text-primary-600 mr-2",
                                            disabled: guard.is_busy(),
                                            onclick: move |_| adjust(record.id),
                                            "Adjust"
                                        }
                                        button {
                                            class: "text-gray-500 mr-2",
                                            onclick: move |_| row_target.set(None),
                                            "Cancel"
                                        }
                                    } else {
                                        button {
                                            class: "text-primary-600 mr-3",
                                            onclick: move |_| {
                                                row_input.set(String::new());
                                                row_target.set(Some(record.id));
                                            },
                                            "Edit"
                                        }
                                    }
                                    button {
                                        class: "text-red-600",
                                        disabled: guard.is_busy(),
                                        onclick: move |_| async move {
                                            let Some(_ticket) = guard.begin() else {
                                                return;
                                            };
                                            let mut session = session;
                                            match session.client().delete_inventory(record.id).await {
                                                Ok(_) => {
                                                    feedback.done("Stock record deleted");
                                                    records.restart();
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
