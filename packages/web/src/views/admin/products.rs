use api::{PageRequest, ProductQuery};
use dioxus::prelude::*;
use ui::{format, forms, use_session, use_submit_guard};

use super::{Feedback, FeedbackBanner, LISTING_SIZE};

#[component]
pub(super) fn ProductsTab() -> Element {
    let session = use_session();
    let mut feedback = Feedback::use_new();
    let mut guard = use_submit_guard();
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut name = use_signal(String::new);
    let mut category_id = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut sku = use_signal(String::new);
    let mut description = use_signal(String::new);

    let mut products = use_resource(move || async move {
        let mut session = session;
        session
            .client()
            .products(&ProductQuery::page(0, LISTING_SIZE))
            .await
            .map(|page| page.content)
            .map_err(|e| session.error_message(&e))
    });
    let categories = use_resource(move || async move {
        session
            .client()
            .categories(PageRequest::new(0, LISTING_SIZE))
            .await
            .map(|page| page.content)
            .unwrap_or_default()
    });

    let mut reset_form = move || {
        editing.set(None);
        name.set(String::new());
        category_id.set(String::new());
        price.set(String::new());
        sku.set(String::new());
        description.set(String::new());
    };

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        feedback.clear();
        let request = match forms::product(&name(), &category_id(), &price(), &sku(), &description()) {
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
                Some(id) => client.update_product(id, &request).await,
                None => client.create_product(&request).await,
            };
            match result {
                Ok(product) => {
                    tracing::info!(product_id = product.id, "Product saved");
                    feedback.done(format!("Saved {}", product.name));
                    reset_form();
                    products.restart();
                }
                Err(e) => feedback.fail(session.error_message(&e)),
            }
        });
    };

    let category_options = (*categories.read_unchecked()).clone().unwrap_or_default();

    rsx! {
        FeedbackBanner { error: (feedback.error)(), success: (feedback.success)() }
        form {
            onsubmit: save,
            class: "bg-white rounded-xl shadow-sm p-6 mb-8 grid grid-cols-1 md:grid-cols-2 gap-4",
            h2 {
                class: "md:col-span-2 text-xl font-bold",
                if editing().is_some() { "Edit Product" } else { "Add Product" }
            }
            input {
                class: "px-4 py-2 border rounded-lg",
                placeholder: "Name",
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            select {
                class: "px-4 py-2 border rounded-lg",
                value: category_id(),
                onchange: move |evt: FormEvent| category_id.set(evt.value()),
                option { value: "", "Select category" }
                for category in category_options {
                    option { key: "{category.id}", value: "{category.id}", "{category.name}" }
                }
            }
            input {
                class: "px-4 py-2 border rounded-lg",
                r#type: "number",
                step: "0.01",
                placeholder: "Price",
                value: price(),
                oninput: move |evt: FormEvent| price.set(evt.value()),
            }
            input {
                class: "px-4 py-2 border rounded-lg",
                placeholder: "SKU",
                value: sku(),
                oninput: move |evt: FormEvent| sku.set(evt.value()),
            }
            textarea {
                class: "md:col-span-2 px-4 py-2 border rounded-lg",
                placeholder: "Description",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            div {
                class: "md:col-span-2 flex gap-2",
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
        match &*products.read_unchecked() {
            None => rsx! { p { class: "text-gray-500", "Loading..." } },
            Some(Err(message)) => rsx! { ui::ErrorBanner { message: message.clone() } },
            Some(Ok(list)) => rsx! {
                table {
                    class: "w-full bg-white rounded-xl shadow-sm text-sm",
                    thead {
                        tr {
                            th { class: "p-3 text-left", "Name" }
                            th { class: "p-3 text-left", "Category" }
                            th { class: "p-3 text-right", "Price" }
                            th { class: "p-3 text-right", "Stock" }
                            th { class: "p-3" }
                        }
                    }
                    tbody {
                        for product in list.iter().cloned() {
                            tr {
                                key: "{product.id}",
                                class: "border-t",
                                td { class: "p-3", "{product.name}" }
                                td { class: "p-3", {product.category_name.clone().unwrap_or_default()} }
                                td { class: "p-3 text-right", {format::price(product.price)} }
                                td { class: "p-3 text-right", "{product.quantity}" }
                                td {
                                    class: "p-3 text-right",
                                    button {
                                        class: "text-primary-600 mr-3",
                                        onclick: {
                                            let product = product.clone();
                                            move |_| {
                                                feedback.clear();
                                                editing.set(Some(product.id));
                                                name.set(product.name.clone());
                                                let category = (*categories.read())
                                                    .as_ref()
                                                    .and_then(|list| {
                                                        list.iter().find(|c| product.category_name.as_deref() == Some(c.name.as_str()))
                                                    })
                                                    .map(|c| c.id.to_string())
                                                    .unwrap_or_default();
                                                category_id.set(category);
                                                price.set(product.price.to_string());
                                                sku.set(product.sku.clone().unwrap_or_default());
                                                description.set(product.description.clone().unwrap_or_default());
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
                                            match session.client().delete_product(product.id).await {
                                                Ok(message) => {
                                                    feedback.done(if message.is_empty() { "Product deleted".to_string() } else { message });
                                                    products.restart();
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
