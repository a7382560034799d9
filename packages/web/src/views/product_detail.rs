//! Single product with a quantity selector.

use dioxus::prelude::*;
use ui::{format, use_cart, use_session, ErrorBanner, SuccessBanner};

use crate::Route;

#[component]
pub fn ProductDetail(id: i64) -> Element {
    let session = use_session();
    let mut cart = use_cart();
    let mut quantity = use_signal(|| 1i64);
    let mut notice = use_signal(|| Option::<String>::None);

    let product = use_resource(use_reactive!(|(id,)| async move {
        let mut session = session;
        session.client().product(id).await.map_err(|e| {
            tracing::error!(product_id = id, "Failed to load product: {}", e);
            session.error_message(&e)
        })
    }));

    match &*product.read_unchecked() {
        None => rsx! { p { class: "p-8 text-gray-500", "Loading..." } },
        Some(Err(message)) => rsx! {
            div {
                class: "max-w-3xl mx-auto p-8",
                ErrorBanner { message: message.clone() }
                Link { to: Route::Products {}, "Back to products" }
            }
        },
        Some(Ok(product)) => {
            let item = product.clone();
            let stock = product.quantity.max(1);
            let price = format::price(product.price);
            let stock_label = format::stock_label(product.quantity);
            rsx! {
                div {
                    class: "max-w-5xl mx-auto px-4 py-8 grid grid-cols-1 md:grid-cols-2 gap-8",
                    div {
                        class: "bg-gradient-to-br from-primary-100 to-primary-200 rounded-xl h-96 flex items-center justify-center text-9xl",
                        "📦"
                    }
                    div {
                        h1 { class: "text-3xl font-bold text-gray-900 mb-2", "{product.name}" }
                        if let Some(category) = &product.category_name {
                            p { class: "text-gray-500 mb-4", "{category}" }
                        }
                        p { class: "text-3xl font-bold text-primary-600 mb-4", "{price}" }
                        p { class: "text-sm text-gray-600 mb-4", "{stock_label}" }
                        if let Some(description) = &product.description {
                            p { class: "text-gray-700 mb-6", "{description}" }
                        }
                        if let Some(message) = notice() {
                            SuccessBanner { message }
                        }
                        div {
                            class: "flex items-center gap-4 mb-6",
                            button {
                                class: "px-3 py-1 border rounded",
                                onclick: move |_| quantity.set((quantity() - 1).max(1)),
                                "-"
                            }
                            span { class: "text-lg font-medium", "{quantity}" }
                            button {
                                class: "px-3 py-1 border rounded",
                                onclick: move |_| quantity.set((quantity() + 1).min(stock)),
                                "+"
                            }
                        }
                        button {
                            class: "w-full py-3 bg-primary-600 text-white rounded-lg disabled:opacity-50",
                            disabled: !product.in_stock(),
                            onclick: move |_| {
                                let count = quantity();
                                if cart.add(&item, count) {
                                    notice.set(Some(format!("Added {count} x {} to your cart", item.name)));
                                }
                            },
                            "Add to Cart"
                        }
                    }
                }
            }
        }
    }
}
