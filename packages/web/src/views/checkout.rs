//! Order summary and placement.

use std::time::Duration;

use dioxus::prelude::*;
use ui::{format, platform, use_cart, use_submit_guard, ErrorBanner};

use super::use_required_session;
use crate::Route;

#[component]
pub fn Checkout() -> Element {
    let session = use_required_session();
    let cart = use_cart();
    let nav = use_navigator();
    let mut guard = use_submit_guard();
    let mut error = use_signal(|| Option::<String>::None);
    let mut placed = use_signal(|| Option::<i64>::None);

    use_effect(move || {
        if cart.is_empty() && placed().is_none() {
            nav.replace(Route::Cart {});
        }
    });

    let place_order = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(ticket) = guard.begin() else {
            return;
        };
        spawn(async move {
            let _ticket = ticket;
            error.set(None);
            match cart.checkout(session).await {
                Ok(order) => {
                    tracing::info!(order_id = order.id, "Checkout complete");
                    placed.set(Some(order.id));
                    platform::sleep(Duration::from_secs(2)).await;
                    nav.push(Route::Orders {});
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    if let Some(order_id) = placed() {
        return rsx! {
            div {
                class: "max-w-xl mx-auto py-24 text-center",
                h2 { class: "text-3xl font-bold text-gray-900 mb-4", "Order Placed Successfully!" }
                p { class: "text-gray-600", "Order #{order_id}. Redirecting to your orders..." }
            }
        };
    }

    let items = cart.items();
    let total = format::price(cart.total());

    rsx! {
        div {
            class: "max-w-4xl mx-auto px-4 py-12",
            h1 { class: "text-4xl font-bold text-gray-900 mb-8", "Checkout" }
            form {
                onsubmit: place_order,
                class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
                div {
                    class: "bg-white rounded-xl shadow-sm p-6",
                    h2 { class: "text-xl font-bold mb-4", "Order Summary" }
                    for item in items {
                        div {
                            key: "{item.product_id}",
                            class: "flex justify-between mb-3",
                            div {
                                p { class: "font-medium", "{item.name}" }
                                p { class: "text-sm text-gray-500", "Qty: {item.quantity}" }
                            }
                            p { class: "font-medium", {format::price(item.line_total())} }
                        }
                    }
                    div {
                        class: "border-t mt-4 pt-4 flex justify-between text-lg font-bold",
                        span { "Total" }
                        span { class: "text-primary-600", "{total}" }
                    }
                }
                div {
                    class: "bg-white rounded-xl shadow-sm p-6",
                    h2 { class: "text-xl font-bold mb-4", "Payment Information" }
                    if let Some(message) = error() {
                        ErrorBanner { message }
                    }
                    p {
                        class: "bg-blue-50 border-l-4 border-blue-500 p-4 rounded mb-6 text-sm text-blue-700",
                        "This is a demo checkout. No actual payment will be processed."
                    }
                    button {
                        class: "w-full py-4 bg-primary-600 text-white rounded-lg disabled:opacity-50",
                        r#type: "submit",
                        disabled: guard.is_busy(),
                        if guard.is_busy() { "Placing Order..." } else { "Place Order" }
                    }
                    button {
                        class: "w-full mt-3 py-4 bg-gray-100 text-gray-700 rounded-lg",
                        r#type: "button",
                        onclick: move |_| {
                            nav.push(Route::Cart {});
                        },
                        "Back to Cart"
                    }
                }
            }
        }
    }
}
